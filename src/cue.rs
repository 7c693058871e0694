//! Cue catalogue — declarative descriptions of every sound effect.
//!
//! A cue is a named set of tones played with independent start offsets.
//! The catalogue is static data; `lookup` builds a [`CueDefinition`] on
//! demand and the synthesis engine stays generic over all cues.

use serde::{Deserialize, Serialize};

/// Supported waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// One exponential frequency glide segment.
///
/// The glide starts from the previous anchor (the tone's start frequency,
/// or the preceding segment's target) and ends at `target_hz` when
/// `end_seconds` (relative to tone start) is reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampSegment {
    pub target_hz: f64,
    pub end_seconds: f64,
}

/// The declarative description of a single tone within a cue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneSpec {
    pub waveform: Waveform,
    /// Start frequency in Hz, > 0.
    pub start_frequency_hz: f64,
    /// Chained exponential glide segments, in order. Empty = flat pitch.
    #[serde(default)]
    pub frequency_ramp: Vec<RampSegment>,
    /// Initial amplitude in (0, 1].
    pub gain_start: f64,
    /// Decay floor, > 0 (exponential ramps require a nonzero target).
    pub gain_floor: f64,
    /// Seconds over which the gain decays from `gain_start` to `gain_floor`.
    pub gain_decay_seconds: f64,
    /// Delay relative to cue invocation, in seconds.
    pub start_offset_seconds: f64,
    /// Total lifetime of this tone, in seconds.
    pub duration_seconds: f64,
}

/// A named, pre-defined short sound effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CueDefinition {
    pub id: String,
    pub tones: Vec<ToneSpec>,
}

impl CueDefinition {
    /// Seconds from invocation until the last tone stops.
    pub fn total_seconds(&self) -> f64 {
        self.tones
            .iter()
            .map(|t| t.start_offset_seconds + t.duration_seconds)
            .fold(0.0, f64::max)
    }
}

/// Default amplitude for the interaction cues.
const GAIN_DEFAULT: f64 = 0.1;
/// Exponential decay floor shared by every cue.
const GAIN_FLOOR: f64 = 0.01;

fn tone(waveform: Waveform, frequency: f64, duration: f64) -> ToneSpec {
    ToneSpec {
        waveform,
        start_frequency_hz: frequency,
        frequency_ramp: Vec::new(),
        gain_start: GAIN_DEFAULT,
        gain_floor: GAIN_FLOOR,
        gain_decay_seconds: duration,
        start_offset_seconds: 0.0,
        duration_seconds: duration,
    }
}

/// Every fixed cue id, in catalogue order. The five loading-light steps are
/// parameterized (`light-step-1` … `light-step-5`) and listed explicitly.
pub fn cue_ids() -> Vec<String> {
    let mut ids = vec![
        "engine-rev".to_string(),
        "radio-beep".to_string(),
        "drs-activation".to_string(),
        "gear-shift".to_string(),
        "turbo-boost".to_string(),
        "success".to_string(),
    ];
    for step in 1..=5 {
        ids.push(format!("light-step-{step}"));
    }
    ids.push("lights-out".to_string());
    ids
}

/// Look up the definition for a cue id. Unknown ids return `None`; the
/// play surfaces log and no-op on that (intended contract, not a fallback).
pub fn lookup(id: &str) -> Option<CueDefinition> {
    let tones = match id {
        // Hover feedback: sawtooth rev, pitch swells up and back down.
        "engine-rev" => vec![ToneSpec {
            frequency_ramp: vec![
                RampSegment { target_hz: 400.0, end_seconds: 0.15 },
                RampSegment { target_hz: 200.0, end_seconds: 0.3 },
            ],
            ..tone(Waveform::Sawtooth, 200.0, 0.3)
        }],
        // Navigation blip: flat square wave.
        "radio-beep" => vec![tone(Waveform::Square, 800.0, 0.1)],
        // Two staggered sine tones.
        "drs-activation" => vec![
            tone(Waveform::Sine, 600.0, 0.4),
            ToneSpec {
                start_offset_seconds: 0.1,
                ..tone(Waveform::Sine, 900.0, 0.4)
            },
        ],
        "gear-shift" => vec![ToneSpec {
            frequency_ramp: vec![
                RampSegment { target_hz: 300.0, end_seconds: 0.1 },
                RampSegment { target_hz: 150.0, end_seconds: 0.2 },
            ],
            ..tone(Waveform::Sawtooth, 150.0, 0.2)
        }],
        "turbo-boost" => vec![ToneSpec {
            frequency_ramp: vec![
                RampSegment { target_hz: 500.0, end_seconds: 0.3 },
                RampSegment { target_hz: 100.0, end_seconds: 0.5 },
            ],
            ..tone(Waveform::Sawtooth, 100.0, 0.5)
        }],
        // C-E-G chord, one note every 100 ms.
        "success" => [523.0, 659.0, 784.0]
            .iter()
            .enumerate()
            .map(|(i, &freq)| ToneSpec {
                start_offset_seconds: i as f64 * 0.1,
                ..tone(Waveform::Sine, freq, 0.6)
            })
            .collect(),
        // Start-sequence lights: each step beeps 100 Hz higher, louder
        // than the interaction cues to cut through.
        _ if id.starts_with("light-step-") => {
            let step: u32 = id["light-step-".len()..].parse().ok()?;
            if !(1..=5).contains(&step) {
                return None;
            }
            vec![ToneSpec {
                gain_start: 0.15,
                ..tone(Waveform::Square, 1000.0 + step as f64 * 100.0, 0.3)
            }]
        }
        // Dual descending oscillators sharing one envelope.
        "lights-out" => vec![
            ToneSpec {
                gain_start: 0.25,
                frequency_ramp: vec![RampSegment { target_hz: 150.0, end_seconds: 0.5 }],
                ..tone(Waveform::Sawtooth, 600.0, 0.5)
            },
            ToneSpec {
                gain_start: 0.25,
                frequency_ramp: vec![RampSegment { target_hz: 100.0, end_seconds: 0.5 }],
                ..tone(Waveform::Triangle, 300.0, 0.5)
            },
        ],
        _ => return None,
    };

    Some(CueDefinition { id: id.to_string(), tones })
}
