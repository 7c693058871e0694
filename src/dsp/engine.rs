//! Cue engine — plans a cue's tones and renders them to audio samples.
//!
//! Planning resolves each tone's start/stop offsets against a sample rate;
//! rendering realizes the plan into transient voices and sums them. Both
//! steps are pure: the engine holds no state between invocations, so
//! overlapping cues never share envelope or oscillator state.

use crate::cue::{CueDefinition, ToneSpec};

use super::ramp::FrequencyCurve;
use super::voice::ToneVoice;

/// One tone scheduled on a cue's timeline.
#[derive(Debug, Clone)]
pub struct PlannedTone {
    /// First active sample, relative to cue invocation.
    pub start_sample: usize,
    /// First silent sample after the tone ends.
    pub stop_sample: usize,
    pub spec: ToneSpec,
}

impl PlannedTone {
    /// Frequency in Hz at `t` seconds after this tone's own start.
    pub fn frequency_at(&self, t: f64) -> f64 {
        FrequencyCurve::new(self.spec.start_frequency_hz, self.spec.frequency_ramp.clone())
            .value_at(t)
    }
}

/// The synthesis engine. Stateless apart from its sample rate.
pub struct CueEngine {
    pub sample_rate: f64,
}

impl CueEngine {
    pub fn new(sample_rate: f64) -> Self {
        CueEngine { sample_rate }
    }

    /// Resolve every tone in the cue to sample offsets.
    pub fn plan(&self, cue: &CueDefinition) -> Vec<PlannedTone> {
        cue.tones
            .iter()
            .map(|spec| {
                let start = (spec.start_offset_seconds * self.sample_rate).round() as usize;
                let stop = start + (spec.duration_seconds * self.sample_rate).round() as usize;
                PlannedTone {
                    start_sample: start,
                    stop_sample: stop,
                    spec: spec.clone(),
                }
            })
            .collect()
    }

    /// Render the whole cue to mono f32 samples.
    pub fn render(&self, cue: &CueDefinition) -> Vec<f32> {
        let total_samples = (cue.total_seconds() * self.sample_rate).round() as usize;
        let mut voices: Vec<ToneVoice> = cue
            .tones
            .iter()
            .map(|spec| ToneVoice::from_spec(spec, self.sample_rate))
            .collect();

        let mut output = Vec::with_capacity(total_samples);
        for _ in 0..total_samples {
            let mut sum = 0.0;
            for voice in voices.iter_mut() {
                sum += voice.next_sample();
            }
            output.push(soft_clip(sum) as f32);
        }
        output
    }

    /// Render to interleaved stereo i16 PCM (for WAV export).
    pub fn render_pcm_i16(&self, cue: &CueDefinition) -> Vec<i16> {
        let mono = self.render(cue);
        let mut stereo = Vec::with_capacity(mono.len() * 2);
        for &s in &mono {
            let sample = (s as f64 * 32767.0).round().clamp(-32768.0, 32767.0) as i16;
            stereo.push(sample); // L
            stereo.push(sample); // R
        }
        stereo
    }
}

/// Soft clipper using tanh, so simultaneous cues sum without harsh clipping.
fn soft_clip(x: f64) -> f64 {
    x.tanh()
}
