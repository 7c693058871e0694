//! Tone voice — a single tone unit: oscillator + glide curve + envelope.

use crate::cue::ToneSpec;

use super::envelope::DecayEnvelope;
use super::oscillator::Oscillator;
use super::ramp::FrequencyCurve;

/// One realized tone: transient, created at schedule time and discarded
/// once its duration elapses. Silent outside its [start, stop) window.
#[derive(Debug, Clone)]
pub struct ToneVoice {
    oscillator: Oscillator,
    curve: FrequencyCurve,
    envelope: DecayEnvelope,
    /// First active sample, relative to cue invocation.
    pub start_sample: usize,
    /// First silent sample after the tone ends.
    pub stop_sample: usize,
    sample_rate: f64,
    position: usize,
}

impl ToneVoice {
    pub fn from_spec(spec: &ToneSpec, sample_rate: f64) -> Self {
        let start_sample = (spec.start_offset_seconds * sample_rate).round() as usize;
        let stop_sample = start_sample + (spec.duration_seconds * sample_rate).round() as usize;
        ToneVoice {
            oscillator: Oscillator::new(spec.waveform, spec.start_frequency_hz, sample_rate),
            curve: FrequencyCurve::new(spec.start_frequency_hz, spec.frequency_ramp.clone()),
            envelope: DecayEnvelope::new(
                spec.gain_start,
                spec.gain_floor,
                spec.gain_decay_seconds,
                sample_rate,
            ),
            start_sample,
            stop_sample,
            sample_rate,
            position: 0,
        }
    }

    /// Generate the next sample on the cue's timeline and advance.
    pub fn next_sample(&mut self) -> f64 {
        let pos = self.position;
        self.position += 1;

        if pos < self.start_sample || pos >= self.stop_sample {
            return 0.0;
        }

        if !self.curve.is_flat() {
            let t = (pos - self.start_sample) as f64 / self.sample_rate;
            self.oscillator.frequency = self.curve.value_at(t);
        }

        self.oscillator.next_sample() * self.envelope.next_sample()
    }

    /// Is this voice past its stop time?
    pub fn is_finished(&self) -> bool {
        self.position >= self.stop_sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::{RampSegment, ToneSpec, Waveform};

    fn beep_spec() -> ToneSpec {
        ToneSpec {
            waveform: Waveform::Square,
            start_frequency_hz: 800.0,
            frequency_ramp: vec![],
            gain_start: 0.1,
            gain_floor: 0.01,
            gain_decay_seconds: 0.1,
            start_offset_seconds: 0.0,
            duration_seconds: 0.1,
        }
    }

    #[test]
    fn voice_produces_sound_in_window() {
        let mut v = ToneVoice::from_spec(&beep_spec(), 44100.0);
        let mut has_nonzero = false;
        for _ in 0..4410 {
            if v.next_sample().abs() > 0.001 {
                has_nonzero = true;
            }
        }
        assert!(has_nonzero, "Voice should produce non-zero output");
        assert!(v.is_finished());
    }

    #[test]
    fn voice_silent_before_offset() {
        let spec = ToneSpec {
            start_offset_seconds: 0.1,
            ..beep_spec()
        };
        let mut v = ToneVoice::from_spec(&spec, 44100.0);
        // The first 0.1s (4410 samples) precede the tone's start.
        for i in 0..4410 {
            let s = v.next_sample();
            assert_eq!(s, 0.0, "Sample {i} should be silent before the offset");
        }
        assert!(!v.is_finished());
    }

    #[test]
    fn voice_silent_after_stop() {
        let mut v = ToneVoice::from_spec(&beep_spec(), 44100.0);
        for _ in 0..4410 {
            v.next_sample();
        }
        assert!(v.is_finished());
        for _ in 0..100 {
            assert_eq!(v.next_sample(), 0.0);
        }
    }

    #[test]
    fn voice_output_bounded_by_gain() {
        // PolyBLEP overshoot is small; gain 0.1 output stays well under 0.2.
        let mut v = ToneVoice::from_spec(&beep_spec(), 44100.0);
        for _ in 0..4410 {
            let s = v.next_sample();
            assert!(s.abs() < 0.2, "Sample exceeds envelope bound: {s}");
        }
    }

    #[test]
    fn glide_voice_reaches_target_pitch() {
        // Glide 200→400 over the first half, then the curve holds the
        // target. Count zero crossings in the held stretch to measure pitch.
        let spec = ToneSpec {
            waveform: Waveform::Sine,
            frequency_ramp: vec![RampSegment { target_hz: 400.0, end_seconds: 0.25 }],
            gain_start: 1.0,
            gain_floor: 0.99, // effectively flat gain so crossings are clean
            gain_decay_seconds: 0.5,
            duration_seconds: 0.5,
            start_frequency_hz: 200.0,
            start_offset_seconds: 0.0,
        };
        let mut v = ToneVoice::from_spec(&spec, 44100.0);
        let samples: Vec<f64> = (0..22050).map(|_| v.next_sample()).collect();

        // [0.3s, 0.5s] is flat at the target frequency.
        let tail = &samples[13230..22050];
        let crossings = tail.windows(2).filter(|w| w[0] < 0.0 && w[1] >= 0.0).count();
        let measured_hz = crossings as f64 / 0.2;
        assert!(
            (measured_hz - 400.0).abs() < 15.0,
            "Expected ~400 Hz after the glide, measured {measured_hz}"
        );
    }
}
