//! Exponential decay envelope.
//!
//! Every cue uses the same envelope family: set an initial gain at tone
//! start, then decay exponentially to a near-zero floor. The floor is never
//! exactly zero — exponential ramps require a nonzero target — so the tone's
//! stop time, not the envelope, ends the sound.

use super::ramp::exp_interp;

/// Exponential gain decay from `start` down to `floor`.
#[derive(Debug, Clone)]
pub struct DecayEnvelope {
    /// Initial amplitude in (0, 1].
    pub start: f64,
    /// Decay target, > 0.
    pub floor: f64,
    /// Seconds from `start` to `floor`.
    pub duration: f64,
    sample_rate: f64,
    position: usize,
}

impl DecayEnvelope {
    pub fn new(start: f64, floor: f64, duration: f64, sample_rate: f64) -> Self {
        DecayEnvelope {
            start,
            floor,
            duration,
            sample_rate,
            position: 0,
        }
    }

    /// Gain at `t` seconds after tone start. Holds the floor past the end.
    pub fn value_at(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return self.start;
        }
        if t >= self.duration {
            return self.floor;
        }
        exp_interp(self.start, self.floor, t / self.duration)
    }

    /// Generate the next envelope sample and advance.
    pub fn next_sample(&mut self) -> f64 {
        let t = self.position as f64 / self.sample_rate;
        self.position += 1;
        self.value_at(t)
    }
}
