//! Exponential parameter ramps.
//!
//! Frequency glides follow WebAudio `exponentialRampToValueAtTime`
//! semantics: between anchors the value moves multiplicatively,
//! `v(t) = v0 * (v1 / v0)^((t - t0) / (t1 - t0))`. Both endpoints must be
//! nonzero; the catalogue guarantees that.

use crate::cue::RampSegment;

/// Exponential interpolation between two positive values, `t` in [0, 1].
pub fn exp_interp(from: f64, to: f64, t: f64) -> f64 {
    from * (to / from).powf(t)
}

/// Piecewise-exponential frequency curve for one tone.
///
/// Times are relative to the tone's own start. Before the first anchor the
/// curve holds the start value; past the last segment it holds that
/// segment's target.
#[derive(Debug, Clone)]
pub struct FrequencyCurve {
    start_hz: f64,
    segments: Vec<RampSegment>,
}

impl FrequencyCurve {
    pub fn new(start_hz: f64, segments: Vec<RampSegment>) -> Self {
        FrequencyCurve { start_hz, segments }
    }

    /// Frequency in Hz at `t` seconds after tone start.
    pub fn value_at(&self, t: f64) -> f64 {
        let mut seg_start = 0.0;
        let mut value = self.start_hz;
        for seg in &self.segments {
            if t < seg.end_seconds {
                let span = seg.end_seconds - seg_start;
                if span <= 0.0 {
                    return seg.target_hz;
                }
                let frac = ((t - seg_start) / span).clamp(0.0, 1.0);
                return exp_interp(value, seg.target_hz, frac);
            }
            seg_start = seg.end_seconds;
            value = seg.target_hz;
        }
        value
    }

    /// True when the tone holds a single flat pitch.
    pub fn is_flat(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exp_interp_endpoints() {
        assert!((exp_interp(200.0, 400.0, 0.0) - 200.0).abs() < 1e-9);
        assert!((exp_interp(200.0, 400.0, 1.0) - 400.0).abs() < 1e-9);
    }

    #[test]
    fn exp_interp_is_multiplicative() {
        // Halfway through a 200→800 glide the value is the geometric mean.
        let mid = exp_interp(200.0, 800.0, 0.5);
        assert!((mid - 400.0).abs() < 1e-9, "Expected 400, got {mid}");
    }

    #[test]
    fn flat_curve_holds_start() {
        let c = FrequencyCurve::new(800.0, vec![]);
        assert!(c.is_flat());
        assert_eq!(c.value_at(0.0), 800.0);
        assert_eq!(c.value_at(10.0), 800.0);
    }

    #[test]
    fn chained_segments_hit_anchors() {
        // The engine-rev shape: 200 → 400 by 0.15s → 200 by 0.3s.
        let c = FrequencyCurve::new(
            200.0,
            vec![
                RampSegment { target_hz: 400.0, end_seconds: 0.15 },
                RampSegment { target_hz: 200.0, end_seconds: 0.3 },
            ],
        );
        assert!((c.value_at(0.0) - 200.0).abs() < 1e-9);
        assert!((c.value_at(0.15) - 400.0).abs() < 1.0);
        assert!((c.value_at(0.3) - 200.0).abs() < 1e-9);
        // Rising through the first segment, falling through the second.
        assert!(c.value_at(0.075) > 200.0 && c.value_at(0.075) < 400.0);
        assert!(c.value_at(0.225) > 200.0 && c.value_at(0.225) < 400.0);
    }

    #[test]
    fn holds_last_target_past_end() {
        let c = FrequencyCurve::new(
            600.0,
            vec![RampSegment { target_hz: 150.0, end_seconds: 0.5 }],
        );
        assert!((c.value_at(0.5) - 150.0).abs() < 1e-9);
        assert!((c.value_at(2.0) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn monotonic_within_segment() {
        let c = FrequencyCurve::new(
            100.0,
            vec![RampSegment { target_hz: 500.0, end_seconds: 0.3 }],
        );
        let mut prev = c.value_at(0.0);
        for i in 1..=30 {
            let v = c.value_at(i as f64 * 0.01);
            assert!(v >= prev, "Glide should rise monotonically: {prev} -> {v}");
            prev = v;
        }
    }
}
