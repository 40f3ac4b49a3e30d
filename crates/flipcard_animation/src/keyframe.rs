//! Keyframe curves
//!
//! A [`KeyframeCurve`] maps progress in `[0, 1]` to a value by interpolating
//! between keyframes. Unlike a running animation it holds no clock: callers
//! sample it with whatever progress their driver currently reports, which
//! lets the same curve be played forward or backward.

use smallvec::SmallVec;

use crate::easing::Easing;

/// A single keyframe
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Time position (0.0 to 1.0)
    pub time: f32,
    /// Value at this keyframe
    pub value: f32,
    /// Easing function to use when transitioning TO this keyframe
    pub easing: Easing,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            easing: Easing::Linear,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Piecewise curve over `[0, 1]`
///
/// Keyframes are kept sorted by time. At a time shared by two keyframes the
/// later one wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyframeCurve {
    keyframes: SmallVec<[Keyframe; 4]>,
}

impl KeyframeCurve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Curve starting at `value` when progress is 0
    pub fn starting_at(value: f32) -> Self {
        Self::new().keyframe(Keyframe::new(0.0, value))
    }

    /// Add a keyframe, keeping time order
    pub fn keyframe(mut self, keyframe: Keyframe) -> Self {
        let idx = self
            .keyframes
            .iter()
            .position(|kf| kf.time > keyframe.time)
            .unwrap_or(self.keyframes.len());
        self.keyframes.insert(idx, keyframe);
        self
    }

    /// Linear segment ending at `value` at `time`
    pub fn to(self, time: f32, value: f32) -> Self {
        self.keyframe(Keyframe::new(time, value))
    }

    /// Constant segment: repeat the last value until `time`
    pub fn hold(self, time: f32) -> Self {
        let value = self.keyframes.last().map(|kf| kf.value).unwrap_or(0.0);
        self.to(time, value)
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Sample the curve at `progress` (clamped to `[0, 1]`)
    pub fn sample(&self, progress: f32) -> f32 {
        let Some(first) = self.keyframes.first() else {
            return 0.0;
        };

        let progress = progress.clamp(0.0, 1.0);

        let mut prev = first;
        let mut next = first;
        for kf in &self.keyframes {
            if kf.time <= progress {
                prev = kf;
                next = kf;
            } else {
                next = kf;
                break;
            }
        }

        let span = next.time - prev.time;
        if span <= f32::EPSILON {
            return prev.value;
        }

        let local = (progress - prev.time) / span;
        prev.value + (next.value - prev.value) * next.easing.apply(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_curve_is_zero() {
        assert_eq!(KeyframeCurve::new().sample(0.5), 0.0);
    }

    #[test]
    fn test_linear_segment() {
        let curve = KeyframeCurve::starting_at(0.0).to(1.0, 10.0);
        assert_eq!(curve.sample(0.0), 0.0);
        assert!((curve.sample(0.25) - 2.5).abs() < 1e-5);
        assert_eq!(curve.sample(1.0), 10.0);
    }

    #[test]
    fn test_sweep_then_hold() {
        let curve = KeyframeCurve::starting_at(0.0).to(0.5, 90.0).hold(1.0);
        assert!((curve.sample(0.25) - 45.0).abs() < 1e-4);
        assert_eq!(curve.sample(0.5), 90.0);
        assert_eq!(curve.sample(0.75), 90.0);
        assert_eq!(curve.sample(1.0), 90.0);
    }

    #[test]
    fn test_hold_then_sweep() {
        let curve = KeyframeCurve::starting_at(-90.0).hold(0.5).to(1.0, 0.0);
        assert_eq!(curve.sample(0.2), -90.0);
        assert_eq!(curve.sample(0.5), -90.0);
        assert!((curve.sample(0.75) + 45.0).abs() < 1e-4);
        assert_eq!(curve.sample(1.0), 0.0);
    }

    #[test]
    fn test_out_of_range_progress_clamps() {
        let curve = KeyframeCurve::starting_at(1.0).to(1.0, 2.0);
        assert_eq!(curve.sample(-1.0), 1.0);
        assert_eq!(curve.sample(3.0), 2.0);
    }

    #[test]
    fn test_keyframes_are_sorted() {
        let curve = KeyframeCurve::new()
            .keyframe(Keyframe::new(1.0, 5.0))
            .keyframe(Keyframe::new(0.0, 1.0));
        let times: Vec<f32> = curve.keyframes().iter().map(|kf| kf.time).collect();
        assert_eq!(times, vec![0.0, 1.0]);
        assert!((curve.sample(0.5) - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_segment_easing() {
        let curve = KeyframeCurve::starting_at(0.0)
            .keyframe(Keyframe::new(1.0, 1.0).with_easing(Easing::EaseInQuad));
        assert!((curve.sample(0.5) - 0.25).abs() < 1e-5);
    }
}
