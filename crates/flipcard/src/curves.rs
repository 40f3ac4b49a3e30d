//! Front/back rotation curves
//!
//! Each flip is drawn with two keyframe curves over driver progress. The
//! departing face sweeps from flat to edge-on over the first half and then
//! holds; the arriving face holds edge-on on the opposite side and sweeps
//! back to flat over the second half. At progress 0.5 the two curves sit at
//! `+k·90°` and `-k·90°`, so the hand-over has no seam.
//!
//! Easing shapes each half-sweep on its own, so the midpoint stays fixed for
//! every easing.

use flipcard_animation::{Easing, Keyframe, KeyframeCurve};

use crate::face::{Face, FlipDirection};
use crate::rotation::EDGE_ON_DEG;

/// The pair of curves for the current flip
#[derive(Clone, Debug, PartialEq)]
pub struct RotationCurves {
    front: KeyframeCurve,
    back: KeyframeCurve,
    easing: Easing,
}

impl RotationCurves {
    /// Curves for a flip starting from `from`, turning toward `direction`.
    ///
    /// Flipping off the front runs the driver 0 → 1 and flipping off the
    /// back runs it 1 → 0, so the sign is mirrored for the back to keep the
    /// departing face turning the requested way.
    pub fn build(from: Face, direction: FlipDirection, easing: Easing) -> Self {
        let k = match from {
            Face::Front => direction.sign(),
            Face::Back => -direction.sign(),
        };
        let edge = k * EDGE_ON_DEG;

        Self {
            front: KeyframeCurve::starting_at(0.0)
                .keyframe(Keyframe::new(0.5, edge).with_easing(easing))
                .hold(1.0),
            back: KeyframeCurve::starting_at(-edge)
                .hold(0.5)
                .keyframe(Keyframe::new(1.0, 0.0).with_easing(easing)),
            easing,
        }
    }

    /// Curves for a card at rest on either face
    pub fn resting(easing: Easing) -> Self {
        Self::build(Face::Front, FlipDirection::Right, easing)
    }

    /// Front face angle in degrees at raw driver `progress`
    pub fn front_angle(&self, progress: f32) -> f32 {
        self.front.sample(progress)
    }

    /// Back face angle in degrees at raw driver `progress`
    pub fn back_angle(&self, progress: f32) -> f32 {
        self.back.sample(progress)
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACES: [Face; 2] = [Face::Front, Face::Back];
    const DIRECTIONS: [FlipDirection; 2] = [FlipDirection::Left, FlipDirection::Right];

    #[test]
    fn test_midpoint_is_seamless() {
        for from in FACES {
            for direction in DIRECTIONS {
                let curves = RotationCurves::build(from, direction, Easing::Linear);
                let front = curves.front_angle(0.5);
                let back = curves.back_angle(0.5);
                assert_eq!(front.abs(), 90.0, "{:?} {:?}", from, direction);
                assert_eq!(front, -back, "{:?} {:?}", from, direction);
            }
        }
    }

    #[test]
    fn test_bounds() {
        for from in FACES {
            for direction in DIRECTIONS {
                let curves = RotationCurves::build(from, direction, Easing::Linear);
                assert_eq!(curves.front_angle(0.0), 0.0);
                assert_eq!(curves.back_angle(0.0).abs(), 90.0);
                assert_eq!(curves.front_angle(1.0).abs(), 90.0);
                assert_eq!(curves.back_angle(1.0), 0.0);
            }
        }
    }

    #[test]
    fn test_departing_face_turns_requested_way() {
        // Off the front: progress rises, the front leaves
        let right = RotationCurves::build(Face::Front, FlipDirection::Right, Easing::Linear);
        assert!(right.front_angle(0.25) > 0.0);
        let left = RotationCurves::build(Face::Front, FlipDirection::Left, Easing::Linear);
        assert!(left.front_angle(0.25) < 0.0);

        // Off the back: progress falls, the back leaves
        let right = RotationCurves::build(Face::Back, FlipDirection::Right, Easing::Linear);
        assert!(right.back_angle(0.75) > 0.0);
        let left = RotationCurves::build(Face::Back, FlipDirection::Left, Easing::Linear);
        assert!(left.back_angle(0.75) < 0.0);
    }

    #[test]
    fn test_sweep_is_linear_within_half() {
        let curves = RotationCurves::build(Face::Front, FlipDirection::Right, Easing::Linear);
        assert!((curves.front_angle(0.25) - 45.0).abs() < 1e-3);
        assert!((curves.back_angle(0.75) + 45.0).abs() < 1e-3);
        assert_eq!(curves.front_angle(0.75), 90.0);
        assert_eq!(curves.back_angle(0.25), -90.0);
    }

    const EASINGS: [Easing; 8] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EASE,
    ];

    #[test]
    fn test_every_easing_keeps_midpoint() {
        for easing in EASINGS {
            for from in FACES {
                for direction in DIRECTIONS {
                    let curves = RotationCurves::build(from, direction, easing);
                    let front = curves.front_angle(0.5);
                    assert_eq!(front.abs(), 90.0, "{:?} {:?} {:?}", easing, from, direction);
                    assert_eq!(front, -curves.back_angle(0.5), "{:?}", easing);
                    assert_eq!(curves.front_angle(0.0), 0.0, "{:?}", easing);
                    assert_eq!(curves.back_angle(1.0), 0.0, "{:?}", easing);
                }
            }
        }
    }

    #[test]
    fn test_easing_shapes_each_half() {
        let curves = RotationCurves::build(Face::Front, FlipDirection::Right, Easing::EaseIn);
        // Quarter progress is halfway through the front's sweep
        assert!((curves.front_angle(0.25) - 90.0 * 0.125).abs() < 1e-3);
        assert!((curves.back_angle(0.75) + 90.0 * (1.0 - 0.125)).abs() < 1e-3);
        assert_eq!(curves.back_angle(0.25), -90.0);
        assert_eq!(curves.easing(), Easing::EaseIn);
    }

    #[test]
    fn test_tap_round_trip_uses_same_curves() {
        // A tap flips off the front to the right and back off the back to the
        // left; both build identical curves so the card retraces its path.
        let there = RotationCurves::build(Face::Front, FlipDirection::Right, Easing::Linear);
        let back = RotationCurves::build(Face::Back, FlipDirection::Left, Easing::Linear);
        assert_eq!(there, back);
    }
}
