//! Rotation animator
//!
//! Turns a rotation angle and axis into a perspective transform anchored at
//! the center of the face, and wraps a child layer in it. Stateless: the same
//! inputs always give the same layer.

use flipcard_core::{Layer, Mat4, Rect};
use serde::{Deserialize, Serialize};

/// Perspective weight written into row 3, column 2 of the projection
pub const PERSPECTIVE_WEIGHT: f32 = 0.001;

/// Angle at which a face is edge-on to the viewer
pub const EDGE_ON_DEG: f32 = 90.0;

/// Axis the card turns around
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlipAxis {
    /// Turn left/right around the vertical (Y) axis
    #[default]
    Horizontal,
    /// Turn up/down around the horizontal (X) axis
    Vertical,
}

/// Perspective × rotation, about the origin
pub fn rotation_matrix(angle_deg: f32, axis: FlipAxis) -> Mat4 {
    let radians = angle_deg.to_radians();
    let rotation = match axis {
        FlipAxis::Horizontal => Mat4::rotation_y(radians),
        FlipAxis::Vertical => Mat4::rotation_x(radians),
    };
    Mat4::perspective(PERSPECTIVE_WEIGHT).mul(&rotation)
}

/// Rotation anchored at the center of `bounds`
pub fn anchored_rotation(angle_deg: f32, axis: FlipAxis, bounds: Rect) -> Mat4 {
    let center = bounds.center();
    Mat4::translation(center.x, center.y, 0.0)
        .mul(&rotation_matrix(angle_deg, axis))
        .mul(&Mat4::translation(-center.x, -center.y, 0.0))
}

/// Render `child` turned by `angle_deg`
pub fn animate(angle_deg: f32, axis: FlipAxis, bounds: Rect, child: Layer) -> Layer {
    child.with_transform_3d(anchored_rotation(angle_deg, axis, bounds))
}

/// A face is drawn only while it is turned less than a quarter turn
pub fn faces_viewer(angle_deg: f32) -> bool {
    angle_deg.abs() < EDGE_ON_DEG - 1e-3
}

#[cfg(test)]
mod tests {
    use super::*;
    use flipcard_core::{ContentId, Point};

    const BOUNDS: Rect = Rect::new(100.0, 50.0, 200.0, 100.0);

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-2
    }

    #[test]
    fn test_zero_angle_is_identity_projection() {
        for axis in [FlipAxis::Horizontal, FlipAxis::Vertical] {
            let m = anchored_rotation(0.0, axis, BOUNDS);
            let p = m.project_point(Point::new(110.0, 60.0));
            assert!(approx(p.x, 110.0) && approx(p.y, 60.0), "{:?}", axis);
        }
    }

    #[test]
    fn test_center_is_fixed() {
        let m = anchored_rotation(37.0, FlipAxis::Horizontal, BOUNDS);
        let c = m.project_point(BOUNDS.center());
        assert!(approx(c.x, 200.0) && approx(c.y, 100.0));
    }

    #[test]
    fn test_horizontal_quarter_turn_collapses_width() {
        let m = anchored_rotation(90.0, FlipAxis::Horizontal, BOUNDS);
        let left = m.project_point(Point::new(100.0, 50.0));
        let right = m.project_point(Point::new(300.0, 50.0));
        assert!(approx(left.x, 200.0));
        assert!(approx(right.x, 200.0));
    }

    #[test]
    fn test_vertical_quarter_turn_collapses_height() {
        let m = anchored_rotation(-90.0, FlipAxis::Vertical, BOUNDS);
        let top = m.project_point(Point::new(150.0, 50.0));
        let bottom = m.project_point(Point::new(150.0, 150.0));
        assert!(approx(top.y, 100.0));
        assert!(approx(bottom.y, 100.0));
    }

    #[test]
    fn test_perspective_makes_turn_asymmetric() {
        // Without perspective both halves would project to the same width
        let m = anchored_rotation(45.0, FlipAxis::Horizontal, BOUNDS);
        let left = m.project_point(Point::new(100.0, 50.0));
        let right = m.project_point(Point::new(300.0, 50.0));
        let center = BOUNDS.center().x;
        assert!(!approx(center - left.x, right.x - center));
    }

    #[test]
    fn test_animate_wraps_child() {
        let child = Layer::content(ContentId(9), BOUNDS);
        let layer = animate(30.0, FlipAxis::Vertical, BOUNDS, child.clone());
        match layer {
            Layer::Transform3D {
                transform, layer, ..
            } => {
                assert_eq!(*layer, child);
                assert_eq!(transform, anchored_rotation(30.0, FlipAxis::Vertical, BOUNDS));
            }
            other => panic!("expected Transform3D, got {:?}", other),
        }
    }

    #[test]
    fn test_faces_viewer() {
        assert!(faces_viewer(0.0));
        assert!(faces_viewer(-89.0));
        assert!(!faces_viewer(90.0));
        assert!(!faces_viewer(-90.0));
    }
}
