//! Flip card widget
//!
//! Glue between the host and the flip logic: gestures in, layer tree out.
//!
//! ```text
//! host event ─► GestureWiring ─► FlipController ─► progress driver
//!                                      │
//! scheduler tick ─► on_frame() ────────┘
//!
//! render() = render_card(progress, axis, face, curves, bounds, front, back)
//! ```

use flipcard_animation::SchedulerHandle;
use flipcard_core::{Event, Layer, Point, PointerEvents, Rect};

use crate::config::FlipCardConfig;
use crate::controller::FlipController;
use crate::curves::RotationCurves;
use crate::error::Result;
use crate::face::Face;
use crate::gesture::{Gesture, GestureWiring};
use crate::rotation::{self, FlipAxis};

/// Debug name of the card's root stack
pub const CARD_LAYER: &str = "flipcard";
/// Debug name of the front face wrapper
pub const FRONT_LAYER: &str = "flipcard-front";
/// Debug name of the back face wrapper
pub const BACK_LAYER: &str = "flipcard-back";

/// A two-faced card that turns over on tap or swipe
pub struct FlipCard {
    front: Layer,
    back: Layer,
    axis: FlipAxis,
    bounds: Rect,
    controller: FlipController,
    gestures: GestureWiring,
}

impl FlipCard {
    /// Build an unmounted card
    pub fn new(config: FlipCardConfig) -> Self {
        let FlipCardConfig {
            front,
            back,
            options,
            on_flip_started,
            on_flip_completed,
        } = config;

        Self {
            front,
            back,
            axis: options.axis,
            bounds: Rect::ZERO,
            controller: FlipController::new(&options, on_flip_started, on_flip_completed),
            gestures: GestureWiring::from_options(&options),
        }
    }

    pub fn mount(&mut self, scheduler: &SchedulerHandle) -> Result<()> {
        self.controller.mount(scheduler)
    }

    pub fn unmount(&mut self) {
        self.controller.unmount();
    }

    pub fn is_mounted(&self) -> bool {
        self.controller.is_mounted()
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn axis(&self) -> FlipAxis {
        self.axis
    }

    pub fn controller(&self) -> &FlipController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FlipController {
        &mut self.controller
    }

    pub fn face(&self) -> Face {
        self.controller.face()
    }

    pub fn is_front(&self) -> bool {
        self.controller.is_front()
    }

    /// Flip without a gesture, exactly as a tap would
    pub fn toggle_card(&mut self) -> Result<Face> {
        let is_right_origin = !self.controller.is_front();
        self.controller.toggle(is_right_origin)
    }

    /// Feed a host event. Returns whether it started a flip.
    pub fn handle_event(&mut self, event: &Event) -> Result<bool> {
        match self.gestures.handle(event, self.bounds) {
            Some(Gesture::Tap) => {
                self.toggle_card()?;
                Ok(true)
            }
            Some(Gesture::Swipe(direction)) => {
                self.controller.flip(direction)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Call after each scheduler tick. Returns whether more frames are needed.
    pub fn on_frame(&mut self) -> Result<bool> {
        self.controller.on_frame()
    }

    /// Current layer tree
    pub fn render(&self) -> Layer {
        render_card(
            self.controller.progress(),
            self.axis,
            self.controller.face(),
            self.controller.curves(),
            self.bounds,
            &self.front,
            &self.back,
        )
    }

    /// The face taking input at `point`, if it lies on the card
    pub fn hit_test(&self, point: Point) -> Option<Face> {
        self.bounds.contains(point).then(|| self.controller.face())
    }
}

impl std::fmt::Debug for FlipCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlipCard")
            .field("face", &self.controller.face())
            .field("axis", &self.axis)
            .field("bounds", &self.bounds)
            .field("mounted", &self.controller.is_mounted())
            .field("animating", &self.controller.is_animating())
            .finish()
    }
}

/// Project flip state onto a layer tree.
///
/// The result is a stack of the back face under the front face, each turned
/// by its curve. Only `face` accepts pointer input, and a face is hidden
/// once it is turned edge-on or further.
pub fn render_card(
    progress: f32,
    axis: FlipAxis,
    face: Face,
    curves: &RotationCurves,
    bounds: Rect,
    front: &Layer,
    back: &Layer,
) -> Layer {
    let side = |angle: f32, child: &Layer, is_current: bool, name: &str| {
        let pointer_events = if is_current {
            PointerEvents::Auto
        } else {
            PointerEvents::None
        };
        rotation::animate(angle, axis, bounds, child.clone())
            .with_visible(rotation::faces_viewer(angle))
            .with_pointer_events(pointer_events)
            .with_name(name)
    };

    Layer::stack(vec![
        side(curves.back_angle(progress), back, face == Face::Back, BACK_LAYER),
        side(curves.front_angle(progress), front, face == Face::Front, FRONT_LAYER),
    ])
    .with_name(CARD_LAYER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::FlipDirection;
    use flipcard_animation::Easing;
    use flipcard_core::ContentId;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 200.0, 120.0);

    fn faces() -> (Layer, Layer) {
        (
            Layer::content(ContentId(1), BOUNDS),
            Layer::content(ContentId(2), BOUNDS),
        )
    }

    fn pointer_enabled(tree: &Layer) -> Vec<&str> {
        [FRONT_LAYER, BACK_LAYER]
            .into_iter()
            .filter(|name| tree.find_named(name).is_some_and(Layer::accepts_pointer))
            .collect()
    }

    #[test]
    fn test_resting_front() {
        let (front, back) = faces();
        let curves = RotationCurves::resting(Easing::Linear);
        let tree = render_card(0.0, FlipAxis::Horizontal, Face::Front, &curves, BOUNDS, &front, &back);

        assert_eq!(tree.props().name.as_deref(), Some(CARD_LAYER));
        assert!(tree.find_named(FRONT_LAYER).unwrap().is_visible());
        assert!(!tree.find_named(BACK_LAYER).unwrap().is_visible());
        assert_eq!(pointer_enabled(&tree), vec![FRONT_LAYER]);
        assert_eq!(tree.hit_test(Point::new(50.0, 50.0)), Some(ContentId(1)));
    }

    #[test]
    fn test_visibility_follows_progress_half() {
        let (front, back) = faces();
        let curves = RotationCurves::build(Face::Front, FlipDirection::Right, Easing::Linear);

        let early = render_card(0.3, FlipAxis::Horizontal, Face::Back, &curves, BOUNDS, &front, &back);
        assert!(early.find_named(FRONT_LAYER).unwrap().is_visible());
        assert!(!early.find_named(BACK_LAYER).unwrap().is_visible());

        let late = render_card(0.7, FlipAxis::Horizontal, Face::Back, &curves, BOUNDS, &front, &back);
        assert!(!late.find_named(FRONT_LAYER).unwrap().is_visible());
        assert!(late.find_named(BACK_LAYER).unwrap().is_visible());
    }

    #[test]
    fn test_exactly_one_face_takes_input() {
        let (front, back) = faces();
        let curves = RotationCurves::resting(Easing::Linear);
        for face in [Face::Front, Face::Back] {
            for progress in [0.0, 0.25, 0.5, 0.75, 1.0] {
                let tree = render_card(
                    progress,
                    FlipAxis::Vertical,
                    face,
                    &curves,
                    BOUNDS,
                    &front,
                    &back,
                );
                assert_eq!(pointer_enabled(&tree).len(), 1, "{:?} at {}", face, progress);
            }
        }
    }

    #[test]
    fn test_render_is_pure() {
        let (front, back) = faces();
        let curves = RotationCurves::build(Face::Back, FlipDirection::Left, Easing::EaseOut);
        let a = render_card(0.4, FlipAxis::Vertical, Face::Front, &curves, BOUNDS, &front, &back);
        let b = render_card(0.4, FlipAxis::Vertical, Face::Front, &curves, BOUNDS, &front, &back);
        assert_eq!(a, b);
    }

    #[test]
    fn test_card_hit_test_uses_bounds() {
        let (front, back) = faces();
        let mut card = FlipCard::new(FlipCardConfig::new(front, back));
        assert_eq!(card.hit_test(Point::new(10.0, 10.0)), None);

        card.set_bounds(BOUNDS);
        assert_eq!(card.hit_test(Point::new(10.0, 10.0)), Some(Face::Front));
        assert_eq!(card.hit_test(Point::new(500.0, 10.0)), None);
    }
}
