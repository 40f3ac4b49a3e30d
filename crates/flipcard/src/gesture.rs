//! Gesture recognizers
//!
//! Tap and swipe recognition for the card. A recognizer only exists when its
//! flip mode is enabled; a disabled mode is not wired at all, so its events
//! fall through untouched.

use flipcard_core::{event_types, Event, EventData, Point, Rect};

use crate::config::FlipCardOptions;
use crate::face::FlipDirection;
use crate::rotation::FlipAxis;

/// Drag distance along the active axis that fires a swipe flip
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 10.0;

/// A recognized flip gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    Swipe(FlipDirection),
}

/// Single-fire latch for one continuous drag
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SwipeLatch {
    /// No drag in progress
    #[default]
    Idle,
    /// Dragging, threshold not reached yet
    Armed { accumulated: f32 },
    /// Already flipped during this drag
    Fired,
}

/// Turns drag deltas along one axis into at most one flip per drag
#[derive(Clone, Debug)]
pub struct SwipeRecognizer {
    axis: FlipAxis,
    threshold: f32,
    latch: SwipeLatch,
}

impl SwipeRecognizer {
    pub fn new(axis: FlipAxis, threshold: f32) -> Self {
        Self {
            axis,
            threshold,
            latch: SwipeLatch::Idle,
        }
    }

    pub fn latch(&self) -> SwipeLatch {
        self.latch
    }

    /// Feed one drag delta. Returns the flip direction the first time the
    /// accumulated distance exceeds the threshold.
    ///
    /// Moving right/down means the drag started on the left/top, so the card
    /// turns right; moving left/up turns it left.
    pub fn on_drag(&mut self, delta_x: f32, delta_y: f32) -> Option<FlipDirection> {
        let delta = match self.axis {
            FlipAxis::Horizontal => delta_x,
            FlipAxis::Vertical => delta_y,
        };

        let accumulated = match self.latch {
            SwipeLatch::Fired => return None,
            SwipeLatch::Idle => delta,
            SwipeLatch::Armed { accumulated } => accumulated + delta,
        };

        if accumulated.abs() > self.threshold {
            self.latch = SwipeLatch::Fired;
            tracing::trace!(accumulated, "swipe latch fired");
            Some(FlipDirection::from_origin(accumulated < 0.0))
        } else {
            self.latch = SwipeLatch::Armed { accumulated };
            None
        }
    }

    /// Drag finished; the next drag may fire again
    pub fn on_drag_end(&mut self) {
        if self.latch != SwipeLatch::Idle {
            tracing::trace!(latch = ?self.latch, "swipe latch reset");
        }
        self.latch = SwipeLatch::Idle;
    }
}

/// Press-then-release inside the card, with no drag in between
#[derive(Clone, Debug, Default)]
pub struct TapRecognizer {
    pressed: bool,
}

impl TapRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn on_pointer_down(&mut self, inside: bool) {
        self.pressed = inside;
    }

    /// Any drag turns the press into something other than a tap
    pub fn on_drag(&mut self) {
        self.pressed = false;
    }

    pub fn on_pointer_up(&mut self, inside: bool) -> bool {
        let tapped = self.pressed && inside;
        self.pressed = false;
        tapped
    }
}

/// The recognizers wired for one card
#[derive(Clone, Debug, Default)]
pub struct GestureWiring {
    tap: Option<TapRecognizer>,
    swipe: Option<SwipeRecognizer>,
}

impl GestureWiring {
    pub fn from_options(options: &FlipCardOptions) -> Self {
        Self {
            tap: options.tap_to_flip.then(TapRecognizer::new),
            swipe: options
                .swipe_to_flip
                .then(|| SwipeRecognizer::new(options.axis, options.swipe_threshold)),
        }
    }

    pub fn tap(&self) -> Option<&TapRecognizer> {
        self.tap.as_ref()
    }

    pub fn swipe(&self) -> Option<&SwipeRecognizer> {
        self.swipe.as_ref()
    }

    /// Route one event through the wired recognizers
    pub fn handle(&mut self, event: &Event, bounds: Rect) -> Option<Gesture> {
        let inside = || {
            event
                .position()
                .is_some_and(|(x, y)| bounds.contains(Point::new(x, y)))
        };

        match (event.event_type, &event.data) {
            (event_types::POINTER_DOWN, _) => {
                if let Some(tap) = self.tap.as_mut() {
                    tap.on_pointer_down(inside());
                }
                None
            }
            (event_types::POINTER_UP, _) => {
                let tap = self.tap.as_mut()?;
                tap.on_pointer_up(inside()).then_some(Gesture::Tap)
            }
            (
                event_types::DRAG,
                EventData::Drag {
                    delta_x, delta_y, ..
                },
            ) => {
                if let Some(tap) = self.tap.as_mut() {
                    tap.on_drag();
                }
                let swipe = self.swipe.as_mut()?;
                swipe.on_drag(*delta_x, *delta_y).map(Gesture::Swipe)
            }
            (event_types::DRAG_END, _) => {
                if let Some(swipe) = self.swipe.as_mut() {
                    swipe.on_drag_end();
                }
                None
            }
            _ => None,
        }
    }
}
