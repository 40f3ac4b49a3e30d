//! Flip card configuration
//!
//! [`FlipCardConfig`] is fixed at construction: the two faces, the callbacks
//! and a set of plain-data [`FlipCardOptions`]. The options can also be
//! loaded from TOML, e.g.
//!
//! ```toml
//! duration_ms = 350
//! axis = "vertical"
//! swipe_to_flip = false
//! initial_face = "back"
//! easing = "ease-in-out"
//! ```

use std::fmt;
use std::rc::Rc;

use flipcard_animation::Easing;
use flipcard_core::Layer;
use serde::{Deserialize, Serialize};

use crate::error::{FlipCardError, Result};
use crate::face::Face;
use crate::gesture::DEFAULT_SWIPE_THRESHOLD;
use crate::rotation::FlipAxis;

/// Default flip duration
pub const DEFAULT_DURATION_MS: u32 = 500;

/// Flip notification; receives `true` when the front is the new face
pub type FlipCallback = Rc<dyn Fn(bool)>;

/// Data-only options
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipCardOptions {
    /// Duration of one full flip
    pub duration_ms: u32,
    /// Axis the card turns around
    pub axis: FlipAxis,
    /// Flip when the card is tapped
    pub tap_to_flip: bool,
    /// Flip when the card is dragged along its axis
    pub swipe_to_flip: bool,
    /// Face shown after mounting
    pub initial_face: Face,
    /// Accumulated drag distance that triggers a swipe flip
    pub swipe_threshold: f32,
    /// Easing applied to driver progress
    pub easing: Easing,
}

impl Default for FlipCardOptions {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            axis: FlipAxis::Horizontal,
            tap_to_flip: true,
            swipe_to_flip: true,
            initial_face: Face::Front,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            easing: Easing::Linear,
        }
    }
}

impl FlipCardOptions {
    /// Parse options from TOML; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| FlipCardError::InvalidOptions(e.to_string()))
    }
}

/// Flip card configuration
#[derive(Clone)]
pub struct FlipCardConfig {
    /// Front face content
    pub front: Layer,
    /// Back face content
    pub back: Layer,
    pub options: FlipCardOptions,
    /// Called when a flip starts, with the new face
    pub on_flip_started: Option<FlipCallback>,
    /// Called when a flip settles, with the current face
    pub on_flip_completed: Option<FlipCallback>,
}

impl FlipCardConfig {
    pub fn new(front: Layer, back: Layer) -> Self {
        Self {
            front,
            back,
            options: FlipCardOptions::default(),
            on_flip_started: None,
            on_flip_completed: None,
        }
    }

    /// Replace all data options at once
    pub fn with_options(mut self, options: FlipCardOptions) -> Self {
        self.options = options;
        self
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.options.duration_ms = duration_ms;
        self
    }

    pub fn axis(mut self, axis: FlipAxis) -> Self {
        self.options.axis = axis;
        self
    }

    pub fn tap_to_flip(mut self, enabled: bool) -> Self {
        self.options.tap_to_flip = enabled;
        self
    }

    pub fn swipe_to_flip(mut self, enabled: bool) -> Self {
        self.options.swipe_to_flip = enabled;
        self
    }

    pub fn initial_face(mut self, face: Face) -> Self {
        self.options.initial_face = face;
        self
    }

    pub fn swipe_threshold(mut self, threshold: f32) -> Self {
        self.options.swipe_threshold = threshold;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.options.easing = easing;
        self
    }

    pub fn on_flip_started<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool) + 'static,
    {
        self.on_flip_started = Some(Rc::new(callback));
        self
    }

    pub fn on_flip_completed<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool) + 'static,
    {
        self.on_flip_completed = Some(Rc::new(callback));
        self
    }
}

impl fmt::Debug for FlipCardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlipCardConfig")
            .field("front", &self.front)
            .field("back", &self.back)
            .field("options", &self.options)
            .field("on_flip_started", &self.on_flip_started.is_some())
            .field("on_flip_completed", &self.on_flip_completed.is_some())
            .finish()
    }
}
