//! Flipcard
//!
//! A two-faced card that turns over in 3D when tapped or swiped.
//!
//! # Features
//!
//! - **Perspective rotation** around the vertical or horizontal axis,
//!   anchored at the card center
//! - **Tap and swipe** flipping, each of which can be switched off
//! - **Direction-aware** flips: the card turns away from where the gesture
//!   started
//! - **Callbacks** when a flip starts and when it settles
//! - **TOML options** for the data-only part of the configuration
//!
//! # Example
//!
//! ```rust
//! use flipcard::{FlipAxis, FlipCard, FlipCardConfig};
//! use flipcard_animation::AnimationScheduler;
//! use flipcard_core::{ContentId, Layer, Rect};
//!
//! let bounds = Rect::new(0.0, 0.0, 200.0, 120.0);
//! let config = FlipCardConfig::new(
//!     Layer::content(ContentId(1), bounds),
//!     Layer::content(ContentId(2), bounds),
//! )
//! .duration_ms(300)
//! .axis(FlipAxis::Vertical)
//! .on_flip_completed(|is_front| println!("settled on front: {is_front}"));
//!
//! let mut scheduler = AnimationScheduler::new();
//! let mut card = FlipCard::new(config);
//! card.set_bounds(bounds);
//! card.mount(&scheduler.handle())?;
//!
//! card.toggle_card()?;
//! assert!(!card.is_front());
//!
//! // Host frame loop
//! while scheduler.tick_ms(16.0) | card.on_frame()? {
//!     let _tree = card.render();
//! }
//! assert_eq!(card.controller().progress(), 1.0);
//! # Ok::<(), flipcard::FlipCardError>(())
//! ```

pub mod card;
pub mod config;
pub mod controller;
pub mod curves;
pub mod error;
pub mod face;
pub mod gesture;
pub mod rotation;

pub use card::{render_card, FlipCard};
pub use config::{FlipCallback, FlipCardConfig, FlipCardOptions, DEFAULT_DURATION_MS};
pub use controller::FlipController;
pub use curves::RotationCurves;
pub use error::{FlipCardError, Result};
pub use face::{Face, FlipDirection};
pub use gesture::{Gesture, GestureWiring, SwipeLatch, SwipeRecognizer, TapRecognizer};
pub use rotation::FlipAxis;
