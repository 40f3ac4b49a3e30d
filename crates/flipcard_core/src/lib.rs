//! Flipcard Core
//!
//! Foundational primitives shared by the flipcard crates:
//!
//! - **Geometry**: points, sizes, rects, and column-major 4x4 matrices with
//!   perspective projection
//! - **Layers**: a small composable layer tree that widgets render into
//! - **Events**: pointer and drag events delivered by the host event loop
//!
//! # Example
//!
//! ```rust
//! use flipcard_core::{ContentId, Layer, Mat4, Rect};
//!
//! let bounds = Rect::new(0.0, 0.0, 200.0, 120.0);
//! let card = Layer::content(ContentId(1), bounds)
//!     .with_transform_3d(Mat4::rotation_y(0.0));
//!
//! assert!(card.is_visible());
//! ```

pub mod events;
pub mod geometry;
pub mod layer;

pub use events::{event_types, Event, EventData, EventType};
pub use geometry::{Mat4, Point, Rect, Size};
pub use layer::{ContentId, Layer, LayerProperties, PointerEvents};
