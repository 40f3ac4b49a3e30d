//! Flipcard Animation System
//!
//! Frame-driven progress animation and the curves sampled from it.
//!
//! # Features
//!
//! - **Progress Drivers**: a scalar in `[0, 1]` that runs forward or backward
//!   over a fixed duration and reports when it settles on a bound
//! - **Scheduler**: owns every live driver and advances them once per frame
//! - **Keyframe Curves**: piecewise functions of progress with per-segment easing
//! - **Redirectable**: reversing a running driver continues from its current value
//!
//! # Example
//!
//! ```rust
//! use flipcard_animation::{AnimationScheduler, DriverStatus, KeyframeCurve};
//!
//! let mut scheduler = AnimationScheduler::new();
//! let driver = scheduler.handle().create_driver(100, 0.0)?;
//! let angle = KeyframeCurve::starting_at(0.0).to(1.0, 90.0);
//!
//! driver.forward()?;
//! while scheduler.tick_ms(16.0) {}
//!
//! assert_eq!(driver.status()?, DriverStatus::Completed);
//! assert_eq!(angle.sample(driver.value()?), 90.0);
//! # Ok::<(), flipcard_animation::AnimationError>(())
//! ```

pub mod driver;
pub mod easing;
pub mod error;
pub mod keyframe;
pub mod scheduler;

pub use driver::{DriverStatus, ProgressDriver};
pub use easing::Easing;
pub use error::{AnimationError, Result};
pub use keyframe::{Keyframe, KeyframeCurve};
pub use scheduler::{AnimationScheduler, DriverHandle, DriverId, SchedulerHandle};
