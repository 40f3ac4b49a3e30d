//! Animation scheduler
//!
//! Owns every live progress driver and advances them each frame. Widgets
//! never hold a driver directly: they get a [`DriverHandle`] from a
//! [`SchedulerHandle`], and the driver stays registered (ticked every frame)
//! until the handle is disposed or dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Instant;

use slotmap::{new_key_type, SlotMap};

use crate::driver::{DriverStatus, ProgressDriver};
use crate::error::{AnimationError, Result};

new_key_type! {
    pub struct DriverId;
}

/// Assumed frame time for the first `tick()` (~60fps)
const FIRST_FRAME_MS: f32 = 16.0;

#[derive(Default)]
struct SchedulerInner {
    drivers: SlotMap<DriverId, ProgressDriver>,
    last_frame: Option<Instant>,
}

/// The animation scheduler that ticks all registered drivers
///
/// Single-threaded: the host calls `tick()` (or `tick_ms()`) from its frame
/// loop, then lets widgets observe the new values.
pub struct AnimationScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner::default())),
        }
    }

    /// Weak handle for creating drivers
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Tick all drivers using wall-clock time since the previous tick.
    ///
    /// Returns true if any driver still needs frames.
    pub fn tick(&mut self) -> bool {
        let now = Instant::now();
        let dt_ms = {
            let mut inner = self.inner.borrow_mut();
            let dt = inner
                .last_frame
                .map(|last| (now - last).as_secs_f32() * 1000.0)
                .unwrap_or(FIRST_FRAME_MS);
            inner.last_frame = Some(now);
            dt
        };
        self.tick_ms(dt_ms)
    }

    /// Tick all drivers by an explicit frame time
    pub fn tick_ms(&mut self, dt_ms: f32) -> bool {
        let mut inner = self.inner.borrow_mut();
        let mut active = false;

        for (id, driver) in inner.drivers.iter_mut() {
            if driver.tick(dt_ms) {
                tracing::trace!(?id, status = ?driver.status(), "driver settled");
            }
            active |= driver.is_animating();
        }

        active
    }

    /// Check if any driver is still moving
    pub fn has_active_animations(&self) -> bool {
        self.inner
            .borrow()
            .drivers
            .values()
            .any(ProgressDriver::is_animating)
    }

    /// Number of registered drivers
    pub fn driver_count(&self) -> usize {
        self.inner.borrow().drivers.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-owning reference to an [`AnimationScheduler`]
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<RefCell<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Whether the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Register a new driver resting at `initial`
    pub fn create_driver(&self, duration_ms: u32, initial: f32) -> Result<DriverHandle> {
        let inner = self.inner.upgrade().ok_or(AnimationError::SchedulerDropped)?;
        let id = inner
            .borrow_mut()
            .drivers
            .insert(ProgressDriver::new(duration_ms, initial));

        tracing::debug!(?id, duration_ms, initial, "driver created");

        Ok(DriverHandle {
            id,
            scheduler: self.clone(),
            disposed: false,
        })
    }
}

/// Exclusive owner of one registered driver
///
/// Dropping the handle disposes the driver.
pub struct DriverHandle {
    id: DriverId,
    scheduler: SchedulerHandle,
    disposed: bool,
}

impl DriverHandle {
    pub fn id(&self) -> DriverId {
        self.id
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn with<R>(&self, f: impl FnOnce(&mut ProgressDriver) -> R) -> Result<R> {
        if self.disposed {
            return Err(AnimationError::DriverDisposed);
        }
        let Some(inner) = self.scheduler.inner.upgrade() else {
            tracing::warn!(id = ?self.id, "driver used after its scheduler was dropped");
            return Err(AnimationError::SchedulerDropped);
        };
        let mut inner = inner.borrow_mut();
        let driver = inner
            .drivers
            .get_mut(self.id)
            .ok_or(AnimationError::DriverDisposed)?;
        Ok(f(driver))
    }

    pub fn value(&self) -> Result<f32> {
        self.with(|d| d.value())
    }

    pub fn status(&self) -> Result<DriverStatus> {
        self.with(|d| d.status())
    }

    pub fn is_animating(&self) -> Result<bool> {
        self.with(|d| d.is_animating())
    }

    pub fn forward(&self) -> Result<()> {
        self.with(ProgressDriver::forward)
    }

    pub fn reverse(&self) -> Result<()> {
        self.with(ProgressDriver::reverse)
    }

    pub fn stop(&self) -> Result<()> {
        self.with(ProgressDriver::stop)
    }

    pub fn set_value(&self, value: f32) -> Result<()> {
        self.with(|d| d.set_value(value))
    }

    /// Stop the driver and remove its registration. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        match self.scheduler.inner.upgrade() {
            Some(inner) => {
                inner.borrow_mut().drivers.remove(self.id);
                tracing::debug!(id = ?self.id, "driver disposed");
            }
            None => {
                tracing::trace!(id = ?self.id, "driver outlived its scheduler");
            }
        }
    }
}

impl Drop for DriverHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for DriverHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverHandle")
            .field("id", &self.id)
            .field("disposed", &self.disposed)
            .finish()
    }
}
