//! Flip controller
//!
//! Two-state machine (front showing / back showing) driving one progress
//! driver. A toggle rebuilds the rotation curves, redirects the driver,
//! flips the face immediately and reports the new face to the flip-started
//! callback. The flip-completed callback fires from `on_frame()` once the
//! driver rests on a bound, or from the next toggle if that toggle arrives
//! before the host polled the settled driver.
//!
//! Toggling mid-flight neither queues nor cancels explicitly: the curves are
//! rebuilt and the driver is sent back the other way from where it is.

use flipcard_animation::{DriverHandle, Easing, SchedulerHandle};

use crate::config::{FlipCallback, FlipCardOptions};
use crate::curves::RotationCurves;
use crate::error::{FlipCardError, Result};
use crate::face::{Face, FlipDirection};

pub struct FlipController {
    face: Face,
    curves: RotationCurves,
    easing: Easing,
    duration_ms: u32,
    /// Present between `mount()` and `unmount()`
    driver: Option<DriverHandle>,
    /// A flip was started and its completion has not been reported yet
    animating: bool,
    on_flip_started: Option<FlipCallback>,
    on_flip_completed: Option<FlipCallback>,
}

impl FlipController {
    pub fn new(
        options: &FlipCardOptions,
        on_flip_started: Option<FlipCallback>,
        on_flip_completed: Option<FlipCallback>,
    ) -> Self {
        Self {
            face: options.initial_face,
            curves: RotationCurves::resting(options.easing),
            easing: options.easing,
            duration_ms: options.duration_ms,
            driver: None,
            animating: false,
            on_flip_started,
            on_flip_completed,
        }
    }

    /// Create the progress driver, resting on the current face
    pub fn mount(&mut self, scheduler: &SchedulerHandle) -> Result<()> {
        if self.driver.is_some() {
            return Err(FlipCardError::AlreadyMounted);
        }

        let driver = scheduler.create_driver(self.duration_ms, self.face.resting_progress())?;
        tracing::debug!(id = ?driver.id(), face = ?self.face, "flip controller mounted");
        self.driver = Some(driver);
        Ok(())
    }

    /// Stop and release the progress driver. Safe to call when unmounted.
    ///
    /// A flip still in flight is dropped without a completion callback.
    pub fn unmount(&mut self) {
        let Some(mut driver) = self.driver.take() else {
            return;
        };

        if let Err(e) = driver.stop() {
            tracing::warn!(error = %e, "could not stop driver on unmount");
        }
        driver.dispose();
        self.animating = false;
        tracing::debug!(face = ?self.face, "flip controller unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.driver.is_some()
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn is_front(&self) -> bool {
        self.face.is_front()
    }

    /// A flip has started and has not yet reported completion
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn curves(&self) -> &RotationCurves {
        &self.curves
    }

    /// Raw driver progress. Falls back to the resting value of the current
    /// face when no driver is reachable.
    pub fn progress(&self) -> f32 {
        self.driver
            .as_ref()
            .and_then(|driver| driver.value().ok())
            .unwrap_or_else(|| self.face.resting_progress())
    }

    pub fn front_angle(&self) -> f32 {
        self.curves.front_angle(self.progress())
    }

    pub fn back_angle(&self) -> f32 {
        self.curves.back_angle(self.progress())
    }

    /// Flip, choosing the direction from which side the gesture started
    pub fn toggle(&mut self, is_right_origin: bool) -> Result<Face> {
        self.flip(FlipDirection::from_origin(is_right_origin))
    }

    pub fn toggle_left(&mut self) -> Result<Face> {
        self.flip(FlipDirection::Left)
    }

    pub fn toggle_right(&mut self) -> Result<Face> {
        self.flip(FlipDirection::Right)
    }

    /// Start a flip toward `direction` and return the new face
    pub fn flip(&mut self, direction: FlipDirection) -> Result<Face> {
        self.report_settled()?;
        let driver = self.driver.as_ref().ok_or(FlipCardError::NotMounted)?;

        // Curves first so the next frame never pairs new progress with old curves
        self.curves = RotationCurves::build(self.face, direction, self.easing);
        match self.face {
            Face::Front => driver.forward()?,
            Face::Back => driver.reverse()?,
        }

        self.face = self.face.flipped();
        self.animating = true;
        tracing::debug!(?direction, face = ?self.face, "flip started");

        self.notify_started();
        Ok(self.face)
    }

    /// Flip instantly: jump the driver to the new face's bound and report
    /// start and completion together
    pub fn toggle_without_animation(&mut self) -> Result<Face> {
        self.report_settled()?;
        let driver = self.driver.as_ref().ok_or(FlipCardError::NotMounted)?;

        let face = self.face.flipped();
        driver.set_value(face.resting_progress())?;
        self.curves = RotationCurves::resting(self.easing);
        self.face = face;
        self.animating = false;
        tracing::debug!(face = ?self.face, "flipped without animation");

        self.notify_started();
        self.notify_completed();
        Ok(self.face)
    }

    /// Observe the driver after a scheduler tick.
    ///
    /// Reports completion once the driver rests on a bound. Returns whether
    /// the card still needs frames.
    pub fn on_frame(&mut self) -> Result<bool> {
        if self.report_settled()? {
            return Ok(false);
        }
        Ok(self.animating && self.driver.is_some())
    }

    /// Fire flip-completed if the running flip has reached its bound.
    /// Returns whether it did.
    fn report_settled(&mut self) -> Result<bool> {
        if !self.animating {
            return Ok(false);
        }
        let Some(driver) = self.driver.as_ref() else {
            return Ok(false);
        };
        if !driver.status()?.is_settled() {
            return Ok(false);
        }

        self.animating = false;
        tracing::debug!(face = ?self.face, "flip completed");
        self.notify_completed();
        Ok(true)
    }

    fn notify_started(&self) {
        if let Some(callback) = &self.on_flip_started {
            callback(self.face.is_front());
        }
    }

    fn notify_completed(&self) {
        if let Some(callback) = &self.on_flip_completed {
            callback(self.face.is_front());
        }
    }
}

impl Drop for FlipController {
    fn drop(&mut self) {
        self.unmount();
    }
}
