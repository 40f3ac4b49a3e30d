//! Progress driver
//!
//! A time-driven scalar in `[0, 1]`. `forward()` runs it toward 1 and
//! `reverse()` toward 0 at a constant rate of `1 / duration` per
//! millisecond, starting from wherever it currently is. Redirecting a running
//! driver therefore never restarts it, and a reversal takes exactly as long as
//! the distance already travelled.

/// Distance from a bound at which a running driver snaps onto it
const SETTLE_EPSILON: f32 = 1e-4;

/// Where the driver is and where it is heading
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DriverStatus {
    /// Resting at 0
    #[default]
    Dismissed,
    /// Running toward 1
    Forward,
    /// Running toward 0
    Reverse,
    /// Resting at 1
    Completed,
}

impl DriverStatus {
    /// Resting on a bound
    pub fn is_settled(&self) -> bool {
        matches!(self, DriverStatus::Dismissed | DriverStatus::Completed)
    }

    fn resting_at(value: f32) -> Self {
        if value >= 1.0 {
            DriverStatus::Completed
        } else {
            DriverStatus::Dismissed
        }
    }
}

/// A single animation progress value
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressDriver {
    value: f32,
    duration_ms: u32,
    status: DriverStatus,
    /// False after `stop()` until the next `forward()`/`reverse()`
    running: bool,
}

impl ProgressDriver {
    /// Create a driver resting at `initial` (clamped to `[0, 1]`)
    pub fn new(duration_ms: u32, initial: f32) -> Self {
        let value = initial.clamp(0.0, 1.0);
        Self {
            value,
            duration_ms,
            status: DriverStatus::resting_at(value),
            running: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn status(&self) -> DriverStatus {
        self.status
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Whether the driver will move on the next tick
    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Run toward 1
    pub fn forward(&mut self) {
        self.run(DriverStatus::Forward);
    }

    /// Run toward 0
    pub fn reverse(&mut self) {
        self.run(DriverStatus::Reverse);
    }

    fn run(&mut self, direction: DriverStatus) {
        let target = if direction == DriverStatus::Forward {
            1.0
        } else {
            0.0
        };

        if self.duration_ms == 0 || self.value == target {
            self.value = target;
            self.status = DriverStatus::resting_at(target);
            self.running = false;
            return;
        }

        self.status = direction;
        self.running = true;
    }

    /// Freeze at the current value. Status keeps its last direction.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Jump to `value` and rest there
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
        self.status = if self.value >= 1.0 {
            DriverStatus::Completed
        } else if self.value <= 0.0 {
            DriverStatus::Dismissed
        } else {
            self.status
        };
        self.running = false;
    }

    /// Advance by `dt_ms`. Returns true if the driver settled on a bound
    /// during this tick.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.running {
            return false;
        }

        let step = dt_ms.max(0.0) / self.duration_ms as f32;
        match self.status {
            DriverStatus::Forward => {
                self.value += step;
                if self.value >= 1.0 - SETTLE_EPSILON {
                    self.value = 1.0;
                    self.status = DriverStatus::Completed;
                    self.running = false;
                    return true;
                }
            }
            DriverStatus::Reverse => {
                self.value -= step;
                if self.value <= SETTLE_EPSILON {
                    self.value = 0.0;
                    self.status = DriverStatus::Dismissed;
                    self.running = false;
                    return true;
                }
            }
            DriverStatus::Dismissed | DriverStatus::Completed => {
                self.running = false;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rests_on_bound() {
        let d = ProgressDriver::new(500, 0.0);
        assert_eq!(d.status(), DriverStatus::Dismissed);
        assert!(!d.is_animating());

        let d = ProgressDriver::new(500, 1.0);
        assert_eq!(d.status(), DriverStatus::Completed);
        assert_eq!(d.value(), 1.0);
    }

    #[test]
    fn test_forward_runs_to_completion() {
        let mut d = ProgressDriver::new(100, 0.0);
        d.forward();
        assert_eq!(d.status(), DriverStatus::Forward);

        assert!(!d.tick(50.0));
        assert!((d.value() - 0.5).abs() < 1e-6);

        assert!(d.tick(60.0));
        assert_eq!(d.value(), 1.0);
        assert_eq!(d.status(), DriverStatus::Completed);
        assert!(!d.is_animating());

        // Settled drivers ignore further ticks
        assert!(!d.tick(16.0));
    }

    #[test]
    fn test_reverse_midway_keeps_value() {
        let mut d = ProgressDriver::new(100, 0.0);
        d.forward();
        d.tick(30.0);
        d.reverse();
        assert_eq!(d.status(), DriverStatus::Reverse);
        assert!((d.value() - 0.3).abs() < 1e-6);

        assert!(!d.tick(20.0));
        assert!(d.tick(10.0));
        assert_eq!(d.value(), 0.0);
        assert_eq!(d.status(), DriverStatus::Dismissed);
    }

    #[test]
    fn test_zero_duration_settles_immediately() {
        let mut d = ProgressDriver::new(0, 0.0);
        d.forward();
        assert_eq!(d.value(), 1.0);
        assert_eq!(d.status(), DriverStatus::Completed);
        assert!(!d.is_animating());
    }

    #[test]
    fn test_forward_at_upper_bound_is_noop() {
        let mut d = ProgressDriver::new(100, 1.0);
        d.forward();
        assert!(d.status().is_settled());
        assert!(!d.is_animating());
    }

    #[test]
    fn test_stop_freezes() {
        let mut d = ProgressDriver::new(100, 0.0);
        d.forward();
        d.tick(40.0);
        d.stop();
        assert!(!d.tick(40.0));
        assert!((d.value() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_set_value_jumps() {
        let mut d = ProgressDriver::new(100, 0.0);
        d.forward();
        d.set_value(1.0);
        assert_eq!(d.status(), DriverStatus::Completed);
        assert!(!d.is_animating());

        d.set_value(-3.0);
        assert_eq!(d.value(), 0.0);
        assert_eq!(d.status(), DriverStatus::Dismissed);
    }
}
