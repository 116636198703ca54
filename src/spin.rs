//! Globe spin driven by elapsed time
//!
//! The geometry never owns the spin angle. An animation driver computes it
//! from the clock with [`Spin`] and publishes it through a [`SpinAngle`];
//! picks take a snapshot of the current value when they are resolved.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Time for one full revolution of the globe
pub const DEFAULT_SPIN_PERIOD: Duration = Duration::from_secs(15);

/// Constant-speed rotation around the vertical axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    period: Duration,
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(DEFAULT_SPIN_PERIOD)
    }
}

impl Spin {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Spin angle in degrees, in `[0, 360)`, after `elapsed` time
    ///
    /// A zero period stands still.
    pub fn angle_at(&self, elapsed: Duration) -> f64 {
        let period = self.period.as_secs_f64();
        if period == 0.0 {
            return 0.0;
        }

        (elapsed.as_secs_f64() * (360.0 / period)) % 360.0
    }
}

/// Latest spin angle, shared between the animation driver and picks
///
/// Stores the `f64` bits in an atomic, so a reader always sees one whole
/// value without taking a lock.
#[derive(Debug, Default)]
pub struct SpinAngle(AtomicU64);

impl SpinAngle {
    pub fn new(angle_deg: f64) -> Self {
        Self(AtomicU64::new(angle_deg.to_bits()))
    }

    /// Publish a new angle
    pub fn store(&self, angle_deg: f64) {
        self.0.store(angle_deg.to_bits(), Ordering::Relaxed);
    }

    /// Snapshot of the current angle
    pub fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::sync::Arc;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Spin::default().angle_at(Duration::ZERO), 0.0);
    }

    #[test]
    fn half_period_is_half_a_turn() {
        let spin = Spin::default();
        assert_abs_diff_eq!(spin.angle_at(Duration::from_millis(7500)), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn wraps_after_full_period() {
        let spin = Spin::default();
        assert_abs_diff_eq!(spin.angle_at(Duration::from_secs(15)), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(spin.angle_at(Duration::from_secs(20)), 120.0, epsilon = 1e-9);
    }

    #[test]
    fn angle_stays_in_range() {
        let spin = Spin::new(Duration::from_millis(1234));
        for millis in (0..100_000).step_by(977) {
            let angle = spin.angle_at(Duration::from_millis(millis));
            assert!((0.0..360.0).contains(&angle), "{angle} out of range");
        }
    }

    #[test]
    fn zero_period_stands_still() {
        let spin = Spin::new(Duration::ZERO);
        assert_eq!(spin.angle_at(Duration::from_secs(3)), 0.0);
    }

    #[test]
    fn spin_angle_default_is_zero() {
        assert_eq!(SpinAngle::default().load(), 0.0);
    }

    #[test]
    fn spin_angle_store_and_load() {
        let angle = SpinAngle::new(12.5);
        assert_eq!(angle.load(), 12.5);

        angle.store(359.999);
        assert_eq!(angle.load(), 359.999);
    }

    #[test]
    fn spin_angle_across_threads() {
        let angle = Arc::new(SpinAngle::default());

        let driver = {
            let angle = Arc::clone(&angle);
            std::thread::spawn(move || {
                let spin = Spin::default();
                for millis in (0..15_000).step_by(16) {
                    angle.store(spin.angle_at(Duration::from_millis(millis)));
                }
            })
        };

        for _ in 0..1000 {
            let snapshot = angle.load();
            assert!((0.0..360.0).contains(&snapshot));
        }

        driver.join().expect("Driver thread panicked");
    }
}
