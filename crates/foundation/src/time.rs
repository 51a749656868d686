use std::cell::Cell;

/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Time(pub f64); // seconds

impl Time {
    pub fn seconds_since(self, earlier: Time) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}

/// Source of wall-clock time. Injected so expiry logic is testable.
pub trait Clock {
    fn now(&self) -> Time;
}

#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Time {
        Time(now_seconds())
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_s: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_s: f64) -> Self {
        Self {
            now_s: Cell::new(start_s),
        }
    }

    pub fn advance(&self, seconds: f64) {
        self.now_s.set(self.now_s.get() + seconds.max(0.0));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Time {
        Time(self.now_s.get())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Time {
        (**self).now()
    }
}

/// Get current time in seconds.
fn now_seconds() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() / 1000.0
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, ManualClock, SystemClock, Time};

    #[test]
    fn manual_clock_only_moves_forward() {
        let clock = ManualClock::new(10.0);
        clock.advance(5.0);
        clock.advance(-3.0);
        assert_eq!(clock.now(), Time(15.0));
    }

    #[test]
    fn seconds_since_saturates_at_zero() {
        assert_eq!(Time(4.0).seconds_since(Time(1.5)), 2.5);
        assert_eq!(Time(1.0).seconds_since(Time(2.0)), 0.0);
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now().0 > 1_577_836_800.0);
    }
}
