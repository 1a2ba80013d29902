use std::cell::Cell;
use std::ops::Sub;
use std::rc::Rc;
use std::time::Duration;

/// A source of monotonic timestamps for an `ElapsedTimer`.
///
/// Implementations define their own instant representation; the only
/// requirement is that subtracting an earlier instant from a later one
/// yields the `Duration` between them.
pub trait Clock {
    type Instant: Copy + Sub<Self::Instant, Output = Duration>;

    fn now(&self) -> Self::Instant;
}

/// The default clock, backed by `std::time::Instant`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    type Instant = std::time::Instant;

    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }
}

/// A clock that only moves when told to. Cloned handles share the same
/// notion of now, so a test can give one handle to a timer and keep the
/// other to advance the time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    // Time since the clock was created.
    type Instant = Duration;

    fn now(&self) -> Self::Instant {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_clock() {
        let clock = MonotonicClock;
        let earlier = clock.now();
        let later = clock.now();
        assert!(later - earlier >= Duration::ZERO);
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        assert_eq!(clock.now(), Duration::ZERO);

        handle.advance(Duration::from_millis(250));
        assert_eq!(clock.now(), Duration::from_millis(250));

        handle.advance(Duration::from_secs(2));
        assert_eq!(clock.now() - Duration::from_millis(250), Duration::from_secs(2));
    }
}
