use std::fmt;
use std::mem;

use crate::clock::{Clock, MonotonicClock};
use crate::logger::{InfoLogger, Logger};

/// Times a block of code. Every `report` call logs the time since the last
/// checkpoint and starts a new interval; when the timer goes out of scope
/// it reports once more, with the message given at construction. The final
/// report runs on every exit path, including panics, and a timer returned
/// from a function carries that responsibility with it.
///
/// The timer is deliberately not cloneable: two owners of the same
/// destruction message would report it twice.
pub struct ElapsedTimer<L = InfoLogger, C = MonotonicClock>
where
    L: Logger,
    C: Clock,
{
    message: String,
    min_seconds: f64,
    logger: L,
    clock: C,
    checkpoint: C::Instant,
}

impl ElapsedTimer {
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_threshold(message, 0.0)
    }

    /// Intervals shorter than `min_seconds` are still measured and
    /// returned, but not logged.
    pub fn with_threshold(message: impl Into<String>, min_seconds: f64) -> Self {
        Self::with_logger(message, min_seconds, InfoLogger::default())
    }
}

impl Default for ElapsedTimer {
    /// A timer with no destruction message, for reading elapsed values
    /// without any logging side effect.
    fn default() -> Self {
        Self::new("")
    }
}

impl<L: Logger> ElapsedTimer<L> {
    pub fn with_logger(message: impl Into<String>, min_seconds: f64, logger: L) -> Self {
        Self::with_clock(message, min_seconds, logger, MonotonicClock)
    }
}

impl<L: Logger, C: Clock> ElapsedTimer<L, C> {
    pub fn with_clock(message: impl Into<String>, min_seconds: f64, logger: L, clock: C) -> Self {
        let checkpoint = clock.now();
        Self {
            message: message.into(),
            min_seconds,
            logger,
            clock,
            checkpoint,
        }
    }

    /// Report the time since the last checkpoint and start a new interval.
    /// Returns the elapsed seconds whether or not they were logged.
    pub fn report(&mut self, message: &str) -> f64 {
        let now = self.clock.now();
        self.report_at(now, message)
    }

    /// Like `report` with the message concatenated from `parts`. Usually
    /// called through the `report!` macro.
    pub fn report_parts(&mut self, parts: &[&dyn fmt::Display]) -> f64 {
        let now = self.clock.now();
        let message = parts.iter().map(ToString::to_string).collect::<String>();
        self.report_at(now, &message)
    }

    /// Like `report` with the message built from a format template. Usually
    /// called through the `report_fmt!` macro.
    pub fn report_fmt(&mut self, args: fmt::Arguments<'_>) -> f64 {
        let now = self.clock.now();
        self.report_at(now, &args.to_string())
    }

    // Takes `now` as captured by the caller so that building the message
    // string is not counted in the closed interval.
    fn report_at(&mut self, now: C::Instant, message: &str) -> f64 {
        let elapsed = (now - self.checkpoint).as_secs_f64();
        if elapsed >= self.min_seconds {
            self.logger.log(message, elapsed);
        }
        self.checkpoint = self.clock.now(); // don't measure the logging time
        elapsed
    }
}

impl<L: Logger, C: Clock> Drop for ElapsedTimer<L, C> {
    fn drop(&mut self) {
        let message = mem::take(&mut self.message);
        self.report(&message);
    }
}
