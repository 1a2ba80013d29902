/// Receives the reports of an `ElapsedTimer`: a message and the elapsed
/// seconds it covers. The timer owns its logger and never shares it.
pub trait Logger {
    fn log(&mut self, message: &str, seconds: f64);
}

// Any closure of the right shape works as a logger. The tests use this to
// capture reports.
impl<F: FnMut(&str, f64)> Logger for F {
    fn log(&mut self, message: &str, seconds: f64) {
        self(message, seconds);
    }
}

/// How `InfoLogger` renders the elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// The raw floating point value: "cloned 3 repos in 0.0725 seconds".
    Seconds,
    /// An automatically chosen unit: "cloned 3 repos in 72.5ms".
    Pretty,
}

/// The logger a timer uses when the caller does not supply one. Emits at
/// info level through the `log` facade and stays silent when the message is
/// empty, so a timer built only to read elapsed values produces no output.
#[derive(Debug, Clone)]
pub struct InfoLogger {
    style: Style,
}

impl InfoLogger {
    pub const fn new(style: Style) -> Self {
        Self { style }
    }

    fn line(&self, message: &str, seconds: f64) -> Option<String> {
        if message.is_empty() {
            return None;
        }
        match self.style {
            Style::Seconds => Some(format!("{message} in {seconds} seconds")),
            Style::Pretty => Some(format!("{message} in {}", pretty_seconds(seconds))),
        }
    }
}

impl Default for InfoLogger {
    fn default() -> Self {
        Self::new(Style::Pretty)
    }
}

impl Logger for InfoLogger {
    fn log(&mut self, message: &str, seconds: f64) {
        if let Some(line) = self.line(message, seconds) {
            log::info!("{line}");
        }
    }
}

/// Render a number of seconds with an automatically chosen unit:
/// whole seconds with two decimals, then ms, µs and ns bands with one
/// decimal below 100 and none at or above it.
pub fn pretty_seconds(seconds: f64) -> String {
    if seconds >= 1.0 {
        format!("{seconds:.2}s")
    } else if seconds >= 0.001 {
        scaled(seconds * 1000.0, "ms")
    } else if seconds >= 0.000_001 {
        scaled(seconds * 1_000_000.0, "µs")
    } else {
        format!("{:.0}ns", seconds * 1_000_000_000.0)
    }
}

fn scaled(value: f64, unit: &str) -> String {
    if value >= 100.0 {
        format!("{value:.0}{unit}")
    } else {
        format!("{value:.1}{unit}")
    }
}
