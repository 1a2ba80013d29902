//! Scope based elapsed time reporting: an `ElapsedTimer` measures the wall
//! clock time of the scope it lives in, reports intermediate checkpoints on
//! demand and logs a final report when it is dropped. The clock and the
//! logging sink are both pluggable.

pub mod clock;
pub mod logger;
mod macros;
pub mod timer;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use logger::{pretty_seconds, InfoLogger, Logger, Style};
pub use timer::ElapsedTimer;
