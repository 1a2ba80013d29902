/// Report through a timer with the message concatenated from the given
/// parts, e.g. `report!(timer, "read ", count, " crates")`. Expands to a
/// single `report_parts` call; the parts are rendered after the interval
/// has been captured.
#[macro_export]
macro_rules! report {
    ($timer:expr, $($part:expr),+ $(,)?) => {
        $timer.report_parts(&[$(&$part as &dyn ::std::fmt::Display),+])
    };
}

/// Report through a timer with the message built from a format template,
/// e.g. `report_fmt!(timer, "cloned {} repos", count)`. Expands to a single
/// `report_fmt` call with the same timing behavior as `report!`.
#[macro_export]
macro_rules! report_fmt {
    ($timer:expr, $($arg:tt)+) => {
        $timer.report_fmt(::std::format_args!($($arg)+))
    };
}
