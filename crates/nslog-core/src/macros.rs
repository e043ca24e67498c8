//! Formatting macros for logger calls.
//!
//! Each macro takes a logger expression followed by `format!`-style
//! arguments, e.g. `nslog_core::info!(logger, "loaded {} items", n)`.

/// Log at a level given by name; unknown names are filtered out.
///
/// With only a logger and message the call is level-less.
#[macro_export]
macro_rules! log {
    ($logger:expr, level: $level:expr, $($arg:tt)+) => {
        $logger.log_at(::core::option::Option::Some($level), ::core::format_args!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(::core::format_args!($($arg)+))
    };
}

/// Log at `debug`.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::core::format_args!($($arg)+))
    };
}

/// Log at `info`.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::core::format_args!($($arg)+))
    };
}

/// Log at `warning`.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(::core::format_args!($($arg)+))
    };
}

/// Log at `error`.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::core::format_args!($($arg)+))
    };
}

/// Log at `fatal`.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::core::format_args!($($arg)+))
    };
}
