//! Logging macros for format-style dispatch.
//!
//! Each macro forwards to [`Logger::logf`](crate::Logger::logf) with a
//! `format_args!` capture, so the arguments are only rendered when some
//! binding admits the severity.
//!
//! # Examples
//!
//! ```
//! use fanlog::prelude::*;
//!
//! let logger = Logger::new();
//!
//! let port = 8080;
//! fanlog::infof!(logger, "listening on port {}", port);
//! fanlog::errorf!(logger, "disk {}", "full");
//! ```

/// Log a formatted message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = Logger::new();
/// use fanlog::logf;
/// logf!(logger, Severity::Info, "simple message");
/// logf!(logger, Severity::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.logf($severity, format_args!($($arg)+))
    };
}

/// Log a formatted message at the finest severity.
#[macro_export]
macro_rules! finestf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Finest, $($arg)+)
    };
}

/// Log a formatted message at the fine severity.
#[macro_export]
macro_rules! finef {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Fine, $($arg)+)
    };
}

/// Log a formatted message at the debug severity.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log a formatted message at the trace severity.
#[macro_export]
macro_rules! tracef {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Trace, $($arg)+)
    };
}

/// Log a formatted message at the info severity.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a formatted message at the warning severity.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log a formatted message at the error severity.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a formatted message at the critical severity.
#[macro_export]
macro_rules! criticalf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Critical, $($arg)+)
    };
}
