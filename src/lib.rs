//! # Fanlog
//!
//! A level-filtered, fan-out logging core. Application code logs against a
//! set of independently thresholded output bindings; events below every
//! threshold are skipped before any formatting or allocation happens, and
//! admitted events are rendered once and fanned out to every writer whose
//! threshold they clear.
//!
//! ## Features
//!
//! - **Cheap skip path**: no formatting, no closure invocation, no event
//!   allocation when nothing would be written
//! - **Structured fields**: typed key/value pairs rendered as a single-line
//!   JSON object or appended to a text line
//! - **Pooled events and encoders**: the hot path recycles its records and
//!   buffers instead of allocating per call
//! - **Thin writers**: console, file and socket backends behind one narrow
//!   `Writer` capability
//!
//! ## Example
//!
//! ```
//! use fanlog::prelude::*;
//!
//! let logger = Logger::new();
//! logger.add_binding("stdout", Severity::Debug, ConsoleWriter::new());
//!
//! fanlog::infof!(logger, "listening on port {}", 8080);
//! logger.info("request done", vec![
//!     Field::str("method", "GET"),
//!     Field::uint32("status", 200),
//! ]);
//!
//! logger.close();
//! ```

pub mod core;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        Binding, Encoder, Event, Field, FieldValue, LogError, Logger, Pool, Result, Reusable,
        Severity, Writer, ERROR_FIELD_KEY,
    };
    pub use crate::writers::{FileWriter, Format};

    #[cfg(feature = "console")]
    pub use crate::writers::ConsoleWriter;

    #[cfg(feature = "socket")]
    pub use crate::writers::SocketWriter;
}

pub use crate::core::{
    Binding, Encoder, Event, Field, FieldValue, LogError, Logger, Pool, Result, Reusable,
    Severity, Writer, ERROR_FIELD_KEY,
};
pub use crate::writers::{FileWriter, Format};

#[cfg(feature = "console")]
pub use crate::writers::ConsoleWriter;

#[cfg(feature = "socket")]
pub use crate::writers::SocketWriter;
