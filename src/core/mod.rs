//! Core logger types and traits

pub mod encoder;
pub mod error;
pub mod event;
pub mod field;
pub mod logger;
pub mod pool;
pub mod severity;

pub use encoder::Encoder;
pub use error::{LogError, Result};
pub use event::Event;
pub use field::{Field, FieldValue, ERROR_FIELD_KEY};
pub use logger::{Binding, Logger, Writer};
pub use pool::{Pool, Reusable};
pub use severity::Severity;
