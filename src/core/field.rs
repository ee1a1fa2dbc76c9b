//! Typed key/value fields attached to structured events

use super::encoder::Encoder;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Fixed key used by [`Field::from_error`].
pub const ERROR_FIELD_KEY: &str = "error";

/// The closed set of value kinds a field can carry.
///
/// `Unknown` is a sentinel that encoders skip silently; `Other` is the
/// arbitrary fallback, rendered to text at construction so that encoding a
/// field never allocates beyond encoder buffer growth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Unknown,
    Bool(bool),
    Int8(i8),
    Uint8(u8),
    Int32(i32),
    Uint32(u32),
    Int64(i64),
    Uint64(u64),
    Int(isize),
    Uint(usize),
    Float32(f32),
    Float64(f64),
    Str(String),
    Other(String),
}

/// One typed, named value attached to a log event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
}

impl Field {
    fn new(key: impl Into<String>, value: FieldValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn bool(key: impl Into<String>, value: bool) -> Self {
        Self::new(key, FieldValue::Bool(value))
    }

    pub fn int8(key: impl Into<String>, value: i8) -> Self {
        Self::new(key, FieldValue::Int8(value))
    }

    pub fn uint8(key: impl Into<String>, value: u8) -> Self {
        Self::new(key, FieldValue::Uint8(value))
    }

    pub fn int32(key: impl Into<String>, value: i32) -> Self {
        Self::new(key, FieldValue::Int32(value))
    }

    pub fn uint32(key: impl Into<String>, value: u32) -> Self {
        Self::new(key, FieldValue::Uint32(value))
    }

    pub fn int64(key: impl Into<String>, value: i64) -> Self {
        Self::new(key, FieldValue::Int64(value))
    }

    pub fn uint64(key: impl Into<String>, value: u64) -> Self {
        Self::new(key, FieldValue::Uint64(value))
    }

    pub fn int(key: impl Into<String>, value: isize) -> Self {
        Self::new(key, FieldValue::Int(value))
    }

    pub fn uint(key: impl Into<String>, value: usize) -> Self {
        Self::new(key, FieldValue::Uint(value))
    }

    pub fn float32(key: impl Into<String>, value: f32) -> Self {
        Self::new(key, FieldValue::Float32(value))
    }

    pub fn float64(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, FieldValue::Float64(value))
    }

    pub fn str(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, FieldValue::Str(value.into()))
    }

    /// A sentinel field that every encoder omits.
    pub fn unknown(key: impl Into<String>) -> Self {
        Self::new(key, FieldValue::Unknown)
    }

    /// Text field under the fixed key `"error"`; `"nil"` when absent.
    pub fn from_error(err: Option<&dyn Error>) -> Self {
        let value = match err {
            Some(e) => e.to_string(),
            None => "nil".to_string(),
        };
        Self::new(ERROR_FIELD_KEY, FieldValue::Str(value))
    }

    /// Classify a value into the narrowest matching kind via its `From`
    /// conversion. Integer-like inputs collapse to the generic 64-bit kinds;
    /// use the width-specific constructors to preserve a narrower kind, and
    /// [`Field::other`] for values outside the closed set.
    pub fn any(key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::new(key, value.into())
    }

    /// Arbitrary-fallback field, rendered once at construction.
    pub fn other(key: impl Into<String>, value: impl fmt::Display) -> Self {
        Self::new(key, FieldValue::Other(value.to_string()))
    }

    /// Render this field into the encoder, dispatching on the value kind.
    /// `Unknown` fields are skipped silently.
    pub fn add_to(&self, enc: &mut Encoder) {
        match &self.value {
            FieldValue::Unknown => {}
            FieldValue::Bool(v) => enc.add_bool(&self.key, *v),
            FieldValue::Int8(v) => enc.add_i64(&self.key, i64::from(*v)),
            FieldValue::Uint8(v) => enc.add_u64(&self.key, u64::from(*v)),
            FieldValue::Int32(v) => enc.add_i64(&self.key, i64::from(*v)),
            FieldValue::Uint32(v) => enc.add_u64(&self.key, u64::from(*v)),
            FieldValue::Int64(v) => enc.add_i64(&self.key, *v),
            FieldValue::Uint64(v) => enc.add_u64(&self.key, *v),
            FieldValue::Int(v) => enc.add_i64(&self.key, *v as i64),
            FieldValue::Uint(v) => enc.add_u64(&self.key, *v as u64),
            FieldValue::Float32(v) => enc.add_f32(&self.key, *v),
            FieldValue::Float64(v) => enc.add_f64(&self.key, *v),
            FieldValue::Str(v) => enc.add_str(&self.key, v),
            FieldValue::Other(v) => enc.add_str(&self.key, v),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i8> for FieldValue {
    fn from(v: i8) -> Self {
        FieldValue::Int64(i64::from(v))
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int64(i64::from(v))
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int64(v)
    }
}

impl From<isize> for FieldValue {
    fn from(v: isize) -> Self {
        FieldValue::Int64(v as i64)
    }
}

impl From<u8> for FieldValue {
    fn from(v: u8) -> Self {
        FieldValue::Uint64(u64::from(v))
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Uint64(u64::from(v))
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::Uint64(v)
    }
}

impl From<usize> for FieldValue {
    fn from(v: usize) -> Self {
        FieldValue::Uint64(v as u64)
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::Float32(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float64(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Str(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Str(v)
    }
}
