//! Event rendering
//!
//! One encoder owns a growable byte buffer and renders an [`Event`] as
//! either a single-line JSON object or a formatted text line. Encoders are
//! recycled through a pool; an acquired instance is single-owner until
//! released, which is the concurrency boundary.

use super::event::Event;
use super::field::FieldValue;
use super::pool::{Pool, Reusable};
use chrono::Timelike;
use std::fmt;
use std::io::Write;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

static ENCODER_POOL: Pool<Encoder> = Pool::new();

/// Reusable byte-buffer-backed renderer for log events.
pub struct Encoder {
    buf: Vec<u8>,
    started: bool,
}

impl Default for Encoder {
    fn default() -> Self {
        Self {
            buf: Vec::with_capacity(100),
            started: false,
        }
    }
}

impl Reusable for Encoder {
    fn reset(&mut self) {
        self.buf.clear();
        self.started = false;
    }
}

impl Encoder {
    /// Take an encoder from the shared pool.
    pub fn acquire() -> Encoder {
        ENCODER_POOL.acquire()
    }

    /// Return an encoder to the shared pool.
    pub fn release(enc: Encoder) {
        ENCODER_POOL.release(enc);
    }

    /// Render the event as one JSON object terminated by a newline.
    ///
    /// Leading keys are always `time`, `message`, `level`, `file`, followed
    /// by the event's fields in sequence order; fields with the unknown
    /// sentinel are omitted. All text passes through the byte-wise escaper.
    pub fn encode_json(&mut self, event: &Event) -> &[u8] {
        self.reset();
        self.buf.push(b'{');
        self.raw(b"\"time\":\"");
        let _ = write!(
            self.buf,
            "{}.{:05}",
            event.created.format("%Y-%m-%d %H:%M:%S"),
            event.created.nanosecond() / 10_000
        );
        self.raw(b"\",\"message\":\"");
        self.escape(event.message.as_bytes());
        self.raw(b"\",\"level\":\"");
        self.raw(event.severity.code().as_bytes());
        self.raw(b"\",\"file\":\"");
        self.escape(event.source.as_bytes());
        self.buf.push(b'"');
        // The fixed keys are already in place, so every field needs a
        // leading comma.
        self.started = true;
        for field in &event.fields {
            field.add_to(self);
        }
        self.buf.push(b'}');
        self.buf.push(b'\n');
        &self.buf
    }

    /// Render the event as a formatted text line (no trailing newline).
    ///
    /// With no fields the line is the message verbatim; otherwise each field
    /// follows as ` key:value` with a type-appropriate value rendering.
    pub fn encode_text(&mut self, event: &Event) -> &[u8] {
        self.reset();
        self.buf.extend_from_slice(event.message.as_bytes());
        for field in &event.fields {
            if field.value == FieldValue::Unknown {
                continue;
            }
            self.buf.push(b' ');
            self.buf.extend_from_slice(field.key.as_bytes());
            self.buf.push(b':');
            match &field.value {
                FieldValue::Unknown => {}
                FieldValue::Bool(v) => self.push_display(v),
                FieldValue::Int8(v) => self.push_display(v),
                FieldValue::Uint8(v) => self.push_display(v),
                FieldValue::Int32(v) => self.push_display(v),
                FieldValue::Uint32(v) => self.push_display(v),
                FieldValue::Int64(v) => self.push_display(v),
                FieldValue::Uint64(v) => self.push_display(v),
                FieldValue::Int(v) => self.push_display(v),
                FieldValue::Uint(v) => self.push_display(v),
                FieldValue::Float32(v) => self.push_display(v),
                FieldValue::Float64(v) => self.push_display(v),
                FieldValue::Str(v) => self.buf.extend_from_slice(v.as_bytes()),
                FieldValue::Other(v) => self.buf.extend_from_slice(v.as_bytes()),
            }
        }
        &self.buf
    }

    pub fn add_bool(&mut self, key: &str, value: bool) {
        self.begin_key(key);
        self.push_display(value);
    }

    pub fn add_i64(&mut self, key: &str, value: i64) {
        self.begin_key(key);
        self.push_display(value);
    }

    pub fn add_u64(&mut self, key: &str, value: u64) {
        self.begin_key(key);
        self.push_display(value);
    }

    pub fn add_f32(&mut self, key: &str, value: f32) {
        self.begin_key(key);
        self.push_display(value);
    }

    pub fn add_f64(&mut self, key: &str, value: f64) {
        self.begin_key(key);
        self.push_display(value);
    }

    pub fn add_str(&mut self, key: &str, value: &str) {
        self.begin_key(key);
        self.buf.push(b'"');
        self.escape(value.as_bytes());
        self.buf.push(b'"');
    }

    fn begin_key(&mut self, key: &str) {
        if self.started {
            self.raw(b",\"");
        } else {
            self.buf.push(b'"');
            self.started = true;
        }
        self.escape(key.as_bytes());
        self.raw(b"\": ");
    }

    fn raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    fn push_display(&mut self, value: impl fmt::Display) {
        // Writing into a Vec cannot fail.
        let _ = write!(self.buf, "{}", value);
    }

    /// Byte-wise JSON string escaping with a UTF-8-aware fallback.
    ///
    /// Printable ASCII except backslash and quote passes through; backslash,
    /// quote, newline, carriage return and tab get two-character escapes;
    /// remaining control bytes get `\u00XX`. Valid multi-byte sequences are
    /// copied verbatim, each invalid byte becomes the replacement-character
    /// escape.
    fn escape(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b < 0x80 {
                match b {
                    b'\\' | b'"' => {
                        self.buf.push(b'\\');
                        self.buf.push(b);
                    }
                    b'\n' => self.raw(b"\\n"),
                    b'\r' => self.raw(b"\\r"),
                    b'\t' => self.raw(b"\\t"),
                    0x20.. => self.buf.push(b),
                    _ => {
                        self.raw(b"\\u00");
                        self.buf.push(HEX[(b >> 4) as usize]);
                        self.buf.push(HEX[(b & 0xF) as usize]);
                    }
                }
                i += 1;
                continue;
            }
            let width = utf8_width(b);
            match bytes
                .get(i..i + width)
                .filter(|seq| std::str::from_utf8(seq).is_ok())
            {
                Some(seq) => {
                    self.buf.extend_from_slice(seq);
                    i += width;
                }
                None => {
                    self.raw(b"\\ufffd");
                    i += 1;
                }
            }
        }
    }
}

/// Expected sequence length from a UTF-8 lead byte.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
