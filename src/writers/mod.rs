//! Writer implementations
//!
//! These are the thin output collaborators behind the [`Writer`] capability:
//! they pick a rendering mode, hand the event to a pooled encoder, and move
//! the resulting line to its destination. All delivery is fire-and-forget.

pub mod file;

#[cfg(feature = "console")]
pub mod console;

#[cfg(feature = "socket")]
pub mod socket;

pub use file::FileWriter;

#[cfg(feature = "console")]
pub use console::ConsoleWriter;

#[cfg(feature = "socket")]
pub use socket::SocketWriter;

use crate::core::{Encoder, Event};

/// Timestamp layout used by text-mode lines.
pub(crate) const TEXT_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Rendering mode for a writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// `[timestamp] [LEVL] (source) message key:value ...`
    #[default]
    Text,

    /// One JSON object per line, see [`Encoder::encode_json`].
    Json,
}

impl Format {
    /// Render a complete, newline-terminated output line.
    pub fn render(&self, event: &Event) -> Vec<u8> {
        let mut enc = Encoder::acquire();
        let line = match self {
            Format::Json => enc.encode_json(event).to_vec(),
            Format::Text => {
                let mut line = format!(
                    "[{}] [{}] ({}) ",
                    event.created.format(TEXT_TIMESTAMP),
                    event.severity.code(),
                    event.source
                )
                .into_bytes();
                line.extend_from_slice(enc.encode_text(event));
                line.push(b'\n');
                line
            }
        };
        Encoder::release(enc);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, Severity};

    fn sample_event() -> Event {
        Event {
            severity: Severity::Warning,
            created: chrono::DateTime::UNIX_EPOCH,
            source: "main.rs:3".to_string(),
            message: "low disk".to_string(),
            structured: true,
            fields: vec![Field::uint64("free_mb", 12)],
        }
    }

    #[test]
    fn test_text_render() {
        let line = String::from_utf8(Format::Text.render(&sample_event())).unwrap();
        assert_eq!(
            line,
            "[1970-01-01 00:00:00] [WARN] (main.rs:3) low disk free_mb:12\n"
        );
    }

    #[test]
    fn test_json_render_is_one_line() {
        let line = String::from_utf8(Format::Json.render(&sample_event())).unwrap();
        assert!(line.ends_with("}\n"));
        assert_eq!(line.matches('\n').count(), 1);

        let parsed: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(parsed["level"], "WARN");
        assert_eq!(parsed["free_mb"], 12);
    }
}
