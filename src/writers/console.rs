//! Console writer
//!
//! A channel sits behind the writer: `write` renders the line on the
//! caller's thread (so the pooled event is never retained) and sends it to a
//! background thread that owns the actual terminal output. `Error` and
//! `Critical` lines go to stderr, everything else to stdout.

use super::{Format, TEXT_TIMESTAMP};
use crate::core::{Encoder, Event, Severity, Writer};
use colored::{Color, Colorize};
use crossbeam_channel::{unbounded, Sender};
use parking_lot::Mutex;
use std::io::Write as _;
use std::thread::{self, JoinHandle};

pub struct ConsoleWriter {
    sender: Mutex<Option<Sender<(Severity, Vec<u8>)>>>,
    handle: Mutex<Option<JoinHandle<()>>>,
    format: Format,
    colors: bool,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self::with_format(Format::Text)
    }

    pub fn with_format(format: Format) -> Self {
        let (sender, receiver) = unbounded::<(Severity, Vec<u8>)>();

        let handle = thread::spawn(move || {
            for (severity, line) in receiver {
                match severity {
                    Severity::Error | Severity::Critical => {
                        let _ = std::io::stderr().write_all(&line);
                    }
                    _ => {
                        let _ = std::io::stdout().write_all(&line);
                    }
                }
            }
            let _ = std::io::stdout().flush();
            let _ = std::io::stderr().flush();
        });

        Self {
            sender: Mutex::new(Some(sender)),
            handle: Mutex::new(Some(handle)),
            format,
            colors: true,
        }
    }

    /// Enable or disable colored level codes (text mode only).
    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    fn render(&self, event: &Event) -> Vec<u8> {
        if self.format == Format::Json || !self.colors {
            return self.format.render(event);
        }

        let code = event
            .severity
            .code()
            .color(color_of(event.severity))
            .to_string();
        let mut line = format!(
            "[{}] [{}] ({}) ",
            event.created.format(TEXT_TIMESTAMP),
            code,
            event.source
        )
        .into_bytes();

        let mut enc = Encoder::acquire();
        line.extend_from_slice(enc.encode_text(event));
        Encoder::release(enc);

        line.push(b'\n');
        line
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for ConsoleWriter {
    fn write(&self, event: &Event) {
        let line = self.render(event);
        if let Some(sender) = self.sender.lock().as_ref() {
            let _ = sender.send((event.severity, line));
        }
    }

    fn close(&self) {
        // Dropping the sender disconnects the channel; the background
        // thread drains what is queued and exits.
        drop(self.sender.lock().take());
        if let Some(handle) = self.handle.lock().take() {
            let _ = handle.join();
        }
    }
}

fn color_of(severity: Severity) -> Color {
    match severity {
        Severity::Finest | Severity::Fine => Color::BrightBlack,
        Severity::Debug => Color::Blue,
        Severity::Trace => Color::Cyan,
        Severity::Info => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
        Severity::Critical => Color::BrightRed,
    }
}
