//! Socket writer for remote log collection
//!
//! Sends rendered lines to a remote TCP endpoint, JSON by default so the
//! receiving side gets one parseable object per line.

use super::Format;
use crate::core::{Event, LogError, Result, Writer};
use parking_lot::Mutex;
use std::io::Write;
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct SocketWriter {
    stream: Mutex<Option<TcpStream>>,
    address: String,
    format: Format,
    reconnect: bool,
}

impl SocketWriter {
    /// Connect to `addr` (e.g. `"127.0.0.1:9000"`).
    pub fn new(addr: impl ToSocketAddrs + ToString) -> Result<Self> {
        let address = addr.to_string();
        let stream = connect(&address)
            .map_err(|e| LogError::socket_writer(address.clone(), e.to_string()))?;

        Ok(Self {
            stream: Mutex::new(Some(stream)),
            address,
            format: Format::Json,
            reconnect: true,
        })
    }

    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable reconnect-and-resend after a failed write.
    #[must_use]
    pub fn with_reconnect(mut self, reconnect: bool) -> Self {
        self.reconnect = reconnect;
        self
    }
}

impl Writer for SocketWriter {
    fn write(&self, event: &Event) {
        let line = self.format.render(event);
        let mut guard = self.stream.lock();

        if let Some(stream) = guard.as_mut() {
            if stream.write_all(&line).is_ok() {
                return;
            }
            // Connection lost.
            *guard = None;
        }

        if !self.reconnect {
            return;
        }

        match connect(&self.address) {
            Ok(mut stream) => {
                if let Err(e) = stream.write_all(&line) {
                    eprintln!("[fanlog] socket writer '{}': {}", self.address, e);
                } else {
                    *guard = Some(stream);
                }
            }
            Err(e) => {
                eprintln!(
                    "[fanlog] socket writer '{}': reconnect failed: {}",
                    self.address, e
                );
            }
        }
    }

    fn close(&self) {
        if let Some(mut stream) = self.stream.lock().take() {
            let _ = stream.flush();
            let _ = stream.shutdown(Shutdown::Both);
        }
    }
}

fn connect(address: &str) -> std::io::Result<TcpStream> {
    let stream = TcpStream::connect(address)?;
    stream.set_write_timeout(Some(WRITE_TIMEOUT))?;
    stream.set_nodelay(true)?;
    Ok(stream)
}
