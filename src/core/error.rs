//! Error types
//!
//! Only writer construction returns errors; dispatch itself is
//! fire-and-forget and has no recoverable error path.

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File writer error with path
    #[error("file writer error for '{path}': {message}")]
    FileWriter { path: String, message: String },

    /// Socket writer error with address
    #[error("socket writer error for '{address}': {message}")]
    SocketWriter { address: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LogError {
    pub fn file_writer(path: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::FileWriter {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn socket_writer(address: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::SocketWriter {
            address: address.into(),
            message: message.into(),
        }
    }

    pub fn other<S: Into<String>>(msg: S) -> Self {
        LogError::Other(msg.into())
    }
}
