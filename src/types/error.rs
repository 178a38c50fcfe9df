//! Receiver error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while recovering a message from a capture
///
/// There is no recovery path: every stage runs exactly once over fully
/// buffered data, so any of these aborts the whole pipeline.
#[derive(Error, Debug)]
pub enum ReceiverError {
    /// Capture or preamble file is missing or unreadable
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Non-numeric sample line or malformed complex literal
    #[error("{}:{line}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number of the offending line
        line: usize,
        reason: String,
    },

    /// Zero-length capture or preamble
    #[error("empty signal: {0}")]
    EmptySignal(&'static str),

    /// The preamble cannot fit inside the decimated signal
    #[error("preamble length {preamble} exceeds signal length {signal}")]
    PreambleTooLong { preamble: usize, signal: usize },
}

/// Result type alias for receiver operations
pub type ReceiverResult<T> = Result<T, ReceiverError>;
