//! Error types for the line protocol.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Protocol-level errors raised by the codec.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An outbound line was empty after sanitizing.
    #[error("refusing to send an empty line")]
    EmptyLine,
}
