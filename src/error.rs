//! Unified error handling for tmibot.
//!
//! [`BotError`] is the typed taxonomy every component returns. The
//! Supervisor uses [`BotError::is_transient`] to decide between restarting
//! the connect/join/read cycle and aborting.

use thiserror::Error;

use crate::credentials::CredentialError;

/// Errors surfaced by the connection lifecycle and command handling.
#[derive(Debug, Error)]
pub enum BotError {
    /// Credentials could not be loaded. Fatal: never retried.
    #[error("credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error("cannot connect to {address}: {source}")]
    Dial {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Handshake (PASS/NICK/JOIN) could not be written.
    #[error("authentication handshake failed: {0}")]
    Auth(#[source] tmi_proto::ProtocolError),

    #[error("chat read failed: {0}")]
    Read(String),

    #[error("write failed: {0}")]
    Write(#[source] tmi_proto::ProtocolError),

    /// Rejected before any network call.
    #[error("invalid message: {0}")]
    Validation(&'static str),

    #[error("not connected")]
    NotConnected,
}

impl BotError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Credential(_) => "credential_error",
            Self::Dial { .. } => "dial_error",
            Self::Auth(_) => "auth_error",
            Self::Read(_) => "read_error",
            Self::Write(_) => "write_error",
            Self::Validation(_) => "validation_error",
            Self::NotConnected => "not_connected",
        }
    }

    /// Whether the error means the connection is gone and the Supervisor
    /// should restart the cycle.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Dial { .. } | Self::Auth(_) | Self::Read(_) | Self::Write(_) | Self::NotConnected
        )
    }
}
