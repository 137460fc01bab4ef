//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::BotConfig;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("channel is required")]
    MissingChannel,
    #[error("channel must not start with '#', got '{0}'")]
    ChannelHasPrefix(String),
    #[error("name is required")]
    MissingName,
    #[error("server is required")]
    MissingServer,
    #[error("port must be non-zero")]
    ZeroPort,
    #[error("keepalive.probe is required")]
    MissingKeepaliveProbe,
    #[error("keepalive.reply is required")]
    MissingKeepaliveReply,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &BotConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.channel.is_empty() {
        errors.push(ValidationError::MissingChannel);
    } else if config.channel.starts_with('#') {
        errors.push(ValidationError::ChannelHasPrefix(config.channel.clone()));
    }
    if config.name.is_empty() {
        errors.push(ValidationError::MissingName);
    }
    if config.server.is_empty() {
        errors.push(ValidationError::MissingServer);
    }
    if config.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    if config.keepalive.probe.is_empty() {
        errors.push(ValidationError::MissingKeepaliveProbe);
    }
    if config.keepalive.reply.is_empty() {
        errors.push(ValidationError::MissingKeepaliveReply);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
