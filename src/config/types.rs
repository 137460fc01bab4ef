//! Core configuration types and loading.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use super::defaults::{
    default_keepalive_probe, default_keepalive_reply, default_msg_rate_ms, default_port,
    default_private_path, default_reconnect_delay_ms, default_server,
};
use super::validation::{ValidationError, validate};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Bot configuration.
///
/// Loaded once at startup and shared read-only for the life of the process.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Channel to join, without `#`. Its owner is the only author allowed
    /// to issue owner commands.
    pub channel: String,
    /// Nickname the bot registers with.
    pub name: String,
    /// Chat server host.
    #[serde(default = "default_server")]
    pub server: String,
    /// Chat server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Delay after each processed line, in milliseconds.
    #[serde(default = "default_msg_rate_ms")]
    pub msg_rate_ms: u64,
    /// Path to the JSON credentials file.
    #[serde(default = "default_private_path")]
    pub private_path: String,
    /// Delay before reconnecting after a lost connection, in milliseconds.
    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,
    /// Keepalive probe/reply pair.
    #[serde(default)]
    pub keepalive: KeepaliveConfig,
    /// Owner command behaviour.
    #[serde(default)]
    pub commands: CommandsConfig,
}

impl BotConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Build a config for `channel` with every other field at its default.
    pub fn new(channel: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            name: name.into(),
            server: default_server(),
            port: default_port(),
            msg_rate_ms: default_msg_rate_ms(),
            private_path: default_private_path(),
            reconnect_delay_ms: default_reconnect_delay_ms(),
            keepalive: KeepaliveConfig::default(),
            commands: CommandsConfig::default(),
        }
    }

    /// `host:port` of the chat server.
    pub fn address(&self) -> String {
        format!("{}:{}", self.server, self.port)
    }

    /// Per-line self-throttle delay.
    pub fn msg_rate(&self) -> Duration {
        Duration::from_millis(self.msg_rate_ms)
    }

    /// Backoff between supervisor restarts.
    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }

    /// Credentials file location.
    pub fn private_path(&self) -> PathBuf {
        PathBuf::from(&self.private_path)
    }
}

impl std::str::FromStr for BotConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: BotConfig = toml::from_str(s)?;
        validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

/// Keepalive probe/reply pair.
///
/// The probe is matched against inbound lines by exact equality; the reply
/// is written back verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct KeepaliveConfig {
    #[serde(default = "default_keepalive_probe")]
    pub probe: String,
    #[serde(default = "default_keepalive_reply")]
    pub reply: String,
}

impl Default for KeepaliveConfig {
    fn default() -> Self {
        Self {
            probe: default_keepalive_probe(),
            reply: default_keepalive_reply(),
        }
    }
}

/// Owner command configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandsConfig {
    /// When set, `!repeat <word>` echoes `<word>` instead of the command
    /// name. Off by default.
    #[serde(default)]
    pub repeat_echoes_argument: bool,
}
