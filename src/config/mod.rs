//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions (BotConfig, KeepaliveConfig, CommandsConfig)
//! - [`defaults`]: serde default value functions
//! - [`validation`]: startup validation of a loaded config

mod defaults;
mod types;
mod validation;

pub use types::{BotConfig, CommandsConfig, ConfigError, KeepaliveConfig};
pub use validation::{ValidationError, validate};
