//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

use tmi_proto::{TWITCH_PING, TWITCH_PONG};

// =============================================================================
// Connection Defaults
// =============================================================================

pub fn default_server() -> String {
    "irc.chat.twitch.tv".to_string()
}

pub fn default_port() -> u16 {
    6667
}

pub fn default_private_path() -> String {
    "private/oauth.json".to_string()
}

// =============================================================================
// Pacing Defaults
// =============================================================================

/// 20 lines per 30 seconds.
pub fn default_msg_rate_ms() -> u64 {
    667
}

pub fn default_reconnect_delay_ms() -> u64 {
    1000
}

// =============================================================================
// Keepalive Defaults
// =============================================================================

pub fn default_keepalive_probe() -> String {
    TWITCH_PING.to_string()
}

pub fn default_keepalive_reply() -> String {
    TWITCH_PONG.to_string()
}
