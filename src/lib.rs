//! tmibot - single-channel Twitch chat bot.
//!
//! Connects to a Twitch-style IRC server, authenticates, joins one channel,
//! answers keepalives and runs a few owner-only commands. Connection loss
//! is handled by [`Supervisor`], which restarts the session until the
//! channel owner sends `!tbdown`.

pub mod config;
pub mod credentials;
pub mod error;
pub mod events;
pub mod handlers;
pub mod network;
pub mod supervisor;
pub mod telemetry;

pub use config::BotConfig;
pub use credentials::{CredentialProvider, FileCredentials};
pub use error::BotError;
pub use events::EventListener;
pub use network::{Connection, Dialer, TcpDialer};
pub use supervisor::Supervisor;
