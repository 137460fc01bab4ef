//! # tmi-proto
//!
//! Line-level protocol pieces for a Twitch-style IRC chat client.
//!
//! ## Features
//!
//! - Classification of raw inbound lines (keepalive, chat message, other)
//! - `!command [arg]` parsing from chat bodies
//! - Typed outbound lines (`PASS`, `NICK`, `JOIN`, `PONG`, `PRIVMSG`)
//! - Optional Tokio codec that splits inbound bytes into lines and
//!   terminates outbound lines with CRLF
//!
//! ## Quick Start
//!
//! ```rust
//! use tmi_proto::{parse_command, parse_line, ParsedLine, TWITCH_PING};
//!
//! let raw = ":alice!alice@alice.tmi.twitch.tv PRIVMSG #alice :!repeat hi";
//! if let ParsedLine::Chat(msg) = parse_line(raw, TWITCH_PING) {
//!     let cmd = parse_command(&msg.body).expect("command syntax");
//!     assert_eq!(cmd.name, "repeat");
//!     assert_eq!(cmd.arg.as_deref(), Some("hi"));
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod line;
pub mod outbound;

#[cfg(feature = "tokio")]
pub mod codec;

pub use self::command::{parse_command, BotCommand};
pub use self::error::ProtocolError;
pub use self::line::{parse_line, ChatMessage, ParsedLine, TWITCH_PING, TWITCH_PONG};
pub use self::outbound::Outbound;

#[cfg(feature = "tokio")]
pub use self::codec::TmiCodec;
