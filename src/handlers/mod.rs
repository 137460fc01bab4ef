//! Chat command handlers.
//!
//! Commands arrive as [`BotCommand`] values parsed from channel messages.
//! Only the channel owner (the author whose login equals the configured
//! channel name) may run them; everyone else's commands are parsed and
//! dropped.

mod owner;

use tmi_proto::BotCommand;
use tracing::{debug, info};

use crate::error::BotError;
use crate::network::{Connection, Dialer};

/// What the read loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The owner asked the bot to stop. The connection is already closed.
    Shutdown,
}

/// Owner commands the bot knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerCommand {
    /// `!tbdown`
    Shutdown,
    /// `!repeat [word]`
    Repeat,
    Unknown,
}

impl OwnerCommand {
    pub fn from_name(name: &str) -> Self {
        match name {
            "tbdown" => Self::Shutdown,
            "repeat" => Self::Repeat,
            _ => Self::Unknown,
        }
    }
}

/// Whether `author` may run owner commands on this connection.
pub fn is_owner<D: Dialer>(conn: &Connection<D>, author: &str) -> bool {
    author == conn.config().channel
}

/// Route a parsed command.
///
/// Errors from replies are returned unchanged; the read loop decides
/// whether they end the session.
pub async fn dispatch<D: Dialer>(
    conn: &mut Connection<D>,
    command: &BotCommand,
    author: &str,
) -> Result<Flow, BotError> {
    if !is_owner(conn, author) {
        debug!(author = %author, command = %command.name, "Ignoring command from non-owner");
        return Ok(Flow::Continue);
    }

    match OwnerCommand::from_name(&command.name) {
        OwnerCommand::Shutdown => owner::shutdown(conn).await,
        OwnerCommand::Repeat => owner::repeat(conn, command).await,
        OwnerCommand::Unknown => {
            info!(command = %command.name, "{} command received", command.name);
            Ok(Flow::Continue)
        }
    }
}
