//! Owner command implementations.

use tmi_proto::BotCommand;
use tracing::info;

use super::Flow;
use crate::error::BotError;
use crate::network::{Connection, Dialer};

/// `!tbdown`: close the connection and stop the bot.
pub(super) async fn shutdown<D: Dialer>(conn: &mut Connection<D>) -> Result<Flow, BotError> {
    info!("Shutdown command received. Shutting down now...");
    conn.disconnect().await;
    Ok(Flow::Shutdown)
}

/// `!repeat [word]`: say the command name back to the channel, or the
/// argument when `commands.repeat_echoes_argument` is set.
pub(super) async fn repeat<D: Dialer>(
    conn: &mut Connection<D>,
    command: &BotCommand,
) -> Result<Flow, BotError> {
    let text = match command.arg.as_deref() {
        Some(arg) if conn.config().commands.repeat_echoes_argument => arg,
        _ => command.name.as_str(),
    }
    .to_string();

    conn.say(&text).await?;
    Ok(Flow::Continue)
}
