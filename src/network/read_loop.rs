//! Chat read loop.
//!
//! Reads one line at a time from the open connection, answers keepalives,
//! routes chat messages to the command dispatcher and sleeps `msg_rate`
//! after each processed line. Nothing is retained between iterations.

use tmi_proto::{Outbound, ParsedLine, parse_command, parse_line};
use tracing::{debug, info, warn};

use super::{Connection, Dialer};
use crate::error::BotError;
use crate::handlers::{Flow, dispatch};

impl<D: Dialer> Connection<D> {
    /// Run until the connection fails or the owner shuts the bot down.
    ///
    /// Returns `Ok(())` only for an owner shutdown. Any read or write failure
    /// closes the connection and is returned to the caller; it is never
    /// retried here.
    pub async fn run_read_loop(&mut self) -> Result<(), BotError> {
        let channel = self.config().channel.clone();
        let msg_rate = self.config().msg_rate();
        info!(channel = %channel, "Watching #{}...", channel);

        loop {
            let line = match self.next_line().await {
                Ok(line) => line,
                Err(e) => {
                    self.disconnect().await;
                    return Err(e);
                }
            };
            info!("{}", line);

            match parse_line(&line, &self.config().keepalive.probe) {
                ParsedLine::Keepalive => {
                    let reply = Outbound::Pong(self.config().keepalive.reply.clone());
                    if let Err(e) = self.send(reply).await {
                        self.disconnect().await;
                        return Err(e);
                    }
                    continue;
                }
                ParsedLine::Chat(msg) => {
                    info!(author = %msg.author, "{}: {}", msg.author, msg.body);

                    if let Some(cmd) = parse_command(&msg.body) {
                        match dispatch(self, &cmd, &msg.author).await {
                            Ok(Flow::Continue) => {}
                            Ok(Flow::Shutdown) => return Ok(()),
                            Err(e) if e.is_transient() => {
                                self.disconnect().await;
                                return Err(e);
                            }
                            Err(e) => {
                                warn!(command = %cmd.name, error = %e, code = e.error_code(), "Command failed");
                            }
                        }
                    }
                }
                ParsedLine::Unrecognized => {
                    debug!("Unrecognized line ignored");
                }
            }

            tokio::time::sleep(msg_rate).await;
        }
    }
}
