//! Connection - owns the transport to the chat server.
//!
//! A [`Connection`] is long-lived and outlives individual sockets: each
//! [`connect`](Connection::connect) replaces the framed stream, each
//! [`disconnect`](Connection::disconnect) drops it. Every read and every
//! write goes through this type, so the read loop, keepalive replies and
//! command replies share one serialized write path.
//!
//! ```text
//!  connect() ──▶ join() ──▶ run_read_loop() ──▶ disconnect()
//!     │            │              │
//!     ▼            ▼              ▼
//!  Dialer     PASS/NICK/JOIN   next_line() / send()
//! ```

use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tmi_proto::{Outbound, TmiCodec};
use tokio_util::codec::Framed;
use tracing::{debug, info, warn};

use super::Dialer;
use crate::config::BotConfig;
use crate::error::BotError;

/// Upper bound on flushing pending output when closing.
const CLOSE_TIMEOUT: Duration = Duration::from_secs(1);

/// Connection manager for a single channel session.
pub struct Connection<D: Dialer> {
    config: Arc<BotConfig>,
    dialer: D,
    password: String,
    framed: Option<Framed<D::Stream, TmiCodec>>,
    started_at: Option<Instant>,
}

impl<D: Dialer> Connection<D> {
    /// Create a disconnected manager.
    pub fn new(config: Arc<BotConfig>, dialer: D, password: String) -> Self {
        Self {
            config,
            dialer,
            password,
            framed: None,
            started_at: None,
        }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.framed.is_some()
    }

    /// Time since the current session was established.
    pub fn uptime(&self) -> Option<Duration> {
        self.started_at.map(|t| t.elapsed())
    }

    /// Dial the configured server.
    ///
    /// Any previous connection is closed first. A dial failure is logged and
    /// returned as [`BotError::Dial`]; the caller decides whether to retry.
    pub async fn connect(&mut self) -> Result<(), BotError> {
        if self.is_connected() {
            self.disconnect().await;
        }

        let address = self.config.address();
        info!(server = %self.config.server, port = self.config.port, "Connecting to {}...", self.config.server);

        match self.dialer.dial(&address).await {
            Ok(stream) => {
                self.framed = Some(Framed::new(stream, TmiCodec::new()));
                self.started_at = Some(Instant::now());
                info!(server = %self.config.server, "Connected to {}!", self.config.server);
                Ok(())
            }
            Err(source) => {
                warn!(server = %self.config.server, error = %source, "Cannot connect to {}, retrying", self.config.server);
                Err(BotError::Dial { address, source })
            }
        }
    }

    /// Authenticate and join the channel.
    ///
    /// Writes `PASS`, `NICK` and `JOIN` in that order. Requires a prior
    /// successful [`connect`](Self::connect); otherwise returns
    /// [`BotError::NotConnected`] without writing anything.
    pub async fn join(&mut self) -> Result<(), BotError> {
        let channel = self.config.channel.clone();
        let name = self.config.name.clone();
        let framed = self.framed.as_mut().ok_or(BotError::NotConnected)?;

        info!(channel = %channel, "Joining #{}...", channel);

        let handshake = [
            Outbound::Pass(self.password.clone()),
            Outbound::Nick(name.clone()),
            Outbound::Join(channel.clone()),
        ];
        for line in handshake {
            debug!(command = line.label(), line = %line.redacted(), "-> send");
            framed.feed(line).await.map_err(BotError::Auth)?;
        }
        SinkExt::<Outbound>::flush(framed)
            .await
            .map_err(BotError::Auth)?;

        info!(channel = %channel, nick = %name, "Joined #{} as @{}!", channel, name);
        Ok(())
    }

    /// Close the connection and log the session length.
    ///
    /// Calling this on an already closed connection does nothing.
    pub async fn disconnect(&mut self) {
        let Some(mut framed) = self.framed.take() else {
            debug!("Disconnect requested with no open connection");
            return;
        };

        match tokio::time::timeout(CLOSE_TIMEOUT, SinkExt::<Outbound>::close(&mut framed)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => debug!(error = %e, "Error while closing connection"),
            Err(_) => debug!("Timed out flushing connection on close"),
        }

        let live_for = self
            .started_at
            .take()
            .map(|t| t.elapsed())
            .unwrap_or_default();
        info!(
            server = %self.config.server,
            uptime_secs = live_for.as_secs(),
            "Closed connection from {} | Live for: {}s",
            self.config.server,
            live_for.as_secs()
        );
    }

    /// Write one line.
    pub async fn send(&mut self, msg: Outbound) -> Result<(), BotError> {
        let framed = self.framed.as_mut().ok_or(BotError::NotConnected)?;
        debug!(command = msg.label(), line = %msg.redacted(), "-> send");
        framed.send(msg).await.map_err(BotError::Write)
    }

    /// Send a chat message to the channel.
    ///
    /// Only the text before the first line break is sent. A message that is
    /// empty after that cut is rejected with [`BotError::Validation`] before
    /// any write is attempted.
    pub async fn say(&mut self, message: &str) -> Result<(), BotError> {
        let text = TmiCodec::first_line(message);
        if text.is_empty() {
            return Err(BotError::Validation("message was empty"));
        }
        if text.len() < message.len() {
            debug!(dropped = message.len() - text.len(), "Message truncated at line break");
        }
        self.send(Outbound::Privmsg {
            channel: self.config.channel.clone(),
            text: text.to_string(),
        })
        .await
    }

    /// Read the next inbound line.
    ///
    /// End of stream and decode failures both surface as [`BotError::Read`].
    pub(crate) async fn next_line(&mut self) -> Result<String, BotError> {
        let framed = self.framed.as_mut().ok_or(BotError::NotConnected)?;
        match framed.next().await {
            Some(Ok(line)) => Ok(line),
            Some(Err(e)) => Err(BotError::Read(e.to_string())),
            None => Err(BotError::Read("connection closed by peer".to_string())),
        }
    }
}
