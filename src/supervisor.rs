//! Supervisor - top-level retry loop.
//!
//! Loads credentials once, then runs connect → join → read forever. A
//! failed session is followed by a fixed `reconnect_delay` and a fresh
//! attempt; there is no retry limit. The loop ends only when the read loop
//! returns cleanly after an owner shutdown.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::BotConfig;
use crate::credentials::{CredentialProvider, FileCredentials};
use crate::error::BotError;
use crate::events::{EventListener, spawn_listener};
use crate::network::{Connection, Dialer, TcpDialer};

pub struct Supervisor<D: Dialer, C: CredentialProvider> {
    config: Arc<BotConfig>,
    dialer: D,
    credentials: C,
    listener: Option<Arc<dyn EventListener>>,
}

impl Supervisor<TcpDialer, FileCredentials> {
    /// TCP transport with credentials read from `config.private_path`.
    pub fn from_config(config: BotConfig) -> Self {
        let credentials = FileCredentials::new(config.private_path());
        Self::new(Arc::new(config), TcpDialer, credentials)
    }
}

impl<D: Dialer, C: CredentialProvider> Supervisor<D, C> {
    pub fn new(config: Arc<BotConfig>, dialer: D, credentials: C) -> Self {
        Self {
            config,
            dialer,
            credentials,
            listener: None,
        }
    }

    /// Run `listener` alongside the chat session.
    pub fn with_event_listener(mut self, listener: Arc<dyn EventListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Run the bot until an owner shutdown.
    ///
    /// Returns an error only when credentials cannot be loaded, in which case
    /// no connection is attempted.
    pub async fn start(self) -> Result<(), BotError> {
        let password = self.credentials.password().map_err(|e| {
            error!(error = %e, "Failed to load credentials. Aborting...");
            BotError::from(e)
        })?;

        let listener = self.listener.map(spawn_listener);
        let delay = self.config.reconnect_delay();
        let mut conn = Connection::new(Arc::clone(&self.config), self.dialer, password);
        let mut restarts: u64 = 0;

        loop {
            match run_session(&mut conn).await {
                Ok(()) => {
                    info!(restarts, "Bot stopped by owner");
                    break;
                }
                Err(e) => {
                    conn.disconnect().await;
                    tokio::time::sleep(delay).await;
                    restarts += 1;
                    warn!(error = %e, code = e.error_code(), restarts, "Starting bot again...");
                }
            }
        }

        if let Some(handle) = listener {
            handle.abort();
            let _ = handle.await;
        }
        Ok(())
    }
}

async fn run_session<D: Dialer>(conn: &mut Connection<D>) -> Result<(), BotError> {
    conn.connect().await?;
    conn.join().await?;
    conn.run_read_loop().await
}
