//! Optional event listener subsystem.
//!
//! An [`EventListener`] runs beside the chat session on its own task. It
//! never touches the chat connection; the Supervisor starts it once and
//! aborts it when the bot stops.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::BotError;

/// A side channel of platform events (follows, subscriptions, ...).
#[async_trait]
pub trait EventListener: Send + Sync + 'static {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Run until the listener is done or fails.
    async fn listen(&self) -> Result<(), BotError>;
}

/// Spawn `listener` on its own task. Its outcome is only logged.
pub(crate) fn spawn_listener(listener: Arc<dyn EventListener>) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(listener = listener.name(), "Event listener started");
        match listener.listen().await {
            Ok(()) => info!(listener = listener.name(), "Event listener finished"),
            Err(e) => warn!(listener = listener.name(), error = %e, "Event listener failed"),
        }
    })
}
