//! Fake chat server.
//!
//! Listens on an ephemeral localhost port and hands out one
//! [`TmiSession`] per accepted bot connection.

use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::timeout;

use super::session::TmiSession;

/// A fake TMI server instance.
pub struct FakeTmiServer {
    listener: TcpListener,
    port: u16,
    accepted: usize,
}

impl FakeTmiServer {
    /// Bind to an ephemeral port.
    pub async fn bind() -> anyhow::Result<Self> {
        Self::bind_port(0).await
    }

    /// Bind to a specific port.
    pub async fn bind_port(port: u16) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(("127.0.0.1", port)).await?;
        let port = listener.local_addr()?.port();
        Ok(Self {
            listener,
            port,
            accepted: 0,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Number of connections accepted so far.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Wait for the bot to connect.
    pub async fn accept(&mut self) -> anyhow::Result<TmiSession> {
        let (stream, _) = timeout(Duration::from_secs(5), self.listener.accept()).await??;
        self.accepted += 1;
        Ok(TmiSession::new(stream))
    }
}
