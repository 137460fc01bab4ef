//! Transport dialing.
//!
//! [`Dialer`] is the seam between the Connection manager and the network, so
//! tests can hand the bot an in-memory stream instead of a TCP socket.

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;

/// Opens a bidirectional byte stream to the chat server.
#[async_trait]
pub trait Dialer: Send + Sync + 'static {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send + 'static;

    /// Dial `address` (`host:port`).
    async fn dial(&self, address: &str) -> std::io::Result<Self::Stream>;
}

/// Plain TCP dialer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpDialer;

#[async_trait]
impl Dialer for TcpDialer {
    type Stream = TcpStream;

    async fn dial(&self, address: &str) -> std::io::Result<TcpStream> {
        let stream = TcpStream::connect(address).await?;
        stream.set_nodelay(true)?;
        Ok(stream)
    }
}
