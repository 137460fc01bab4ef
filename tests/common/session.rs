//! Server side of one bot connection.
//!
//! Sends raw lines to the bot and asserts on what it writes back.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

/// One accepted bot connection.
pub struct TmiSession {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
}

impl TmiSession {
    pub fn new(stream: TcpStream) -> Self {
        let (read_half, write_half) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer: BufWriter::new(write_half),
        }
    }

    /// Send a raw line, appending CRLF when missing.
    pub async fn send_raw(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        if !line.ends_with("\r\n") {
            self.writer.write_all(b"\r\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive one line exactly as the bot wrote it.
    ///
    /// Returns an empty string once the bot has closed the connection.
    pub async fn recv_raw(&mut self) -> anyhow::Result<String> {
        self.recv_raw_timeout(Duration::from_secs(5)).await
    }

    pub async fn recv_raw_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        let mut line = String::new();
        timeout(dur, self.reader.read_line(&mut line)).await??;
        Ok(line)
    }

    /// Receive one line without its terminator.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        let line = self.recv_raw().await?;
        if line.is_empty() {
            anyhow::bail!("connection closed by bot");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Read the PASS/NICK/JOIN handshake.
    pub async fn expect_handshake(&mut self) -> anyhow::Result<Vec<String>> {
        let mut lines = Vec::with_capacity(3);
        for _ in 0..3 {
            lines.push(self.recv().await?);
        }
        Ok(lines)
    }

    /// Send the server's usual post-login burst.
    pub async fn welcome(&mut self, nick: &str, channel: &str) -> anyhow::Result<()> {
        for line in [
            format!(":tmi.twitch.tv 001 {nick} :Welcome, GLHF!"),
            format!(":tmi.twitch.tv 376 {nick} :>"),
            format!(":{nick}!{nick}@{nick}.tmi.twitch.tv JOIN #{channel}"),
            format!(":{nick}.tmi.twitch.tv 366 {nick} #{channel} :End of /NAMES list"),
        ] {
            self.send_raw(&line).await?;
        }
        Ok(())
    }

    /// Wait until the bot closes the connection.
    pub async fn expect_closed(&mut self) -> anyhow::Result<()> {
        loop {
            if self.recv_raw().await?.is_empty() {
                return Ok(());
            }
        }
    }
}
