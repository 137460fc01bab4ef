//! Line codec for tokio.
//!
//! Decodes newline-terminated lines (with or without a preceding `\r`) and
//! encodes [`Outbound`] lines terminated by CRLF. No maximum line length is
//! enforced.

use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::error;
use crate::outbound::Outbound;

/// Line terminator required on every outbound line.
pub const CRLF: &str = "\r\n";

/// Codec pairing an inbound line splitter with the outbound line encoder.
#[derive(Debug, Default)]
pub struct TmiCodec {
    /// Index of next byte to check for newline
    next_index: usize,
}

impl TmiCodec {
    /// Create a new codec.
    pub fn new() -> Self {
        Self::default()
    }

    /// The part of `text` before its first `\r` or `\n`.
    pub fn first_line(text: &str) -> &str {
        match text.find(['\r', '\n']) {
            Some(pos) => &text[..pos],
            None => text,
        }
    }

    /// Sanitize outgoing line data.
    ///
    /// Truncates at the first embedded line break so a message body can never
    /// smuggle a second protocol line.
    pub fn sanitize(mut data: String) -> error::Result<String> {
        let len = Self::first_line(&data).len();
        data.truncate(len);
        if data.is_empty() {
            return Err(error::ProtocolError::EmptyLine);
        }
        Ok(data)
    }
}

impl Decoder for TmiCodec {
    type Item = String;
    type Error = error::ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        // Look for newline starting from where we left off
        let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') else {
            self.next_index = src.len();
            return Ok(None);
        };

        let line = src.split_to(self.next_index + offset + 1);
        self.next_index = 0;

        let mut end = line.len() - 1;
        if end > 0 && line[end - 1] == b'\r' {
            end -= 1;
        }

        Ok(Some(String::from_utf8_lossy(&line[..end]).into_owned()))
    }

    /// A final line without a terminator is still a line.
    fn decode_eof(&mut self, src: &mut BytesMut) -> error::Result<Option<String>> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }
        self.next_index = 0;
        if src.is_empty() {
            return Ok(None);
        }

        let line = src.split();
        let end = if line.ends_with(b"\r") { line.len() - 1 } else { line.len() };
        Ok(Some(String::from_utf8_lossy(&line[..end]).into_owned()))
    }
}

impl Encoder<Outbound> for TmiCodec {
    type Error = error::ProtocolError;

    fn encode(&mut self, msg: Outbound, dst: &mut BytesMut) -> error::Result<()> {
        let line = Self::sanitize(msg.to_string())?;
        dst.reserve(line.len() + CRLF.len());
        dst.put_slice(line.as_bytes());
        dst.put_slice(CRLF.as_bytes());
        Ok(())
    }
}
