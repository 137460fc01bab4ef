//! Outbound protocol lines.
//!
//! [`Outbound`] renders a single line without its terminator; the codec
//! appends CRLF when the line is written.

use std::fmt;

/// A line the client sends to the server.
#[derive(Clone, PartialEq, Eq)]
pub enum Outbound {
    /// `PASS <token>`
    Pass(String),
    /// `NICK <name>`
    Nick(String),
    /// `JOIN #<channel>`
    Join(String),
    /// Keepalive reply, sent verbatim.
    Pong(String),
    /// `PRIVMSG #<channel> <text>`
    ///
    /// The text is written without a leading `:`.
    Privmsg {
        /// Channel name without `#`.
        channel: String,
        /// Message text.
        text: String,
    },
}

impl Outbound {
    /// Short command label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass(_) => "PASS",
            Self::Nick(_) => "NICK",
            Self::Join(_) => "JOIN",
            Self::Pong(_) => "PONG",
            Self::Privmsg { .. } => "PRIVMSG",
        }
    }

    /// Rendering that is safe to log: the `PASS` token is masked.
    pub fn redacted(&self) -> String {
        match self {
            Self::Pass(_) => "PASS ********".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Outbound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass(token) => write!(f, "PASS {token}"),
            Self::Nick(name) => write!(f, "NICK {name}"),
            Self::Join(channel) => write!(f, "JOIN #{channel}"),
            Self::Pong(reply) => f.write_str(reply),
            Self::Privmsg { channel, text } => write!(f, "PRIVMSG #{channel} {text}"),
        }
    }
}

impl fmt::Debug for Outbound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Outbound").field(&self.redacted()).finish()
    }
}
