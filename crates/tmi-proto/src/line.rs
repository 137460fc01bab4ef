//! Classification of raw inbound lines.
//!
//! Every line read from the server becomes exactly one [`ParsedLine`]. The
//! parser never fails: anything that is neither the keepalive probe nor a
//! channel `PRIVMSG` is reported as [`ParsedLine::Unrecognized`].

use std::sync::LazyLock;

use regex::Regex;

/// Keepalive probe sent by the Twitch chat server.
pub const TWITCH_PING: &str = "PING :tmi.twitch.tv";

/// Reply the client must send for [`TWITCH_PING`].
pub const TWITCH_PONG: &str = "PONG :tmi.twitch.tv";

/// `:<author>!<ident>@<host>.tmi.twitch.tv PRIVMSG #<channel>[ :<body>]`
///
/// Group 1 is the author, group 2 the optional body. Names are ASCII word
/// characters only.
static PRIVMSG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^:([0-9A-Za-z_]+)![0-9A-Za-z_]+@[0-9A-Za-z_]+\.tmi\.twitch\.tv PRIVMSG #[0-9A-Za-z_]+(?: :(.*))?$")
        .expect("PRIVMSG pattern is valid")
});

/// A chat message posted to the channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    /// Login name of the sender.
    pub author: String,
    /// Message text; empty when the line carried no trailing body.
    pub body: String,
}

/// One classified inbound line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedLine {
    /// The server's keepalive probe.
    Keepalive,
    /// A channel chat message.
    Chat(ChatMessage),
    /// Anything else (numerics, JOIN echoes, CAP replies, ...).
    Unrecognized,
}

/// Classify a raw line.
///
/// `probe` is compared for exact equality, so callers pass the trimmed
/// line as produced by the codec.
pub fn parse_line(line: &str, probe: &str) -> ParsedLine {
    if line == probe {
        return ParsedLine::Keepalive;
    }

    match PRIVMSG_RE.captures(line) {
        Some(caps) => ParsedLine::Chat(ChatMessage {
            author: caps[1].to_string(),
            body: caps
                .get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        }),
        None => ParsedLine::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat(author: &str, body: &str) -> ParsedLine {
        ParsedLine::Chat(ChatMessage {
            author: author.to_string(),
            body: body.to_string(),
        })
    }

    #[test]
    fn test_keepalive_exact_match() {
        assert_eq!(parse_line(TWITCH_PING, TWITCH_PING), ParsedLine::Keepalive);
    }

    #[test]
    fn test_keepalive_requires_exact_text() {
        assert_eq!(
            parse_line("PING :tmi.twitch.tv ", TWITCH_PING),
            ParsedLine::Unrecognized
        );
        assert_eq!(
            parse_line("PING :irc.example.com", TWITCH_PING),
            ParsedLine::Unrecognized
        );
    }

    #[test]
    fn test_custom_probe() {
        assert_eq!(
            parse_line("PING :irc.example.com", "PING :irc.example.com"),
            ParsedLine::Keepalive
        );
        assert_eq!(parse_line(TWITCH_PING, "PING :irc.example.com"), ParsedLine::Unrecognized);
    }

    #[test]
    fn test_privmsg_with_body() {
        let line = ":alice!alice@alice.tmi.twitch.tv PRIVMSG #chan :hello world";
        assert_eq!(parse_line(line, TWITCH_PING), chat("alice", "hello world"));
    }

    #[test]
    fn test_privmsg_without_body() {
        let line = ":bob!bob@bob.tmi.twitch.tv PRIVMSG #chan";
        assert_eq!(parse_line(line, TWITCH_PING), chat("bob", ""));
    }

    #[test]
    fn test_privmsg_body_keeps_colons() {
        let line = ":bob!bob@bob.tmi.twitch.tv PRIVMSG #chan :time is 12:30 :)";
        assert_eq!(parse_line(line, TWITCH_PING), chat("bob", "time is 12:30 :)"));
    }

    #[test]
    fn test_non_twitch_host_is_unrecognized() {
        let line = ":alice!alice@example.com PRIVMSG #chan :hello";
        assert_eq!(parse_line(line, TWITCH_PING), ParsedLine::Unrecognized);
    }

    #[test]
    fn test_non_ascii_author_is_unrecognized() {
        let line = ":j\u{f6}e!j\u{f6}e@j\u{f6}e.tmi.twitch.tv PRIVMSG #chan :hi";
        assert_eq!(parse_line(line, TWITCH_PING), ParsedLine::Unrecognized);
    }

    #[test]
    fn test_non_ascii_body_is_kept() {
        let line = ":alice!alice@alice.tmi.twitch.tv PRIVMSG #chan :caf\u{e9} \u{1F600}";
        assert_eq!(parse_line(line, TWITCH_PING), chat("alice", "caf\u{e9} \u{1F600}"));
    }

    #[test]
    fn test_other_lines_are_unrecognized() {
        for line in [
            "",
            ":tmi.twitch.tv 001 bot :Welcome, GLHF!",
            ":bot!bot@bot.tmi.twitch.tv JOIN #chan",
            ":alice!alice@alice.tmi.twitch.tv NOTICE #chan :hi",
            "PRIVMSG #chan :no prefix",
            "garbage \u{1F600} line",
        ] {
            assert_eq!(parse_line(line, TWITCH_PING), ParsedLine::Unrecognized, "{line}");
        }
    }
}
