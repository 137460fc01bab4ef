//! `!command [arg]` parsing from chat bodies.

use std::sync::LazyLock;

use regex::Regex;

/// `!<name>[ <arg>]`, anchored at the start of the body.
///
/// Word and space classes are ASCII-only: `\w` is `[0-9A-Za-z_]` and the
/// separator is one of `[\t\n\f\r ]`.
static COMMAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^!([0-9A-Za-z_]+)[\t\n\f\r ]?([0-9A-Za-z_]+)?").expect("command pattern is valid")
});

/// A command invocation extracted from a chat body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotCommand {
    /// Command name without the leading `!`.
    pub name: String,
    /// First word after the name, if any.
    ///
    /// Only a single word is captured: `!repeat hello there` yields
    /// `Some("hello")`.
    pub arg: Option<String>,
}

/// Parse a chat body into a command.
///
/// Returns `None` unless the body starts with `!` followed by at least one
/// word character.
pub fn parse_command(body: &str) -> Option<BotCommand> {
    let caps = COMMAND_RE.captures(body)?;
    Some(BotCommand {
        name: caps[1].to_string(),
        arg: caps.get(2).map(|m| m.as_str().to_string()),
    })
}
