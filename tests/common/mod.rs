//! Integration test common infrastructure.
//!
//! Provides a fake chat server on a real TCP socket and helpers for writing
//! bot config and credential files.

pub mod server;
pub mod session;

#[allow(unused_imports)]
pub use server::FakeTmiServer;
#[allow(unused_imports)]
pub use session::TmiSession;

use std::path::Path;
use tmibot::BotConfig;

/// Owner login and channel name used by every test.
pub const OWNER: &str = "owner";

/// Nick the bot registers with.
pub const BOT_NICK: &str = "bot";

/// Write `oauth.json` and `config.toml` into `dir` and load the config.
///
/// `credentials` is written verbatim as the credentials file.
pub fn write_bot_files(dir: &Path, port: u16, credentials: &str) -> anyhow::Result<BotConfig> {
    let creds_path = dir.join("oauth.json");
    std::fs::write(&creds_path, credentials)?;

    let config_path = dir.join("config.toml");
    let config_content = format!(
        r#"
channel = "{OWNER}"
name = "{BOT_NICK}"
server = "127.0.0.1"
port = {port}
msg_rate_ms = 0
reconnect_delay_ms = 20
private_path = "{}"
"#,
        creds_path.display()
    );
    std::fs::write(&config_path, config_content)?;

    Ok(BotConfig::load(&config_path)?)
}

/// A `PRIVMSG` line as the server would relay it.
pub fn privmsg(author: &str, body: &str) -> String {
    format!(":{author}!{author}@{author}.tmi.twitch.tv PRIVMSG #{OWNER} :{body}")
}
