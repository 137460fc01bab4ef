//! tmibot - Twitch chat bot.
//!
//! Usage: `tmibot [config.toml]`

use tmibot::{BotConfig, Supervisor, telemetry};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = BotConfig::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    info!(
        channel = %config.channel,
        nick = %config.name,
        server = %config.address(),
        "Starting tmibot"
    );

    Supervisor::from_config(config).start().await?;

    info!("tmibot stopped");
    Ok(())
}
