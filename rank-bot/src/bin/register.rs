//! Valorank Register - one-shot slash command registration.
//!
//! Overwrites the application's global commands with the bot's schema, the
//! same operation the web server performs on PATCH. Useful from deploy scripts.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use valorank::util::build_http_client;
use valorank::{all_commands, CommandRegistry, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("register_starting");

    let config = Config::from_env();
    let credentials = config.bot_credentials().context("Invalid configuration")?;

    let http = build_http_client().context("Failed to build HTTP client")?;
    let registry = CommandRegistry::new(http, config.discord_api_base.clone());

    let commands = all_commands();
    registry
        .overwrite(
            credentials.application_id,
            credentials.discord_token,
            &commands,
        )
        .await
        .context("Failed to register commands")?;

    info!(
        command_count = commands.len(),
        application_id = %credentials.application_id,
        "register_complete"
    );

    Ok(())
}
