//! User agent and outbound HTTP client construction.
//!
//! Discord rejects API calls without a `DiscordBot (url, version)` user agent.

use reqwest::Client;

/// Build the `DiscordBot (url, version)` user agent for this build.
pub fn bot_user_agent() -> String {
    format!(
        "DiscordBot ({}, {})",
        env!("CARGO_PKG_REPOSITORY"),
        env!("CARGO_PKG_VERSION")
    )
}

/// Build the shared HTTP client used for every outbound call.
pub fn build_http_client() -> reqwest::Result<Client> {
    Client::builder().user_agent(bot_user_agent()).build()
}
