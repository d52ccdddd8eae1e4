//! Configuration module for environment variable parsing.
//!
//! Secrets are loaded leniently and validated on use, so a missing secret
//! turns into a 500 for the request instead of a process crash.

use std::env;

use thiserror::Error;
use tracing::warn;

/// Default Discord REST API base used for command registration.
pub const DEFAULT_DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Default GraphQL endpoint of the ranking service.
pub const DEFAULT_RANK_API_URL: &str = "https://valorant-server.iesdev.com/graphql";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot token used to authenticate against the Discord API
    pub discord_token: Option<String>,

    /// Discord application id
    pub application_id: Option<String>,

    /// Hex-encoded Ed25519 public key of the application
    pub public_key: Option<String>,

    /// Port for the web server to listen on
    pub port: u16,

    /// Discord REST API base URL
    pub discord_api_base: String,

    /// GraphQL endpoint queried for ranks
    pub rank_api_url: String,
}

/// Borrowed view of the three secrets, only obtainable when all are present.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub discord_token: &'a str,
    pub application_id: &'a str,
    pub public_key: &'a str,
}

/// The two secrets needed to call the Discord API as the bot.
#[derive(Debug, Clone, Copy)]
pub struct BotCredentials<'a> {
    pub discord_token: &'a str,
    pub application_id: &'a str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required secret {0}")]
    MissingSecret(&'static str),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            discord_token: env_secret("DISCORD_TOKEN"),

            application_id: env_secret("DISCORD_APPLICATION_ID"),

            public_key: env_secret("DISCORD_PUBLIC_KEY"),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            discord_api_base: env::var("DISCORD_API_BASE")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_DISCORD_API_BASE.to_string()),

            rank_api_url: env::var("RANK_API_URL")
                .unwrap_or_else(|_| DEFAULT_RANK_API_URL.to_string()),
        }
    }

    /// Validate that all three secrets are set and non-blank.
    pub fn credentials(&self) -> Result<Credentials<'_>, ConfigError> {
        Ok(Credentials {
            discord_token: require(&self.discord_token, "DISCORD_TOKEN")?,
            application_id: require(&self.application_id, "DISCORD_APPLICATION_ID")?,
            public_key: require(&self.public_key, "DISCORD_PUBLIC_KEY")?,
        })
    }

    /// Validate only the secrets needed for command registration.
    pub fn bot_credentials(&self) -> Result<BotCredentials<'_>, ConfigError> {
        Ok(BotCredentials {
            discord_token: require(&self.discord_token, "DISCORD_TOKEN")?,
            application_id: require(&self.application_id, "DISCORD_APPLICATION_ID")?,
        })
    }
}

fn require<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, ConfigError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingSecret(name)),
    }
}

/// Read a secret, treating blank values as unset.
fn env_secret(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        Ok(_) => {
            warn!(env_var = name, "Secret is set but blank, ignoring");
            None
        }
        Err(_) => None,
    }
}
