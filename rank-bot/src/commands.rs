//! Slash command schema and registration against the Discord API.
//!
//! Registration is a bulk overwrite: the full command list replaces whatever
//! the application had before, so repeating it is harmless.

use reqwest::{header::AUTHORIZATION, Client};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::interaction::{CHAT_INPUT, RIOT_ID_OPTION, STRING_OPTION};

/// Name of the only supported command.
pub const RANK_COMMAND: &str = "rank";

const RANK_DESCRIPTION: &str = "Get the competitive rank of a Valorant player";
const RIOT_ID_DESCRIPTION: &str = "Riot ID of the player, formatted as name#tag";

/// Application command definition as accepted by Discord.
#[derive(Debug, Clone, Serialize)]
pub struct CommandSchema {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: u8,
    pub description: &'static str,
    pub options: Vec<OptionSchema>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionSchema {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: u8,
    pub description: &'static str,
    pub required: bool,
}

/// The `/rank riotid:<name#tag>` command.
pub fn rank_command() -> CommandSchema {
    CommandSchema {
        name: RANK_COMMAND,
        kind: CHAT_INPUT,
        description: RANK_DESCRIPTION,
        options: vec![OptionSchema {
            name: RIOT_ID_OPTION,
            kind: STRING_OPTION,
            description: RIOT_ID_DESCRIPTION,
            required: true,
        }],
    }
}

/// Every command the bot registers.
pub fn all_commands() -> Vec<CommandSchema> {
    vec![rank_command()]
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("registration rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Minimal Discord REST client for command registration.
#[derive(Clone)]
pub struct CommandRegistry {
    http: Client,
    api_base: String,
}

impl CommandRegistry {
    pub fn new(http: Client, api_base: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
        }
    }

    /// Replace the application's global commands with `commands`.
    pub async fn overwrite(
        &self,
        application_id: &str,
        bot_token: &str,
        commands: &[CommandSchema],
    ) -> Result<(), RegistrationError> {
        let url = format!("{}/applications/{}/commands", self.api_base, application_id);

        info!(
            application_id = %application_id,
            command_count = commands.len(),
            "command_registration_starting"
        );

        let response = self
            .http
            .put(&url)
            .header(AUTHORIZATION, format!("Bot {}", bot_token))
            .json(commands)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "command_registration_request_error");
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let preview: String = body.chars().take(200).collect();
            warn!(
                status_code = status.as_u16(),
                body_preview = %preview,
                "command_registration_rejected"
            );
            return Err(RegistrationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(status_code = status.as_u16(), "command_registration_complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fake_discord_api;
    use axum::http::StatusCode;

    #[test]
    fn test_rank_command_schema() {
        let json = serde_json::to_value(all_commands()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "name": "rank",
                "type": 1,
                "description": RANK_DESCRIPTION,
                "options": [{
                    "name": "riotid",
                    "type": 3,
                    "description": RIOT_ID_DESCRIPTION,
                    "required": true
                }]
            }])
        );
    }

    #[tokio::test]
    async fn test_overwrite_success() {
        let (base, calls) = fake_discord_api(StatusCode::OK).await;
        let registry = CommandRegistry::new(Client::new(), base);

        registry
            .overwrite("1234", "secret-token", &all_commands())
            .await
            .unwrap();

        let calls = calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].application_id, "1234");
        assert_eq!(calls[0].authorization, "Bot secret-token");
        assert_eq!(calls[0].body[0]["name"], "rank");
    }

    #[tokio::test]
    async fn test_overwrite_rejected() {
        let (base, calls) = fake_discord_api(StatusCode::UNAUTHORIZED).await;
        let registry = CommandRegistry::new(Client::new(), base);

        let result = registry.overwrite("1234", "bad", &all_commands()).await;

        assert!(matches!(
            result,
            Err(RegistrationError::Rejected { status: 401, .. })
        ));
        assert_eq!(calls.lock().unwrap().len(), 1);
    }
}
