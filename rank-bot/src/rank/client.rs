//! GraphQL client for the ranking service.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use super::riot_id::RiotId;

/// Fixed query selecting the latest competitive tier of an account.
pub const PROFILE_QUERY: &str = "query RiotAccount($gameName: String!, $tagLine: String!) { riotAccount(gameName: $gameName, tagLine: $tagLine) { valorantProfile { latestTier } } }";

/// Why a rank lookup produced no tier.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response is not valid JSON for the profile schema: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response has no data field")]
    MissingData,

    #[error("riot account not found")]
    AccountNotFound,

    #[error("account has no valorant profile")]
    MissingProfile,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryVariables<'a> {
    game_name: &'a str,
    tag_line: &'a str,
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    data: Option<ProfileData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileData {
    riot_account: Option<RiotAccount>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RiotAccount {
    valorant_profile: Option<ValorantProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValorantProfile {
    latest_tier: Option<i64>,
}

/// Client for the ranking service's GraphQL endpoint.
#[derive(Clone)]
pub struct RankClient {
    http: Client,
    endpoint: String,
}

impl RankClient {
    pub fn new(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Fetch the latest tier code for an account.
    ///
    /// `Ok(None)` means the profile exists but reports no tier.
    pub async fn latest_tier(&self, riot_id: &RiotId) -> Result<Option<i64>, LookupError> {
        let variables = serde_json::to_string(&QueryVariables {
            game_name: &riot_id.name,
            tag_line: &riot_id.tag,
        })?;

        info!(riot_id = %riot_id, "rank_query_starting");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("query", PROFILE_QUERY), ("variables", variables.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!(error = %e, "rank_query_timeout");
                } else {
                    error!(error = %e, "rank_query_request_error");
                }
                e
            })?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        info!(
            riot_id = %riot_id,
            status_code = status,
            body_length = body.len(),
            "rank_query_complete"
        );

        let parsed: ProfileResponse = serde_json::from_str(&body)?;
        let account = parsed
            .data
            .ok_or(LookupError::MissingData)?
            .riot_account
            .ok_or(LookupError::AccountNotFound)?;
        let profile = account
            .valorant_profile
            .ok_or(LookupError::MissingProfile)?;

        Ok(profile.latest_tier)
    }
}
