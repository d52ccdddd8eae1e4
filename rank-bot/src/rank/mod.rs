//! Rank lookup for the `rank` command.
//!
//! ```text
//! "name # tag" → RiotId → GraphQL query → tier code → "name#tag's rank: label"
//! ```

pub mod client;
pub mod riot_id;
pub mod tiers;

use tracing::{info, warn};

pub use client::{LookupError, RankClient, PROFILE_QUERY};
pub use riot_id::{RiotId, RiotIdError};
pub use tiers::{tier_label, UNKNOWN_TIER};

/// Reply for input that is not a `name#tag` pair.
pub const INVALID_RIOT_ID: &str = "Invalid Riot ID";

/// Reply for any failed upstream lookup.
pub const FETCH_FAILED: &str = "Failed to fetch user data";

/// Build the reply content for a raw `riotid` option value.
///
/// Never fails: bad input and upstream failures become user-facing text.
pub async fn rank_reply(client: &RankClient, raw: &str) -> String {
    let riot_id: RiotId = match raw.parse() {
        Ok(id) => id,
        Err(e) => {
            warn!(error = %e, input_length = raw.len(), "rank_invalid_riot_id");
            return INVALID_RIOT_ID.to_string();
        }
    };

    match client.latest_tier(&riot_id).await {
        Ok(tier) => {
            let label = tier.map(tier_label).unwrap_or(UNKNOWN_TIER);
            info!(riot_id = %riot_id, tier = ?tier, label = label, "rank_lookup_complete");
            format!("{}'s rank: {}", riot_id, label)
        }
        Err(e) => {
            warn!(riot_id = %riot_id, error = %e, "rank_lookup_failed");
            FETCH_FAILED.to_string()
        }
    }
}
