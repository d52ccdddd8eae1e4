//! Interaction dispatch.
//!
//! Turns a verified interaction body into the response Discord expects.
//!
//! ## Dispatch Flow
//!
//! ```text
//! body → Interaction → classify() → Pong | RankLookup | Invalid
//! ```

pub mod types;

use tracing::{info, warn};

use crate::rank::{rank_reply, RankClient};

pub use types::{
    CommandData, CommandOption, CommandType, Interaction, InteractionResponse, InteractionType,
    OptionType, CHAT_INPUT, STRING_OPTION,
};

/// Name of the option carrying the Riot ID.
pub const RIOT_ID_OPTION: &str = "riotid";

/// What to do with a parsed interaction.
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch<'a> {
    Pong,
    RankLookup(&'a str),
    Invalid,
}

/// Decide how to answer an interaction.
///
/// Every chat-input command is treated as the rank command; the command name
/// is not inspected.
pub fn classify(interaction: &Interaction) -> Dispatch<'_> {
    match interaction.kind {
        InteractionType::Ping => Dispatch::Pong,
        InteractionType::ApplicationCommand => match &interaction.data {
            Some(data) if data.kind == Some(CommandType::ChatInput) => data
                .string_option(RIOT_ID_OPTION)
                .map(Dispatch::RankLookup)
                .unwrap_or(Dispatch::Invalid),
            _ => Dispatch::Invalid,
        },
        InteractionType::Other(_) => Dispatch::Invalid,
    }
}

/// Answer a verified interaction body.
///
/// Returns `None` when the body is not an interaction this bot understands.
pub async fn respond(body: &[u8], rank_client: &RankClient) -> Option<InteractionResponse> {
    let interaction: Interaction = match serde_json::from_slice(body) {
        Ok(i) => i,
        Err(e) => {
            warn!(error = %e, body_length = body.len(), "interaction_parse_failed");
            return None;
        }
    };

    match classify(&interaction) {
        Dispatch::Pong => {
            info!("interaction_ping");
            Some(InteractionResponse::pong())
        }
        Dispatch::RankLookup(raw) => {
            info!(
                command = interaction.data.as_ref().map(|d| d.name.as_str()).unwrap_or(""),
                "interaction_rank_command"
            );
            let content = rank_reply(rank_client, raw).await;
            Some(InteractionResponse::message(content))
        }
        Dispatch::Invalid => {
            warn!(interaction_type = ?interaction.kind, "interaction_unsupported");
            None
        }
    }
}
