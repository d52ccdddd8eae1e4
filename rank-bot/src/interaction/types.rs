//! Interaction payload types.
//!
//! This module defines the formats for:
//! - inbound interaction bodies sent by Discord
//! - outbound interaction responses
//!
//! Only the fields the bot reads are modelled; everything else is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_repr::Serialize_repr;

/// Application command type code for slash commands.
pub const CHAT_INPUT: u8 = 1;

/// Option type code for string options.
pub const STRING_OPTION: u8 = 3;

// =============================================================================
// Inbound Interaction Types
// =============================================================================

/// Interaction discriminant. Unknown codes are kept rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "u8")]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    Other(u8),
}

impl From<u8> for InteractionType {
    fn from(code: u8) -> Self {
        match code {
            1 => InteractionType::Ping,
            2 => InteractionType::ApplicationCommand,
            other => InteractionType::Other(other),
        }
    }
}

/// Application command discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "u8")]
pub enum CommandType {
    ChatInput,
    Other(u8),
}

impl From<u8> for CommandType {
    fn from(code: u8) -> Self {
        match code {
            CHAT_INPUT => CommandType::ChatInput,
            other => CommandType::Other(other),
        }
    }
}

/// Command option discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "u8")]
pub enum OptionType {
    String,
    Other(u8),
}

impl From<u8> for OptionType {
    fn from(code: u8) -> Self {
        match code {
            STRING_OPTION => OptionType::String,
            other => OptionType::Other(other),
        }
    }
}

/// Inbound interaction body.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: InteractionType,
    #[serde(default)]
    pub data: Option<CommandData>,
}

/// The `data` object of an application command.
///
/// Component and modal interactions also carry `data` with a different shape,
/// so every field is optional here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandData {
    #[serde(default, rename = "type")]
    pub kind: Option<CommandType>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

/// A name/type/value triple supplied by the invoking user.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OptionType,
    #[serde(default)]
    pub value: Option<Value>,
}

impl CommandData {
    /// Find a string option by name.
    pub fn string_option(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .filter(|opt| opt.name == name && opt.kind == OptionType::String)
            .find_map(|opt| opt.value.as_ref().and_then(Value::as_str))
    }
}

// =============================================================================
// Outbound Response Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr)]
#[repr(u8)]
pub enum ResponseType {
    Pong = 1,
    ChannelMessageWithSource = 4,
}

#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: ResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageData {
    pub content: String,
}

impl InteractionResponse {
    /// Acknowledge a ping.
    pub fn pong() -> Self {
        Self {
            kind: ResponseType::Pong,
            data: None,
        }
    }

    /// Reply in the channel the command was invoked from.
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: ResponseType::ChannelMessageWithSource,
            data: Some(MessageData {
                content: content.into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ping() {
        let interaction: Interaction = serde_json::from_str(r#"{"type":1,"id":"1"}"#).unwrap();
        assert_eq!(interaction.kind, InteractionType::Ping);
        assert!(interaction.data.is_none());
    }

    #[test]
    fn test_parse_chat_input() {
        let body = r#"{
            "type": 2,
            "data": {
                "id": "42",
                "name": "rank",
                "type": 1,
                "options": [{"name": "riotid", "type": 3, "value": "Player#EUW"}]
            }
        }"#;
        let interaction: Interaction = serde_json::from_str(body).unwrap();
        assert_eq!(interaction.kind, InteractionType::ApplicationCommand);

        let data = interaction.data.unwrap();
        assert_eq!(data.kind, Some(CommandType::ChatInput));
        assert_eq!(data.name, "rank");
        assert_eq!(data.string_option("riotid"), Some("Player#EUW"));
    }

    #[test]
    fn test_parse_unknown_type() {
        let body = r#"{"type":3,"data":{"custom_id":"button","component_type":2}}"#;
        let interaction: Interaction = serde_json::from_str(body).unwrap();
        assert_eq!(interaction.kind, InteractionType::Other(3));
        assert!(interaction.data.unwrap().kind.is_none());
    }

    #[test]
    fn test_string_option_ignores_other_types() {
        let data = CommandData {
            kind: Some(CommandType::ChatInput),
            name: "rank".to_string(),
            options: vec![CommandOption {
                name: "riotid".to_string(),
                kind: OptionType::Other(4),
                value: Some(Value::from(12)),
            }],
        };
        assert_eq!(data.string_option("riotid"), None);
    }

    #[test]
    fn test_serialize_pong() {
        let json = serde_json::to_string(&InteractionResponse::pong()).unwrap();
        assert_eq!(json, r#"{"type":1}"#);
    }

    #[test]
    fn test_serialize_message() {
        let json = serde_json::to_string(&InteractionResponse::message("hi")).unwrap();
        assert_eq!(json, r#"{"type":4,"data":{"content":"hi"}}"#);
    }
}
