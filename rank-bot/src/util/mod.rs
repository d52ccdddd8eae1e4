//! Shared helpers.

pub mod user_agent;

pub use user_agent::{bot_user_agent, build_http_client};
