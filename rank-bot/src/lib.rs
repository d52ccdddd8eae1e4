//! Valorank - Discord interactions webhook reporting Valorant ranks.
//!
//! This library provides shared modules for the two binaries:
//! - `valorank`: Web server receiving interaction callbacks
//! - `valorank-register`: One-shot slash command registration
//!
//! ## Architecture
//!
//! ```text
//! Discord → Web Server → signature check → dispatch → ranking API → reply
//! ```

pub mod commands;
pub mod config;
pub mod interaction;
pub mod rank;
pub mod util;
pub mod web;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use commands::{all_commands, CommandRegistry};
pub use config::Config;
pub use rank::{RankClient, RiotId};
pub use web::{router, AppState};
