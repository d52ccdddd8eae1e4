//! Riot ID parsing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A `name#tag` pair identifying a Riot account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotId {
    pub name: String,
    pub tag: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected name#tag, got {segments} non-empty segment(s)")]
pub struct RiotIdError {
    pub segments: usize,
}

impl FromStr for RiotId {
    type Err = RiotIdError;

    /// All whitespace is removed before splitting on `#`; empty segments are dropped.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let segments: Vec<&str> = compact.split('#').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [name, tag] => Ok(RiotId {
                name: (*name).to_string(),
                tag: (*tag).to_string(),
            }),
            other => Err(RiotIdError {
                segments: other.len(),
            }),
        }
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.tag)
    }
}
