use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Watch progress of a bookmarked show.
///
/// Serialized with the display labels ("To Watch", "Watching", "Watched") so the
/// persisted list stays readable by anything that wrote the old format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum WatchStatus {
    /// Bookmarked but not started
    #[default]
    #[serde(rename = "To Watch", alias = "ToWatch")]
    ToWatch,
    Watching,
    Watched,
}

impl WatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WatchStatus::ToWatch => "To Watch",
            WatchStatus::Watching => "Watching",
            WatchStatus::Watched => "Watched",
        }
    }

    /// Status offered by the one-click toggle: anything unfinished goes to
    /// Watched, a finished show goes back to the queue.
    pub fn toggled(&self) -> WatchStatus {
        match self {
            WatchStatus::Watched => WatchStatus::ToWatch,
            _ => WatchStatus::Watched,
        }
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WatchStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "towatch" => Ok(WatchStatus::ToWatch),
            "watching" => Ok(WatchStatus::Watching),
            "watched" => Ok(WatchStatus::Watched),
            _ => Err(ParseError::InvalidStatus(s.to_string())),
        }
    }
}
