use serde::{Deserialize, Serialize};
use std::fmt;

use crate::platform::Platform;
use crate::status::WatchStatus;

/// Identifier of a bookmarked show, persisted as a plain JSON number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowId(pub u64);

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowRecord {
    pub id: ShowId,
    pub title: String,
    pub platform: Platform,
    pub status: WatchStatus,
}

impl ShowRecord {
    pub fn new(id: ShowId, title: impl Into<String>, platform: Platform, status: WatchStatus) -> Self {
        Self {
            id,
            title: title.into(),
            platform,
            status,
        }
    }

    /// Copy of this record with only the status replaced
    pub fn with_status(&self, status: WatchStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Input for a new bookmark, before it has been validated and given an id
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewShow {
    pub title: String,
    pub platform: Platform,
    pub status: WatchStatus,
}

impl NewShow {
    pub fn new(title: impl Into<String>, platform: Platform, status: WatchStatus) -> Self {
        Self {
            title: title.into(),
            platform,
            status,
        }
    }

    /// Trimmed title, or `None` when nothing but whitespace was entered
    pub fn trimmed_title(&self) -> Option<&str> {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_format() {
        let record = ShowRecord::new(ShowId(9), "X", Platform::Netflix, WatchStatus::Watched);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 9, "title": "X", "platform": "Netflix", "status": "Watched"})
        );
    }

    #[test]
    fn test_with_status_keeps_other_fields() {
        let record = ShowRecord::new(ShowId(4), "Dark", Platform::Netflix, WatchStatus::ToWatch);
        let updated = record.with_status(WatchStatus::Watching);
        assert_eq!(updated.id, record.id);
        assert_eq!(updated.title, "Dark");
        assert_eq!(updated.platform, Platform::Netflix);
        assert_eq!(updated.status, WatchStatus::Watching);
    }

    #[test]
    fn test_trimmed_title() {
        assert_eq!(NewShow::new("  Arcane ", Platform::Netflix, WatchStatus::ToWatch).trimmed_title(), Some("Arcane"));
        assert_eq!(NewShow::new(" \t ", Platform::Netflix, WatchStatus::ToWatch).trimmed_title(), None);
        assert_eq!(NewShow::default().trimmed_title(), None);
    }
}
