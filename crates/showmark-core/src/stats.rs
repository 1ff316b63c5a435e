use serde::Serialize;
use showmark_models::{ShowRecord, WatchStatus};

/// Counts shown above the bookmark list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkStats {
    pub total: usize,
    pub watched: usize,
    pub watching: usize,
    pub to_watch: usize,
}

/// `to_watch` is whatever is neither watched nor watching.
pub fn compute_stats(shows: &[ShowRecord]) -> BookmarkStats {
    let total = shows.len();
    let watched = shows.iter().filter(|show| show.status == WatchStatus::Watched).count();
    let watching = shows.iter().filter(|show| show.status == WatchStatus::Watching).count();

    BookmarkStats {
        total,
        watched,
        watching,
        to_watch: total - watched - watching,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showmark_models::{default_shows, Platform, ShowId};

    #[test]
    fn test_stats_of_empty_list() {
        assert_eq!(
            compute_stats(&[]),
            BookmarkStats { total: 0, watched: 0, watching: 0, to_watch: 0 }
        );
    }

    #[test]
    fn test_stats_one_of_each() {
        let stats = compute_stats(&default_shows());
        assert_eq!(stats, BookmarkStats { total: 3, watched: 1, watching: 1, to_watch: 1 });
    }

    #[test]
    fn test_stats_is_pure() {
        let shows = vec![
            ShowRecord::new(ShowId(1), "A", Platform::Netflix, WatchStatus::Watched),
            ShowRecord::new(ShowId(2), "B", Platform::Netflix, WatchStatus::Watched),
            ShowRecord::new(ShowId(3), "C", Platform::Netflix, WatchStatus::ToWatch),
        ];
        let first = compute_stats(&shows);
        let second = compute_stats(&shows);
        assert_eq!(first, second);
        assert_eq!(first, BookmarkStats { total: 3, watched: 2, watching: 0, to_watch: 1 });
    }

    #[test]
    fn test_stats_json_field_names() {
        let json = serde_json::to_value(compute_stats(&default_shows())).unwrap();
        assert_eq!(json, serde_json::json!({"total": 3, "watched": 1, "watching": 1, "toWatch": 1}));
    }
}
