//! Pure list transitions. Each takes the current list and returns the next one;
//! persisting the result is the caller's job.

use showmark_models::{NewShow, ParseError, ShowId, ShowRecord, WatchStatus};

/// Prepend a new record built from `draft`.
///
/// Returns `None` when the title is blank after trimming.
pub fn add_show(shows: &[ShowRecord], draft: &NewShow, id: ShowId) -> Option<Vec<ShowRecord>> {
    let title = draft.trimmed_title()?;

    let mut next = Vec::with_capacity(shows.len() + 1);
    next.push(ShowRecord::new(id, title, draft.platform.clone(), draft.status));
    next.extend_from_slice(shows);
    Some(next)
}

/// Replace the status of the record with `id`, leaving order and other fields alone.
/// Any status may follow any other.
pub fn update_status(shows: &[ShowRecord], id: ShowId, next_status: WatchStatus) -> Vec<ShowRecord> {
    shows
        .iter()
        .map(|show| {
            if show.id == id {
                show.with_status(next_status)
            } else {
                show.clone()
            }
        })
        .collect()
}

/// `update_status` for untyped input; anything but the three statuses is rejected
pub fn update_status_str(shows: &[ShowRecord], id: ShowId, next_status: &str) -> Result<Vec<ShowRecord>, ParseError> {
    let status: WatchStatus = next_status.parse()?;
    Ok(update_status(shows, id, status))
}

pub fn remove_show(shows: &[ShowRecord], id: ShowId) -> Vec<ShowRecord> {
    shows.iter().filter(|show| show.id != id).cloned().collect()
}

pub fn filter_by_status(shows: &[ShowRecord], status: WatchStatus) -> Vec<&ShowRecord> {
    shows.iter().filter(|show| show.status == status).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use showmark_models::{default_shows, Platform};

    fn draft(title: &str) -> NewShow {
        NewShow::new(title, Platform::Netflix, WatchStatus::ToWatch)
    }

    #[test]
    fn test_add_show_rejects_blank_title() {
        let shows = default_shows();
        assert_eq!(add_show(&shows, &draft(" "), ShowId(100)), None);
        assert_eq!(add_show(&shows, &draft(""), ShowId(100)), None);
        assert_eq!(add_show(&shows, &draft("\n\t"), ShowId(100)), None);
    }

    #[test]
    fn test_add_show_prepends_trimmed_record() {
        let shows = default_shows();
        let next = add_show(&shows, &draft("  Arcane  "), ShowId(100)).unwrap();

        assert_eq!(next.len(), shows.len() + 1);
        assert_eq!(next[0], ShowRecord::new(ShowId(100), "Arcane", Platform::Netflix, WatchStatus::ToWatch));
        assert_eq!(&next[1..], &shows[..]);
    }

    #[test]
    fn test_add_show_to_empty_list() {
        let next = add_show(&[], &draft("Arcane"), ShowId(5)).unwrap();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].title, "Arcane");
    }

    #[test]
    fn test_update_status_changes_only_target() {
        let shows = default_shows();
        let next = update_status(&shows, ShowId(3), WatchStatus::Watched);

        assert_eq!(next.len(), shows.len());
        assert_eq!(next[2].status, WatchStatus::Watched);
        assert_eq!(next[2].title, shows[2].title);
        assert_eq!(next[2].platform, shows[2].platform);
        assert_eq!(next[2].id, shows[2].id);
        assert_eq!(&next[..2], &shows[..2]);
    }

    #[test]
    fn test_update_status_unknown_id_is_noop() {
        let shows = default_shows();
        assert_eq!(update_status(&shows, ShowId(42), WatchStatus::Watched), shows);
    }

    #[test]
    fn test_update_status_allows_any_transition() {
        let shows = default_shows();
        // Watched straight back to Watching, skipping To Watch
        let next = update_status(&shows, ShowId(2), WatchStatus::Watching);
        assert_eq!(next[1].status, WatchStatus::Watching);
    }

    #[test]
    fn test_update_status_str() {
        let shows = default_shows();
        let next = update_status_str(&shows, ShowId(1), "Watched").unwrap();
        assert_eq!(next[0].status, WatchStatus::Watched);

        let err = update_status_str(&shows, ShowId(1), "Dropped").unwrap_err();
        assert_eq!(err, ParseError::InvalidStatus("Dropped".to_string()));
    }

    #[test]
    fn test_remove_show() {
        let shows = default_shows();
        let next = remove_show(&shows, ShowId(2));
        assert_eq!(next.len(), 2);
        assert!(next.iter().all(|show| show.id != ShowId(2)));
        assert_eq!(next[0].id, ShowId(1));
        assert_eq!(next[1].id, ShowId(3));
    }

    #[test]
    fn test_remove_show_unknown_id_is_noop() {
        let shows = default_shows();
        assert_eq!(remove_show(&shows, ShowId(99)), shows);
    }

    #[test]
    fn test_filter_by_status() {
        let shows = default_shows();
        let watched = filter_by_status(&shows, WatchStatus::Watched);
        assert_eq!(watched.len(), 1);
        assert_eq!(watched[0].title, "Breaking Bad");
    }
}
