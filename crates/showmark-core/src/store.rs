use showmark_models::{default_shows, NewShow, ShowId, ShowRecord, WatchStatus};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::id::IdGenerator;
use crate::persistence::{load, persist, LoadSource};
use crate::stats::{compute_stats, BookmarkStats};
use crate::storage::{FileStorage, KeyValueStorage};
use crate::transitions;

/// Holds the current bookmark list and keeps the storage slot in step with it.
///
/// Every mutation computes the next list, writes it, and only then replaces
/// the in-memory list. A failed write leaves both sides as they were.
pub struct BookmarkStore<S: KeyValueStorage> {
    storage: S,
    shows: Vec<ShowRecord>,
    ids: IdGenerator,
    load_source: LoadSource,
}

impl<S: KeyValueStorage> BookmarkStore<S> {
    /// Load the list (seeding it if needed).
    ///
    /// A freshly seeded or cleanly loaded list is written back once so the slot
    /// holds a valid list from the start of the session. A reseeded or repaired
    /// list is not: the stored value stays as it is until the first change.
    pub fn open(mut storage: S) -> Result<Self, StoreError> {
        let loaded = load(&storage);
        if loaded.source.safe_to_write_back() {
            persist(&mut storage, &loaded.shows)?;
        } else {
            warn!("Stored bookmarks left untouched until the next change ({:?})", loaded.source);
        }

        let ids = IdGenerator::seeded_from(&loaded.shows);
        info!("Opened bookmark store with {} shows", loaded.shows.len());
        Ok(Self {
            storage,
            shows: loaded.shows,
            ids,
            load_source: loaded.source,
        })
    }

    pub fn shows(&self) -> &[ShowRecord] {
        &self.shows
    }

    /// How the list was obtained when the store was opened
    pub fn load_source(&self) -> LoadSource {
        self.load_source
    }

    pub fn get(&self, id: ShowId) -> Option<&ShowRecord> {
        self.shows.iter().find(|show| show.id == id)
    }

    pub fn stats(&self) -> BookmarkStats {
        compute_stats(&self.shows)
    }

    /// Add a show at the top of the list.
    ///
    /// Returns `Ok(None)` without touching storage when the title is blank.
    pub fn add_show(&mut self, draft: &NewShow) -> Result<Option<ShowRecord>, StoreError> {
        let id = self.ids.next_id().ok_or(StoreError::IdsExhausted)?;
        let Some(next) = transitions::add_show(&self.shows, draft, id) else {
            debug!("Ignoring show with blank title");
            return Ok(None);
        };
        self.commit(next)?;

        let added = self.shows.first().cloned();
        if let Some(show) = &added {
            info!("Added {:?} ({}) as {}", show.title, show.platform, show.status);
        }
        Ok(added)
    }

    /// Returns whether a show with `id` existed. The list is saved either way.
    pub fn update_status(&mut self, id: ShowId, next_status: WatchStatus) -> Result<bool, StoreError> {
        let found = self.get(id).is_some();
        let next = transitions::update_status(&self.shows, id, next_status);
        self.commit(next)?;

        if found {
            info!("Marked show {} as {}", id, next_status);
        } else {
            debug!("No show with id {} to update", id);
        }
        Ok(found)
    }

    /// Returns whether a show with `id` existed. The list is saved either way.
    pub fn remove_show(&mut self, id: ShowId) -> Result<bool, StoreError> {
        let found = self.get(id).is_some();
        let next = transitions::remove_show(&self.shows, id);
        self.commit(next)?;

        if found {
            info!("Removed show {}", id);
        } else {
            debug!("No show with id {} to remove", id);
        }
        Ok(found)
    }

    /// Replace the whole list with the default shows
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.commit(default_shows())?;
        info!("Reset bookmarks to default shows");
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn commit(&mut self, next: Vec<ShowRecord>) -> Result<(), StoreError> {
        // Write first: if storage rejects the list, memory keeps the old one
        // and the two never disagree
        if let Err(e) = persist(&mut self.storage, &next) {
            warn!("Bookmark change not saved: {}", e);
            return Err(e);
        }
        self.shows = next;
        Ok(())
    }
}

impl BookmarkStore<FileStorage> {
    /// Store backed by JSON files in `data_dir`
    pub fn open_in(data_dir: &Path) -> Result<Self, StoreError> {
        Self::open(FileStorage::new(data_dir))
    }
}
