pub mod error;
pub mod id;
pub mod persistence;
pub mod stats;
pub mod storage;
pub mod store;
pub mod transitions;

pub use error::{PersistedDataError, StorageError, StoreError};
pub use id::IdGenerator;
pub use persistence::{initialize, load, parse_bookmarks, persist, LoadSource, LoadedBookmarks, ParsedBookmarks, STORAGE_KEY};
pub use stats::{compute_stats, BookmarkStats};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::BookmarkStore;
pub use transitions::{add_show, filter_by_status, remove_show, update_status, update_status_str};
