//! Loading and saving the bookmark list under its storage slot.
//!
//! Loading never fails. A missing, unreadable or non-array value falls back to
//! the seed list; inside an array each record is decoded on its own, so one bad
//! entry never costs the rest of the list. Saving overwrites the whole slot.

use serde_json::Value;
use showmark_models::{default_shows, ShowRecord, WatchStatus};
use tracing::{debug, info, warn};

use crate::error::{PersistedDataError, StoreError};
use crate::storage::KeyValueStorage;

/// Slot the bookmark list lives under
pub const STORAGE_KEY: &str = "tvBookmarks";

/// Where a loaded list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Nothing stored yet, seed list
    Missing,
    /// Stored list, every record decoded as-is
    Stored,
    /// Stored list with some records normalized or skipped
    Repaired { normalized: usize, dropped: usize },
    /// Stored value could not be read or is not a list, seed list
    Unusable,
}

impl LoadSource {
    /// Whether writing the loaded list back loses nothing that is currently stored
    pub fn safe_to_write_back(&self) -> bool {
        matches!(self, LoadSource::Missing | LoadSource::Stored)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedBookmarks {
    pub shows: Vec<ShowRecord>,
    pub source: LoadSource,
}

/// Result of decoding a stored array
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBookmarks {
    pub shows: Vec<ShowRecord>,
    /// Records kept after their status was mapped onto a known one
    pub normalized: usize,
    /// Records skipped because they could not be decoded at all
    pub dropped: usize,
}

enum RecordDecode {
    Valid(ShowRecord),
    Normalized(ShowRecord),
    Invalid(serde_json::Error),
}

/// Read the stored list, or the seed list when nothing usable is stored
pub fn initialize<S: KeyValueStorage + ?Sized>(storage: &S) -> Vec<ShowRecord> {
    load(storage).shows
}

/// `initialize`, also reporting how the list was obtained
pub fn load<S: KeyValueStorage + ?Sized>(storage: &S) -> LoadedBookmarks {
    let stored = match storage.get(STORAGE_KEY) {
        Ok(Some(value)) if !value.trim().is_empty() => value,
        Ok(_) => {
            info!("No stored bookmarks under {:?}, using default shows", STORAGE_KEY);
            return LoadedBookmarks {
                shows: default_shows(),
                source: LoadSource::Missing,
            };
        }
        Err(e) => {
            warn!("Failed to read stored bookmarks: {}. Using default shows.", e);
            return LoadedBookmarks {
                shows: default_shows(),
                source: LoadSource::Unusable,
            };
        }
    };

    match parse_bookmarks(&stored) {
        Ok(parsed) if parsed.normalized == 0 && parsed.dropped == 0 => {
            debug!("Loaded {} bookmarks from {:?}", parsed.shows.len(), STORAGE_KEY);
            LoadedBookmarks {
                shows: parsed.shows,
                source: LoadSource::Stored,
            }
        }
        Ok(parsed) => {
            warn!(
                "Loaded {} bookmarks from {:?} ({} with an unknown status set to To Watch, {} unreadable skipped)",
                parsed.shows.len(),
                STORAGE_KEY,
                parsed.normalized,
                parsed.dropped
            );
            LoadedBookmarks {
                shows: parsed.shows,
                source: LoadSource::Repaired {
                    normalized: parsed.normalized,
                    dropped: parsed.dropped,
                },
            }
        }
        Err(e) => {
            warn!("Stored bookmarks are unusable ({}). Using default shows.", e);
            LoadedBookmarks {
                shows: default_shows(),
                source: LoadSource::Unusable,
            }
        }
    }
}

/// Decode a stored value into a bookmark list, keeping order and duplicates as-is.
///
/// Only a value that is not JSON, or not a JSON array, is an error.
pub fn parse_bookmarks(raw: &str) -> Result<ParsedBookmarks, PersistedDataError> {
    let value: Value = serde_json::from_str(raw).map_err(PersistedDataError::Unparseable)?;

    let items = match value {
        Value::Array(items) => items,
        other => return Err(PersistedDataError::NotASequence(json_kind(&other))),
    };

    let mut parsed = ParsedBookmarks {
        shows: Vec::with_capacity(items.len()),
        normalized: 0,
        dropped: 0,
    };

    for (index, item) in items.into_iter().enumerate() {
        match decode_record(item) {
            RecordDecode::Valid(show) => parsed.shows.push(show),
            RecordDecode::Normalized(show) => {
                debug!("Stored bookmark #{} ({}) had an unknown status, using {}", index, show.id, show.status);
                parsed.normalized += 1;
                parsed.shows.push(show);
            }
            RecordDecode::Invalid(e) => {
                warn!("Skipping stored bookmark #{}: {}", index, e);
                parsed.dropped += 1;
            }
        }
    }

    Ok(parsed)
}

fn decode_record(item: Value) -> RecordDecode {
    let error = match serde_json::from_value::<ShowRecord>(item.clone()) {
        Ok(show) => return RecordDecode::Valid(show),
        Err(e) => e,
    };

    let Value::Object(mut fields) = item else {
        return RecordDecode::Invalid(error);
    };

    // Loose spellings ("watched", "to-watch") map to their status; anything
    // else counts as To Watch, the same bucket the stats put it in.
    let status = fields
        .get("status")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<WatchStatus>().ok())
        .unwrap_or_default();
    fields.insert("status".to_string(), Value::String(status.label().to_string()));

    match serde_json::from_value::<ShowRecord>(Value::Object(fields)) {
        Ok(show) => RecordDecode::Normalized(show),
        Err(_) => RecordDecode::Invalid(error),
    }
}

/// Overwrite the slot with the full list
pub fn persist<S: KeyValueStorage + ?Sized>(storage: &mut S, shows: &[ShowRecord]) -> Result<(), StoreError> {
    let serialized = serde_json::to_string(shows)?;
    storage.set(STORAGE_KEY, &serialized)?;
    debug!("Saved {} bookmarks to {:?}", shows.len(), STORAGE_KEY);
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
