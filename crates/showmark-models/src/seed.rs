use crate::platform::Platform;
use crate::show::{ShowId, ShowRecord};
use crate::status::WatchStatus;

/// Example list used when nothing valid has been stored yet
pub fn default_shows() -> Vec<ShowRecord> {
    vec![
        ShowRecord::new(ShowId(1), "The Expanse", Platform::PrimeVideo, WatchStatus::Watching),
        ShowRecord::new(ShowId(2), "Breaking Bad", Platform::Netflix, WatchStatus::Watched),
        ShowRecord::new(ShowId(3), "Severance", Platform::AppleTvPlus, WatchStatus::ToWatch),
    ]
}
