use chrono::{DateTime, Utc};
use showmark_models::{ShowId, ShowRecord};

/// Issues ids from the wall clock in milliseconds, bumped past the last issued
/// id so two adds inside the same millisecond still get distinct ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last_issued: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator that will never hand out an id already present in `shows`
    pub fn seeded_from(shows: &[ShowRecord]) -> Self {
        let mut generator = Self::new();
        for show in shows {
            generator.observe(show.id);
        }
        generator
    }

    pub fn observe(&mut self, id: ShowId) {
        self.last_issued = self.last_issued.max(id.0);
    }

    /// `None` once `u64::MAX` has been issued or observed
    pub fn next_id(&mut self) -> Option<ShowId> {
        self.next_id_at(Utc::now())
    }

    pub fn next_id_at(&mut self, now: DateTime<Utc>) -> Option<ShowId> {
        // Clocks before the epoch count as zero; the bump below still applies
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        // Never reuse or go below an id already handed out or loaded, even
        // when the clock has not moved on or went backwards
        let id = millis.max(self.last_issued.checked_add(1)?);
        self.last_issued = id;
        Some(ShowId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use showmark_models::default_shows;

    #[test]
    fn test_ids_follow_clock() {
        let mut generator = IdGenerator::new();
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(generator.next_id_at(now), Some(ShowId(1_700_000_000_000)));
    }

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let mut generator = IdGenerator::new();
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let first = generator.next_id_at(now).unwrap();
        let second = generator.next_id_at(now).unwrap();
        assert_eq!(second, ShowId(first.0 + 1));
    }

    #[test]
    fn test_clock_going_backwards_stays_monotonic() {
        let mut generator = IdGenerator::new();
        let later = Utc.timestamp_millis_opt(1_700_000_005_000).unwrap();
        let earlier = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let first = generator.next_id_at(later).unwrap();
        let second = generator.next_id_at(earlier).unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_seeded_generator_skips_existing_ids() {
        let mut generator = IdGenerator::seeded_from(&default_shows());
        let before_epoch = Utc.timestamp_millis_opt(0).unwrap();
        assert_eq!(generator.next_id_at(before_epoch), Some(ShowId(4)));
    }

    #[test]
    fn test_no_id_after_largest() {
        let mut generator = IdGenerator::new();
        generator.observe(ShowId(u64::MAX));
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(generator.next_id_at(now), None);
        assert_eq!(generator.next_id_at(now), None);

        let mut generator = IdGenerator::new();
        generator.observe(ShowId(u64::MAX - 1));
        assert_eq!(generator.next_id_at(now), Some(ShowId(u64::MAX)));
        assert_eq!(generator.next_id_at(now), None);
    }
}
