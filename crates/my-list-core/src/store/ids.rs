//! Item Id Generation
//!
//! Ids are decimal millisecond timestamps, bumped by one whenever the clock
//! has not moved past the last issued value. Once the numeric range is used
//! up, ids become `{last}-{n}` with a growing suffix.

use chrono::{DateTime, Utc};

use crate::domain::{Item, ItemId};

#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator {
    last: i64,
    overflow: u64,
}

impl IdGenerator {
    /// Generator that never reissues a numeric id already in `items`
    pub fn seeded(items: &[Item]) -> Self {
        let last = items
            .iter()
            .filter_map(|item| item.id.as_str().parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self { last, overflow: 0 }
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> ItemId {
        let candidate = now.timestamp_millis();
        if candidate > self.last {
            self.last = candidate;
        } else if let Some(bumped) = self.last.checked_add(1) {
            self.last = bumped;
        } else {
            self.overflow += 1;
            return ItemId::new(format!("{}-{}", self.last, self.overflow));
        }
        ItemId::new(self.last.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_same_tick_is_bumped() {
        let now = Utc.timestamp_millis_opt(1_000).unwrap();
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next(now).as_str(), "1000");
        assert_eq!(ids.next(now).as_str(), "1001");
        assert_eq!(ids.next(now).as_str(), "1002");
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut ids = IdGenerator::default();
        ids.next(Utc.timestamp_millis_opt(5_000).unwrap());
        let id = ids.next(Utc.timestamp_millis_opt(4_000).unwrap());
        assert_eq!(id.as_str(), "5001");
    }

    #[test]
    fn test_exhausted_range_uses_suffix() {
        let created = Utc.timestamp_millis_opt(0).unwrap();
        let items = vec![Item::new(ItemId::new(i64::MAX.to_string()), "a".to_string(), created)];
        let mut ids = IdGenerator::seeded(&items);
        let now = Utc.timestamp_millis_opt(10).unwrap();
        assert_eq!(ids.next(now).as_str(), "9223372036854775807-1");
        assert_eq!(ids.next(now).as_str(), "9223372036854775807-2");
    }

    #[test]
    fn test_seeded_skips_non_numeric_ids() {
        let created = Utc.timestamp_millis_opt(0).unwrap();
        let items = vec![
            Item::new(ItemId::from("abc"), "a".to_string(), created),
            Item::new(ItemId::from("9000"), "b".to_string(), created),
        ];
        let mut ids = IdGenerator::seeded(&items);
        assert_eq!(ids.next(Utc.timestamp_millis_opt(10).unwrap()).as_str(), "9001");
    }
}
