//! Aggregate statistics over the entry collection.

use crate::entry::{EntryKind, GardenEntry};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

/// Snapshot of activity totals, computed on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_entries: usize,
    /// Entries created in the last 30 days (by creation timestamp).
    pub entries_last_30_days: usize,
    pub entries_last_7_days: usize,
    pub fertilizer_count: usize,
    pub seeding_count: usize,
    pub mowing_count: usize,
    pub watering_count: usize,
    pub maintenance_count: usize,
    /// Most recent fertilizing activity date, if any.
    pub last_fertilized: Option<NaiveDate>,
    pub days_since_fertilized: Option<i64>,
    pub last_mowed: Option<NaiveDate>,
    pub days_since_mowed: Option<i64>,
}

impl Statistics {
    pub fn compute(entries: &[GardenEntry], now: DateTime<Utc>) -> Self {
        let mut stats = Statistics {
            total_entries: entries.len(),
            ..Statistics::default()
        };

        let cutoff_30 = now - Duration::days(30);
        let cutoff_7 = now - Duration::days(7);
        let today = now.date_naive();

        for entry in entries {
            if entry.timestamp >= cutoff_30 {
                stats.entries_last_30_days += 1;
            }
            if entry.timestamp >= cutoff_7 {
                stats.entries_last_7_days += 1;
            }

            match entry.kind {
                EntryKind::Fertilizer => stats.fertilizer_count += 1,
                EntryKind::Seeding => stats.seeding_count += 1,
                EntryKind::Mowing => stats.mowing_count += 1,
                EntryKind::Watering => stats.watering_count += 1,
                EntryKind::Maintenance => stats.maintenance_count += 1,
            }

            // Latest by activity date, not by creation time.
            if entry.kind == EntryKind::Fertilizer
                && stats.last_fertilized.is_none_or(|d| entry.date > d)
            {
                stats.last_fertilized = Some(entry.date);
            }
            if entry.kind == EntryKind::Mowing && stats.last_mowed.is_none_or(|d| entry.date > d) {
                stats.last_mowed = Some(entry.date);
            }
        }

        stats.days_since_fertilized = stats.last_fertilized.map(|d| (today - d).num_days());
        stats.days_since_mowed = stats.last_mowed.map(|d| (today - d).num_days());
        stats
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn entry(kind: EntryKind, date: &str, timestamp: &str) -> GardenEntry {
        GardenEntry {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            date: date.parse().unwrap(),
            timestamp: timestamp.parse().unwrap(),
            plant: "Rasen".to_string(),
            amount: None,
            seeds: None,
            area: None,
            fertilizer: None,
            variety: None,
            notes: None,
            mowing_hours: None,
            blade_change: None,
            cutting_height: None,
            reminder: None,
        }
    }

    #[test]
    fn test_empty_collection_yields_zeroes() {
        let stats = Statistics::compute(&[], Utc::now());
        assert_eq!(stats.total_entries, 0);
        assert!(stats.last_fertilized.is_none());
        assert!(stats.days_since_mowed.is_none());
    }

    #[test]
    fn test_counts_and_recency_windows() {
        let now: DateTime<Utc> = "2026-06-15T12:00:00Z".parse().unwrap();
        let entries = vec![
            entry(EntryKind::Mowing, "2026-06-14", "2026-06-14T09:00:00Z"),
            entry(EntryKind::Fertilizer, "2026-06-01", "2026-06-01T09:00:00Z"),
            entry(EntryKind::Watering, "2026-04-01", "2026-04-01T09:00:00Z"),
        ];

        let stats = Statistics::compute(&entries, now);
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.entries_last_7_days, 1);
        assert_eq!(stats.entries_last_30_days, 2);
        assert_eq!(stats.mowing_count, 1);
        assert_eq!(stats.fertilizer_count, 1);
        assert_eq!(stats.watering_count, 1);
        assert_eq!(stats.seeding_count, 0);
    }

    #[test]
    fn test_days_since_uses_activity_date() {
        let now: DateTime<Utc> = "2026-06-15T12:00:00Z".parse().unwrap();
        let entries = vec![
            // Logged later, but the activity itself was earlier.
            entry(EntryKind::Fertilizer, "2026-05-20", "2026-06-10T09:00:00Z"),
            entry(EntryKind::Fertilizer, "2026-06-05", "2026-06-05T09:00:00Z"),
        ];

        let stats = Statistics::compute(&entries, now);
        assert_eq!(stats.last_fertilized, Some("2026-06-05".parse().unwrap()));
        assert_eq!(stats.days_since_fertilized, Some(10));
    }
}
