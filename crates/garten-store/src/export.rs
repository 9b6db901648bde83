//! Backup export and import.
//!
//! The export document is plain JSON so users can inspect and move it
//! between installations. Import is all-or-nothing: invalid input leaves
//! the store untouched.

use crate::entry::GardenEntry;
use crate::settings::UserSettings;
use crate::store::GardenStore;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use garten_core::ImportError;
use serde::{Deserialize, Serialize};

pub const EXPORT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub entries: Vec<GardenEntry>,
    pub settings: UserSettings,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

/// Outcome of a successful import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

impl ImportSummary {
    /// User-facing confirmation message.
    pub fn message(&self) -> String {
        format!("{} Einträge erfolgreich importiert", self.imported)
    }
}

impl GardenStore {
    /// Snapshot the store into an export document.
    pub fn export_document(&self, now: DateTime<Utc>) -> ExportDocument {
        ExportDocument {
            entries: self.entries(),
            settings: self.settings(),
            export_date: now,
            version: EXPORT_VERSION.to_string(),
        }
    }

    /// Serialize the export document as pretty JSON.
    pub fn export_json(&self, now: DateTime<Utc>) -> String {
        let document = self.export_document(now);
        serde_json::to_string_pretty(&document).unwrap_or_else(|e| {
            tracing::error!("Failed to serialize export document: {}", e);
            String::new()
        })
    }

    /// Import a previously exported document.
    ///
    /// Entries that fail to parse are skipped; the import is rejected only
    /// when the document has no entry list at all or no entry survives the
    /// filter. An entry needs id, kind, date and plant; a missing timestamp
    /// is backfilled from the entry date. Settings are replaced when the
    /// document carries a valid settings object. On rejection the store is
    /// not modified.
    pub fn import_json(&self, json: &str) -> Result<ImportSummary, ImportError> {
        let document: serde_json::Value =
            serde_json::from_str(json).map_err(|_| ImportError::InvalidFormat)?;

        let raw_entries = document
            .get("entries")
            .and_then(|v| v.as_array())
            .ok_or(ImportError::InvalidFormat)?;

        let mut entries = Vec::with_capacity(raw_entries.len());
        let mut skipped = 0usize;
        for raw in raw_entries {
            match parse_import_entry(raw) {
                Some(entry) => entries.push(entry),
                None => {
                    tracing::debug!("Skipping invalid entry on import");
                    skipped += 1;
                }
            }
        }

        if entries.is_empty() {
            return Err(ImportError::NoValidEntries);
        }

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let settings = document
            .get("settings")
            .and_then(|v| serde_json::from_value::<UserSettings>(v.clone()).ok());

        let imported = entries.len();
        self.replace_all(&entries, settings.as_ref());
        tracing::info!("Imported {} entries ({} skipped)", imported, skipped);

        Ok(ImportSummary { imported, skipped })
    }
}

/// Parse one raw import entry. Hand-edited backups and exports from older
/// app versions carry no `timestamp`; those entries get their activity date
/// at midnight UTC instead of being dropped.
fn parse_import_entry(raw: &serde_json::Value) -> Option<GardenEntry> {
    if raw.get("timestamp").is_some() {
        return serde_json::from_value(raw.clone()).ok();
    }

    let mut patched = raw.clone();
    let object = patched.as_object_mut()?;
    let date: NaiveDate = object.get("date")?.as_str()?.parse().ok()?;
    let timestamp = date.and_time(NaiveTime::MIN).and_utc();
    object.insert(
        "timestamp".to_string(),
        serde_json::to_value(timestamp).ok()?,
    );
    serde_json::from_value(patched).ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use crate::entry::{EntryDraft, EntryKind};
    use crate::kv::JsonStore;
    use garten_core::FixedClock;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn store_at(dir: &std::path::Path) -> GardenStore {
        let now: DateTime<Utc> = "2026-06-01T08:00:00Z".parse().unwrap();
        GardenStore::new(JsonStore::new(dir), Arc::new(FixedClock::at(now)))
    }

    #[test]
    fn test_import_rejects_non_object_input() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());

        let err = store.import_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ImportError::InvalidFormat));
    }

    #[test]
    fn test_import_rejects_missing_entry_list() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());

        let err = store.import_json(r#"{"entries": "nope"}"#).unwrap_err();
        assert!(matches!(err, ImportError::InvalidFormat));
    }

    #[test]
    fn test_import_filters_invalid_entries() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());

        let json = r#"{
            "entries": [
                {"id": "a", "type": "mowing", "date": "2026-05-01",
                 "timestamp": "2026-05-01T10:00:00Z", "plant": "Rasen"},
                {"id": "b", "type": "watering", "date": "2026-05-02",
                 "timestamp": "2026-05-02T10:00:00Z", "plant": "Tomaten"},
                {"id": "c", "type": "watering", "date": "2026-05-03",
                 "timestamp": "2026-05-03T10:00:00Z", "plant": "Salat"},
                {"id": "d", "type": "not-a-kind", "date": "2026-05-04",
                 "timestamp": "2026-05-04T10:00:00Z", "plant": "Rasen"},
                {"id": "e", "type": "mowing", "date": "2026-05-05"}
            ]
        }"#;

        let summary = store.import_json(json).unwrap();
        assert_eq!(summary.imported, 3);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.message(), "3 Einträge erfolgreich importiert");
        assert_eq!(store.entries().len(), 3);
    }

    #[test]
    fn test_import_backfills_missing_timestamp_from_date() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());

        let json = r#"{
            "entries": [
                {"id": "a", "type": "mowing", "date": "2026-05-01", "plant": "Rasen"}
            ]
        }"#;

        let summary = store.import_json(json).unwrap();
        assert_eq!(summary.imported, 1);
        assert_eq!(summary.skipped, 0);

        let entries = store.entries();
        assert_eq!(entries[0].id, "a");
        assert_eq!(
            entries[0].timestamp,
            "2026-05-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn test_import_with_no_valid_entries_leaves_store_untouched() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());

        let existing = store
            .create_entry(EntryDraft {
                kind: EntryKind::Mowing,
                date: "2026-05-01".parse().unwrap(),
                plant: "Rasen".to_string(),
                ..EntryDraft::default()
            })
            .unwrap();

        let err = store
            .import_json(r#"{"entries": [{"id": "x"}]}"#)
            .unwrap_err();
        assert!(matches!(err, ImportError::NoValidEntries));
        assert_eq!(store.entries(), vec![existing]);
    }

    #[test]
    fn test_export_import_round_trip() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());

        store
            .create_entry(EntryDraft {
                kind: EntryKind::Fertilizer,
                date: "2026-03-20".parse().unwrap(),
                plant: "Rasen".to_string(),
                amount: Some(1250.0),
                area: Some(50.0),
                fertilizer: Some("ProNatura Frühjahr".to_string()),
                ..EntryDraft::default()
            })
            .unwrap();
        store.update_settings(crate::settings::SettingsUpdate {
            lawn_area: Some(50.0),
            ..Default::default()
        });

        let json = store.export_json("2026-06-01T09:00:00Z".parse().unwrap());
        let entries_before = store.entries();
        let settings_before = store.settings();

        let other_dir = tempdir().unwrap();
        let other = store_at(other_dir.path());
        let summary = other.import_json(&json).unwrap();

        assert_eq!(summary.imported, 1);
        assert_eq!(other.entries(), entries_before);
        assert_eq!(other.settings(), settings_before);
    }

    #[test]
    fn test_export_document_carries_version() {
        let dir = tempdir().unwrap();
        let store = store_at(dir.path());

        let document = store.export_document("2026-06-01T09:00:00Z".parse().unwrap());
        assert_eq!(document.version, EXPORT_VERSION);
        assert!(document.entries.is_empty());
    }
}
