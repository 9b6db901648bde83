//! Domain operations over the JSON store: entries, settings, weather cache.

use crate::entry::{validate_draft, EntryDraft, EntryKind, EntryUpdate, GardenEntry, ValidationErrors};
use crate::kv::JsonStore;
use crate::settings::{SettingsUpdate, UserSettings};
use crate::stats::Statistics;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use garten_core::Clock;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

const ENTRIES_KEY: &str = "entries";
const SETTINGS_KEY: &str = "settings";
const WEATHER_KEY: &str = "weather";

/// Wrapper recording when a cached value was written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CacheEnvelope<T> {
    cached_at: DateTime<Utc>,
    value: T,
}

/// The application's persistence surface.
///
/// All operations are best-effort: reads fall back to defaults and writes
/// swallow failures, so callers never handle storage errors.
#[derive(Clone)]
pub struct GardenStore {
    kv: JsonStore,
    clock: Arc<dyn Clock>,
}

impl GardenStore {
    pub fn new(kv: JsonStore, clock: Arc<dyn Clock>) -> Self {
        Self { kv, clock }
    }

    // --- entries ---

    /// All entries, newest first.
    pub fn entries(&self) -> Vec<GardenEntry> {
        self.kv.get(ENTRIES_KEY, Vec::new())
    }

    /// Validate a draft and persist it as a new entry.
    pub fn create_entry(&self, draft: EntryDraft) -> Result<GardenEntry, ValidationErrors> {
        let errors = validate_draft(&draft);
        if !errors.is_empty() {
            return Err(errors);
        }

        let entry = GardenEntry {
            id: Uuid::new_v4().to_string(),
            kind: draft.kind,
            date: draft.date,
            timestamp: self.clock.now(),
            plant: draft.plant,
            amount: draft.amount,
            seeds: draft.seeds,
            area: draft.area,
            fertilizer: draft.fertilizer,
            variety: draft.variety,
            notes: draft.notes,
            mowing_hours: draft.mowing_hours,
            blade_change: draft.blade_change,
            cutting_height: draft.cutting_height,
            reminder: draft.reminder,
        };

        let mut entries = self.entries();
        entries.push(entry.clone());
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        self.kv.set(ENTRIES_KEY, &entries);

        tracing::debug!("Created {} entry '{}'", entry.kind.label(), entry.id);
        Ok(entry)
    }

    pub fn get_entry(&self, id: &str) -> Option<GardenEntry> {
        self.entries().into_iter().find(|e| e.id == id)
    }

    /// Apply a partial update; returns the updated entry, or `None` for an
    /// unknown id.
    pub fn update_entry(&self, id: &str, update: EntryUpdate) -> Option<GardenEntry> {
        let mut entries = self.entries();
        let entry = entries.iter_mut().find(|e| e.id == id)?;
        update.apply(entry);
        let updated = entry.clone();
        self.kv.set(ENTRIES_KEY, &entries);
        Some(updated)
    }

    /// Delete by id; `false` when no such entry exists.
    pub fn delete_entry(&self, id: &str) -> bool {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return false;
        }
        self.kv.set(ENTRIES_KEY, &entries);
        true
    }

    pub fn entries_of_kind(&self, kind: EntryKind) -> Vec<GardenEntry> {
        self.entries().into_iter().filter(|e| e.kind == kind).collect()
    }

    /// The `n` most recently created entries.
    pub fn recent_entries(&self, n: usize) -> Vec<GardenEntry> {
        let mut entries = self.entries();
        entries.truncate(n);
        entries
    }

    /// Entries whose activity date falls in `[from, to]`, inclusive.
    pub fn entries_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<GardenEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.date >= from && e.date <= to)
            .collect()
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::compute(&self.entries(), self.clock.now())
    }

    // --- settings ---

    pub fn settings(&self) -> UserSettings {
        self.kv.get(SETTINGS_KEY, UserSettings::default())
    }

    pub fn update_settings(&self, update: SettingsUpdate) -> UserSettings {
        let mut settings = self.settings();
        update.apply(&mut settings);
        self.kv.set(SETTINGS_KEY, &settings);
        settings
    }

    pub(crate) fn replace_all(&self, entries: &[GardenEntry], settings: Option<&UserSettings>) {
        self.kv.set(ENTRIES_KEY, &entries);
        if let Some(settings) = settings {
            self.kv.set(SETTINGS_KEY, settings);
        }
    }

    // --- weather cache ---

    /// Cache `value` under the weather key, stamped with the current time.
    pub fn cache_weather<T: Serialize>(&self, value: &T) {
        let envelope = CacheEnvelope {
            cached_at: self.clock.now(),
            value,
        };
        self.kv.set(WEATHER_KEY, &envelope);
    }

    /// Read the cached weather if it is younger than `ttl`.
    ///
    /// An expired or malformed cache is evicted on read, so a later read
    /// within the TTL still misses.
    pub fn cached_weather<T: DeserializeOwned>(&self, ttl: Duration) -> Option<T> {
        let envelope: Option<CacheEnvelope<T>> = self.kv.get(WEATHER_KEY, None);
        match envelope {
            Some(envelope) if self.clock.now() - envelope.cached_at <= ttl => Some(envelope.value),
            Some(_) => {
                tracing::debug!("Weather cache expired, evicting");
                self.kv.remove(WEATHER_KEY);
                None
            }
            None => {
                if self.kv.contains(WEATHER_KEY) {
                    self.kv.remove(WEATHER_KEY);
                }
                None
            }
        }
    }

    /// Drop the cached weather regardless of age.
    pub fn clear_weather_cache(&self) {
        self.kv.remove(WEATHER_KEY);
    }

    // --- reset ---

    /// Remove all stored data. Irreversible.
    pub fn reset(&self) {
        self.kv.remove(ENTRIES_KEY);
        self.kv.remove(SETTINGS_KEY);
        self.kv.remove(WEATHER_KEY);
        tracing::info!("All stored data removed");
    }
}
