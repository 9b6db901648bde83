//! Garden entry types and form validation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of logged activity. Closed set; stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Fertilizer,
    Seeding,
    Mowing,
    Watering,
    Maintenance,
}

impl EntryKind {
    pub const ALL: [EntryKind; 5] = [
        EntryKind::Fertilizer,
        EntryKind::Seeding,
        EntryKind::Mowing,
        EntryKind::Watering,
        EntryKind::Maintenance,
    ];

    /// German label for display.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Fertilizer => "Düngen",
            EntryKind::Seeding => "Aussaat",
            EntryKind::Mowing => "Mähen",
            EntryKind::Watering => "Bewässern",
            EntryKind::Maintenance => "Pflege",
        }
    }
}

/// One logged gardening activity.
///
/// Serialized field names match the export document format, so an export
/// from an older installation imports cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// User-supplied activity date (not the creation instant)
    pub date: NaiveDate,
    /// Creation instant; the collection is kept sorted descending by this
    pub timestamp: DateTime<Utc>,
    pub plant: String,
    /// Fertilizer amount in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Seed amount in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeds: Option<f64>,
    /// Treated area in m²
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    /// Fertilizer product name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fertilizer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variety: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    // Mowing robot specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mowing_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blade_change: Option<bool>,
    /// Cutting height in mm (25-50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutting_height: Option<u32>,
    /// Optional reminder datetime, replayed into notifications at startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<NaiveDateTime>,
}

/// Form input for a new entry; id and timestamp are assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub kind: EntryKind,
    pub date: NaiveDate,
    pub plant: String,
    pub amount: Option<f64>,
    pub seeds: Option<f64>,
    pub area: Option<f64>,
    pub fertilizer: Option<String>,
    pub variety: Option<String>,
    pub notes: Option<String>,
    pub mowing_hours: Option<f64>,
    pub blade_change: Option<bool>,
    pub cutting_height: Option<u32>,
    pub reminder: Option<NaiveDateTime>,
}

impl Default for EntryKind {
    fn default() -> Self {
        EntryKind::Maintenance
    }
}

/// Partial update of an existing entry.
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    pub date: Option<NaiveDate>,
    pub plant: Option<String>,
    pub amount: Option<Option<f64>>,
    pub seeds: Option<Option<f64>>,
    pub area: Option<Option<f64>>,
    pub fertilizer: Option<Option<String>>,
    pub variety: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub mowing_hours: Option<Option<f64>>,
    pub blade_change: Option<Option<bool>>,
    pub cutting_height: Option<Option<u32>>,
    pub reminder: Option<Option<NaiveDateTime>>,
}

impl EntryUpdate {
    /// Apply this update over an existing entry.
    pub fn apply(self, entry: &mut GardenEntry) {
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(plant) = self.plant {
            entry.plant = plant;
        }
        if let Some(amount) = self.amount {
            entry.amount = amount;
        }
        if let Some(seeds) = self.seeds {
            entry.seeds = seeds;
        }
        if let Some(area) = self.area {
            entry.area = area;
        }
        if let Some(fertilizer) = self.fertilizer {
            entry.fertilizer = fertilizer;
        }
        if let Some(variety) = self.variety {
            entry.variety = variety;
        }
        if let Some(notes) = self.notes {
            entry.notes = notes;
        }
        if let Some(mowing_hours) = self.mowing_hours {
            entry.mowing_hours = mowing_hours;
        }
        if let Some(blade_change) = self.blade_change {
            entry.blade_change = blade_change;
        }
        if let Some(cutting_height) = self.cutting_height {
            entry.cutting_height = cutting_height;
        }
        if let Some(reminder) = self.reminder {
            entry.reminder = reminder;
        }
    }
}

/// Field-keyed validation errors for entry forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .fields
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a draft the way the entry forms do: required fields first,
/// then positivity on numeric fields.
pub fn validate_draft(draft: &EntryDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.plant.trim().is_empty() {
        errors.add("plant", "Pflanze ist erforderlich");
    }

    match draft.kind {
        EntryKind::Fertilizer => {
            if draft.area.is_none() {
                errors.add("area", "Fläche ist erforderlich");
            }
            if draft.amount.is_none() {
                errors.add("amount", "Menge ist erforderlich");
            }
        }
        EntryKind::Seeding => {
            if draft.area.is_none() {
                errors.add("area", "Fläche ist erforderlich");
            }
            if draft.seeds.is_none() {
                errors.add("seeds", "Saatgutmenge ist erforderlich");
            }
        }
        _ => {}
    }

    if let Some(area) = draft.area {
        if !(area > 0.0) {
            errors.add("area", "Fläche muss größer als 0 sein");
        }
    }
    if let Some(amount) = draft.amount {
        if !(amount > 0.0) {
            errors.add("amount", "Menge muss größer als 0 sein");
        }
    }
    if let Some(seeds) = draft.seeds {
        if !(seeds > 0.0) {
            errors.add("seeds", "Saatgutmenge muss größer als 0 sein");
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    fn fertilizer_draft() -> EntryDraft {
        EntryDraft {
            kind: EntryKind::Fertilizer,
            date: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
            plant: "Rasen".to_string(),
            amount: Some(1250.0),
            area: Some(50.0),
            fertilizer: Some("ProNatura Frühjahr".to_string()),
            ..EntryDraft::default()
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let errors = validate_draft(&fertilizer_draft());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_plant_is_reported_by_field() {
        let mut draft = fertilizer_draft();
        draft.plant = "   ".to_string();
        let errors = validate_draft(&draft);
        assert_eq!(errors.get("plant"), Some("Pflanze ist erforderlich"));
    }

    #[test]
    fn test_missing_amount_for_fertilizer() {
        let mut draft = fertilizer_draft();
        draft.amount = None;
        let errors = validate_draft(&draft);
        assert_eq!(errors.get("amount"), Some("Menge ist erforderlich"));
    }

    #[test]
    fn test_seeding_requires_seeds_not_amount() {
        let draft = EntryDraft {
            kind: EntryKind::Seeding,
            date: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
            plant: "Karotten".to_string(),
            area: Some(4.0),
            seeds: None,
            ..EntryDraft::default()
        };
        let errors = validate_draft(&draft);
        assert_eq!(errors.get("seeds"), Some("Saatgutmenge ist erforderlich"));
        assert!(errors.get("amount").is_none());
    }

    #[test]
    fn test_non_positive_numbers_are_rejected() {
        let mut draft = fertilizer_draft();
        draft.area = Some(0.0);
        draft.amount = Some(-5.0);
        let errors = validate_draft(&draft);
        assert_eq!(errors.get("area"), Some("Fläche muss größer als 0 sein"));
        assert_eq!(errors.get("amount"), Some("Menge muss größer als 0 sein"));
    }

    #[test]
    fn test_mowing_draft_needs_no_amounts() {
        let draft = EntryDraft {
            kind: EntryKind::Mowing,
            date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            plant: "Rasen".to_string(),
            mowing_hours: Some(2.5),
            cutting_height: Some(35),
            ..EntryDraft::default()
        };
        let errors = validate_draft(&draft);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_entry_serializes_with_export_field_names() {
        let entry = GardenEntry {
            id: "abc".to_string(),
            kind: EntryKind::Fertilizer,
            date: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
            timestamp: "2026-03-20T08:00:00Z".parse().unwrap(),
            plant: "Rasen".to_string(),
            amount: Some(1250.0),
            seeds: None,
            area: Some(50.0),
            fertilizer: None,
            variety: None,
            notes: None,
            mowing_hours: Some(2.0),
            blade_change: None,
            cutting_height: None,
            reminder: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "fertilizer");
        assert_eq!(json["mowingHours"], 2.0);
        assert!(json.get("seeds").is_none());
    }

    #[test]
    fn test_update_applies_only_set_fields() {
        let mut entry = GardenEntry {
            id: "abc".to_string(),
            kind: EntryKind::Mowing,
            date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            timestamp: "2026-05-01T10:00:00Z".parse().unwrap(),
            plant: "Rasen".to_string(),
            amount: None,
            seeds: None,
            area: None,
            fertilizer: None,
            variety: None,
            notes: Some("alt".to_string()),
            mowing_hours: Some(1.0),
            blade_change: Some(false),
            cutting_height: Some(30),
            reminder: None,
        };

        let update = EntryUpdate {
            notes: Some(Some("neu".to_string())),
            cutting_height: Some(Some(40)),
            ..EntryUpdate::default()
        };
        update.apply(&mut entry);

        assert_eq!(entry.notes.as_deref(), Some("neu"));
        assert_eq!(entry.cutting_height, Some(40));
        assert_eq!(entry.mowing_hours, Some(1.0));
        assert_eq!(entry.plant, "Rasen");
    }
}
