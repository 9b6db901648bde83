//! Local persistence for Mein Garten.
//!
//! A JSON key-value store on disk plus the domain operations layered on
//! top of it: garden entries, user settings, the time-boxed weather cache,
//! statistics and the export/import surface.

pub mod entry;
pub mod export;
pub mod kv;
pub mod settings;
pub mod stats;
pub mod store;

pub use entry::{
    validate_draft, EntryDraft, EntryKind, EntryUpdate, GardenEntry, ValidationErrors,
};
pub use export::{ExportDocument, ImportSummary, EXPORT_VERSION};
pub use kv::JsonStore;
pub use settings::{LocationSetting, SettingsUpdate, UserSettings};
pub use stats::Statistics;
pub use store::GardenStore;
