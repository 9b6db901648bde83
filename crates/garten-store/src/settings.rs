//! User settings: lawn profile, notification switches and weather location.

use serde::{Deserialize, Serialize};

/// Weather location, either a picked city or "use device position".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSetting {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// When set, coordinates from the device override `lat`/`lon`.
    #[serde(default)]
    pub use_gps: bool,
}

impl LocationSetting {
    pub fn city(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            use_gps: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Lawn area in m², used for dosage defaults.
    #[serde(default)]
    pub lawn_area: f64,
    /// Lawn type key, one of the profiles the advisor knows.
    pub lawn_type: String,
    /// Master switch; when off, the monthly and daily switches are moot.
    pub notifications_enabled: bool,
    pub monthly_reminders_enabled: bool,
    pub daily_tips_enabled: bool,
    pub location: LocationSetting,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            lawn_area: 0.0,
            lawn_type: "sportrasen".to_string(),
            notifications_enabled: true,
            monthly_reminders_enabled: true,
            daily_tips_enabled: true,
            location: LocationSetting::city("Kulmbach", 50.1047, 11.3563),
        }
    }
}

/// Partial settings update; unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub lawn_area: Option<f64>,
    pub lawn_type: Option<String>,
    pub notifications_enabled: Option<bool>,
    pub monthly_reminders_enabled: Option<bool>,
    pub daily_tips_enabled: Option<bool>,
    pub location: Option<LocationSetting>,
}

impl SettingsUpdate {
    pub fn apply(self, settings: &mut UserSettings) {
        if let Some(lawn_area) = self.lawn_area {
            settings.lawn_area = lawn_area;
        }
        if let Some(lawn_type) = self.lawn_type {
            settings.lawn_type = lawn_type;
        }
        if let Some(notifications_enabled) = self.notifications_enabled {
            settings.notifications_enabled = notifications_enabled;
        }
        if let Some(monthly_reminders_enabled) = self.monthly_reminders_enabled {
            settings.monthly_reminders_enabled = monthly_reminders_enabled;
        }
        if let Some(daily_tips_enabled) = self.daily_tips_enabled {
            settings.daily_tips_enabled = daily_tips_enabled;
        }
        if let Some(location) = self.location {
            settings.location = location;
        }
    }
}
