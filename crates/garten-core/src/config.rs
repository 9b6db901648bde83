use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the JSON data store (entries, settings, cache)
    pub data_dir: PathBuf,

    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Advisory engine settings
    #[serde(default)]
    pub advisor: AdvisorConfig,

    /// Reminder scheduling settings
    #[serde(default)]
    pub reminders: ReminderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    pub api_key: String,

    /// Base URL for the weather API (overridable for tests)
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Base URL for the geocoding API
    #[serde(default = "default_geo_base_url")]
    pub geo_base_url: String,

    /// Weather cache time-to-live in minutes
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u32,
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_geo_base_url() -> String {
    "https://api.openweathermap.org/geo/1.0".to_string()
}

fn default_cache_ttl_minutes() -> u32 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_weather_base_url(),
            geo_base_url: default_geo_base_url(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
        }
    }
}

/// Seasonal fertilizing windows.
///
/// The day-of-month boundaries are deliberately configuration, not code:
/// they are advisory tuning values, not load-bearing business rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Fertilizing in March counts as "in season" from this day on
    #[serde(default = "default_march_start_day")]
    pub march_start_day: u32,

    /// Fertilizing in June counts as "in season" through this day
    #[serde(default = "default_june_end_day")]
    pub june_end_day: u32,

    /// Fertilizing in September counts as "in season" through this day
    #[serde(default = "default_september_end_day")]
    pub september_end_day: u32,
}

fn default_march_start_day() -> u32 {
    15
}

fn default_june_end_day() -> u32 {
    20
}

fn default_september_end_day() -> u32 {
    25
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            march_start_day: default_march_start_day(),
            june_end_day: default_june_end_day(),
            september_end_day: default_september_end_day(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Local hour (0-23) at which the daily smart tip fires
    #[serde(default = "default_daily_tip_hour")]
    pub daily_tip_hour: u32,
}

fn default_daily_tip_hour() -> u32 {
    9
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            daily_tip_hour: default_daily_tip_hour(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mein-garten");

        Self {
            data_dir,
            weather: WeatherConfig::default(),
            advisor: AdvisorConfig::default(),
            reminders: ReminderConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns the config along with any validation warnings.
    /// Returns an error if validation fails with critical errors.
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            anyhow::bail!(
                "Configuration validation failed: {}",
                validation.error_summary()
            );
        }

        if !validation.warnings.is_empty() {
            for warning in &validation.warnings {
                tracing::warn!("Config warning: {}", warning);
            }
        }

        Ok((config, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.weather.base_url, "weather.base_url", &mut result);
        self.validate_url(&self.weather.geo_base_url, "weather.geo_base_url", &mut result);

        if self.weather.api_key.is_empty() {
            result.add_warning(
                "weather.api_key",
                "No API key configured - weather falls back to synthetic data",
            );
        }

        if self.weather.cache_ttl_minutes == 0 {
            result.add_warning(
                "weather.cache_ttl_minutes",
                "Weather caching disabled (0 minutes)",
            );
        }

        for (field, day) in [
            ("advisor.march_start_day", self.advisor.march_start_day),
            ("advisor.june_end_day", self.advisor.june_end_day),
            ("advisor.september_end_day", self.advisor.september_end_day),
        ] {
            if day == 0 || day > 31 {
                result.add_error(field, "Day of month must be in 1..=31");
            }
        }

        if self.reminders.daily_tip_hour > 23 {
            result.add_error("reminders.daily_tip_hour", "Hour must be in 0..=23");
        }

        result
    }

    /// Validate a URL field
    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("mein-garten");

        Ok(config_dir.join("config.toml"))
    }
}
