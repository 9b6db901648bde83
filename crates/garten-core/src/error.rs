//! Centralized error types for the Mein Garten application.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for UI display
//! - Preserves full error context for debugging/logging
//!
//! Note the failure policy from the persistence and weather layers: storage
//! errors degrade to defaults and weather errors degrade to synthetic data,
//! so most of these variants surface only in logs, never as aborts.

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a UI-appropriate (German) message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(e) => e.user_message().to_string(),
            AppError::Storage(e) => e.user_message().to_string(),
            AppError::Weather(e) => e.user_message().to_string(),
            AppError::Import(e) => e.to_string(),
            AppError::Io(_) => "Ein Dateizugriff ist fehlgeschlagen.".to_string(),
            AppError::Other(_) => "Ein unerwarteter Fehler ist aufgetreten.".to_string(),
        }
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "Keine Verbindung möglich. Bitte Internetverbindung prüfen."
            }
            NetworkError::Timeout => "Die Anfrage hat zu lange gedauert.",
            NetworkError::InvalidResponse(_) => "Unerwartete Antwort erhalten.",
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            NetworkError::Timeout
        } else if e.is_decode() {
            NetworkError::InvalidResponse(e.to_string())
        } else {
            NetworkError::ConnectionFailed(e.to_string())
        }
    }
}

/// Local storage errors (JSON store on disk).
///
/// The store itself swallows these and returns defaults; the type exists
/// for logging and for callers that want to report a degraded state.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to serialize value for key '{key}': {message}")]
    Serialize { key: String, message: String },

    #[error("Failed to read key '{key}': {message}")]
    Read { key: String, message: String },
}

impl StorageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StorageError::Unavailable(_) => {
                "Lokale Daten sind nicht verfügbar. Standardwerte werden verwendet."
            }
            StorageError::Serialize { .. } | StorageError::Read { .. } => {
                "Lokale Daten konnten nicht gespeichert werden."
            }
        }
    }
}

/// Weather service errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Weather API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        WeatherError::Network(NetworkError::from(e))
    }
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::Network(e) => e.user_message(),
            WeatherError::Api { .. } => "Der Wetterdienst hat einen Fehler gemeldet.",
            WeatherError::LocationNotFound(_) => "Der Ort wurde nicht gefunden.",
            WeatherError::Parse(_) => "Wetterdaten konnten nicht verarbeitet werden.",
        }
    }
}

/// Import failures for the export/import surface.
///
/// Messages are user-facing verbatim, matching the result-message contract
/// of the import operation (no partial mutation on failure).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    #[error("Ungültiges Datenformat")]
    InvalidFormat,

    #[error("Keine gültigen Einträge gefunden")]
    NoValidEntries,
}
