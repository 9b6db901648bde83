use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Current conditions, normalized from the provider response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// Rounded °C.
    pub temp: i32,
    /// Provider condition group, e.g. "Clear", "Clouds", "Rain".
    pub condition: String,
    /// Localized description, e.g. "leichter Regen".
    pub description: String,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Rain over the last hour in mm.
    pub precipitation: f64,
}

/// One forecast day, aggregated from the provider's 3-hour samples.
///
/// Carries the calendar date explicitly; the provider may skip a day, so
/// consumers must not derive dates from a day's position in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// Display label, e.g. "Mo. 15. Sep".
    pub day: String,
    pub temp_high: i32,
    pub temp_low: i32,
    /// Expected rain in mm, summed over the day.
    pub rain: f64,
    pub condition: String,
    pub description: String,
}

/// Current conditions plus up to three forecast days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

/// Cache shape persisted in the store. The two slices expire together but
/// are filled independently, so either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedWeather {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<CurrentConditions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Vec<ForecastDay>>,
}

/// Short German date label in the style of the forecast cards.
pub fn german_day_label(date: NaiveDate) -> String {
    let weekday = match date.weekday() {
        Weekday::Mon => "Mo.",
        Weekday::Tue => "Di.",
        Weekday::Wed => "Mi.",
        Weekday::Thu => "Do.",
        Weekday::Fri => "Fr.",
        Weekday::Sat => "Sa.",
        Weekday::Sun => "So.",
    };
    let month = match date.month() {
        1 => "Jan",
        2 => "Feb",
        3 => "März",
        4 => "Apr",
        5 => "Mai",
        6 => "Juni",
        7 => "Juli",
        8 => "Aug",
        9 => "Sep",
        10 => "Okt",
        11 => "Nov",
        _ => "Dez",
    };
    format!("{} {}. {}", weekday, date.day(), month)
}
