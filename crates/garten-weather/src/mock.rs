//! Synthetic weather used whenever the live API is unreachable.
//!
//! Deterministic for a given date so the advisory engine and the tests see
//! stable values; the presets rotate with the day of year to keep demo data
//! from looking frozen.

use crate::types::{german_day_label, CurrentConditions, ForecastDay};
use chrono::{Datelike, Duration, NaiveDate};

const PRESETS: [(i32, &str, &str, u8, f64); 4] = [
    (18, "Clear", "sonnig", 65, 0.0),
    (15, "Clouds", "bewölkt", 75, 0.0),
    (12, "Rain", "leichter Regen", 85, 2.5),
    (22, "Clear", "heiter", 55, 0.0),
];

pub fn mock_current(date: NaiveDate) -> CurrentConditions {
    let (temp, condition, description, humidity, precipitation) =
        PRESETS[date.ordinal0() as usize % PRESETS.len()];
    CurrentConditions {
        temp,
        condition: condition.to_string(),
        description: description.to_string(),
        humidity,
        precipitation,
    }
}

/// Three synthetic forecast days following `today`.
pub fn mock_forecast(today: NaiveDate) -> Vec<ForecastDay> {
    (1..=3)
        .map(|offset| {
            let date = today + Duration::days(offset);
            let seed = date.ordinal0() as i64;
            let rainy = seed % 4 == 0;
            ForecastDay {
                date,
                day: german_day_label(date),
                temp_high: 15 + (seed % 10) as i32,
                temp_low: 8 + (seed % 5) as i32,
                rain: if rainy { 3.0 } else { 0.0 },
                condition: if rainy { "Rain" } else { "Clear" }.to_string(),
                description: if rainy { "leichter Regen" } else { "sonnig" }.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_mock_current_is_deterministic() {
        let date = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        assert_eq!(mock_current(date), mock_current(date));
    }

    #[test]
    fn test_mock_current_rotates_with_the_date() {
        let a = mock_current(NaiveDate::from_ymd_opt(2026, 6, 15).unwrap());
        let b = mock_current(NaiveDate::from_ymd_opt(2026, 6, 16).unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn test_mock_forecast_has_three_labeled_days() {
        let today = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let forecast = mock_forecast(today);
        assert_eq!(forecast.len(), 3);
        assert_eq!(forecast[0].day, "Di. 16. Juni");
        for (offset, day) in forecast.iter().enumerate() {
            assert_eq!(day.date, today + Duration::days(offset as i64 + 1));
            assert!(day.temp_high >= day.temp_low);
        }
    }
}
