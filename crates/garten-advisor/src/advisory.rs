//! The single-advisory chain and its suitability predicates.
//!
//! One advisory per call, picked by fixed priority: seasonal fertilizing,
//! then heat watering, aeration, mowing, a seasonal-window hint and finally
//! the generic monthly tip. Consumers that want *all* applicable tips use
//! `recommend::garden_recommendations` instead.

use crate::tables;
use chrono::{Datelike, NaiveDate};
use garten_core::AdvisorConfig;
use garten_weather::{ForecastDay, WeatherSnapshot};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryKind {
    Fertilizer,
    Watering,
    Aeration,
    Mowing,
    General,
}

/// A single actionable tip, suitable as a notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub title: String,
    pub body: String,
    pub priority: Priority,
    pub kind: AdvisoryKind,
}

/// Day-of-month bounds of the three fertilizing windows.
#[derive(Debug, Clone, Copy)]
pub struct SeasonalWindows {
    pub march_start_day: u32,
    pub june_end_day: u32,
    pub september_end_day: u32,
}

impl Default for SeasonalWindows {
    fn default() -> Self {
        Self::from(&AdvisorConfig::default())
    }
}

impl From<&AdvisorConfig> for SeasonalWindows {
    fn from(config: &AdvisorConfig) -> Self {
        Self {
            march_start_day: config.march_start_day,
            june_end_day: config.june_end_day,
            september_end_day: config.september_end_day,
        }
    }
}

/// Where a date falls relative to the fertilizing windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonStatus {
    InWindow,
    /// In a window month, before the window opens.
    TooEarly { opens: NaiveDate },
    /// In a window month, after the window closed; `next_month` is the next
    /// opportunity.
    Missed { next_month: u32 },
    /// Not a fertilizing month at all.
    OffSeason,
}

impl SeasonalWindows {
    pub fn fertilizing_status(&self, date: NaiveDate) -> SeasonStatus {
        match date.month() {
            3 => {
                if date.day() < self.march_start_day {
                    let opens = date.with_day(self.march_start_day).unwrap_or(date);
                    SeasonStatus::TooEarly { opens }
                } else {
                    SeasonStatus::InWindow
                }
            }
            6 => {
                if date.day() > self.june_end_day {
                    SeasonStatus::Missed { next_month: 9 }
                } else {
                    SeasonStatus::InWindow
                }
            }
            9 => {
                if date.day() > self.september_end_day {
                    SeasonStatus::Missed { next_month: 3 }
                } else {
                    SeasonStatus::InWindow
                }
            }
            _ => SeasonStatus::OffSeason,
        }
    }
}

fn rain_sum(forecast: &[ForecastDay], days: usize) -> f64 {
    forecast.iter().take(days).map(|d| d.rain).sum()
}

/// Thresholds for a worthwhile fertilizing: mild, not rained out, with some
/// rain coming to wash the fertilizer in.
pub fn should_fertilize(weather: &WeatherSnapshot) -> bool {
    (10..=25).contains(&weather.current.temp)
        && weather.current.precipitation < 5.0
        && rain_sum(&weather.forecast, 2) > 0.5
}

pub fn should_aerate(weather: &WeatherSnapshot, month: u32) -> bool {
    let temp = weather.current.temp;
    matches!(month, 3 | 4 | 9 | 10)
        && (8..=20).contains(&temp)
        && weather.current.precipitation < 2.0
        && weather.current.humidity < 80
}

pub fn should_mow(weather: &WeatherSnapshot) -> bool {
    weather.current.temp >= 5
        && weather.current.precipitation < 1.0
        && weather.current.humidity < 85
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Fertilizing,
    Mowing,
    Seeding,
}

/// Simple yes/no gate per activity, distinct from the advisory chain.
pub fn is_good_for_activity(weather: &WeatherSnapshot, activity: Activity) -> bool {
    let temp = weather.current.temp;
    let rain = weather.current.precipitation;
    let upcoming = rain_sum(&weather.forecast, 2);

    match activity {
        Activity::Fertilizing => temp >= 10 && rain < 5.0 && upcoming > 0.0,
        Activity::Mowing => rain < 1.0 && weather.current.humidity < 85,
        Activity::Seeding => (8..=25).contains(&temp) && upcoming > 2.0,
    }
}

/// First of the next three forecast days with a useful rain event
/// (strictly between 1 and 8 mm); failing that, the first of the usual
/// mid-month dates still ahead in the current month.
pub fn optimal_fertilizer_date(weather: &WeatherSnapshot, today: NaiveDate) -> Option<NaiveDate> {
    for day in weather.forecast.iter().take(3) {
        if day.date > today && day.rain > 1.0 && day.rain < 8.0 {
            return Some(day.date);
        }
    }

    [15, 20, 25]
        .into_iter()
        .filter_map(|day| today.with_day(day))
        .find(|date| *date > today)
}

/// German month name for user-facing text.
pub(crate) fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Januar",
        2 => "Februar",
        3 => "März",
        4 => "April",
        5 => "Mai",
        6 => "Juni",
        7 => "Juli",
        8 => "August",
        9 => "September",
        10 => "Oktober",
        11 => "November",
        _ => "Dezember",
    }
}

/// The top advisory for today's weather. Always returns something; the
/// per-month tip is the floor.
pub fn advisory_for(
    weather: &WeatherSnapshot,
    today: NaiveDate,
    windows: &SeasonalWindows,
) -> Advisory {
    let temp = weather.current.temp;
    let month = today.month();
    let season = windows.fertilizing_status(today);

    if season == SeasonStatus::InWindow && should_fertilize(weather) {
        return fertilizer_advisory(weather, today);
    }

    if temp > 25 && rain_sum(&weather.forecast, 2) < 1.0 {
        let volume = if temp > 30 { "20 L/m²" } else { "15 L/m²" };
        let timing = if temp > 28 { "früh 6-8 Uhr" } else { "morgens" };
        return Advisory {
            title: "Rasen bewässern".to_string(),
            body: format!("{temp}°C: {volume} {timing} gießen"),
            priority: Priority::High,
            kind: AdvisoryKind::Watering,
        };
    }

    if should_aerate(weather, month) {
        let (tool, depth) = if month <= 4 {
            ("Vertikutierer", "2-4 mm tief")
        } else {
            ("Aerifizierer", "5-8 cm tief")
        };
        return Advisory {
            title: "Rasen lüften".to_string(),
            body: format!("{tool} {depth} bei {temp}°C nutzen"),
            priority: Priority::Medium,
            kind: AdvisoryKind::Aeration,
        };
    }

    if should_mow(weather) {
        return Advisory {
            title: "Mähen empfohlen".to_string(),
            body: format!("Trocken, {temp}°C: ideale Mähbedingungen"),
            priority: Priority::Medium,
            kind: AdvisoryKind::Mowing,
        };
    }

    match season {
        SeasonStatus::TooEarly { opens } => Advisory {
            title: "Düngung noch zu früh".to_string(),
            body: format!(
                "Erste Düngung ab dem {}. {}",
                opens.day(),
                month_name(opens.month())
            ),
            priority: Priority::Low,
            kind: AdvisoryKind::Fertilizer,
        },
        SeasonStatus::Missed { next_month } => Advisory {
            title: "Düngefenster verpasst".to_string(),
            body: format!("Nächste Gelegenheit: {}", month_name(next_month)),
            priority: Priority::Low,
            kind: AdvisoryKind::Fertilizer,
        },
        _ => monthly_tip(weather, today),
    }
}

fn fertilizer_advisory(weather: &WeatherSnapshot, today: NaiveDate) -> Advisory {
    let temp = weather.current.temp;
    let upcoming = rain_sum(&weather.forecast, 2);

    let (product, amount) = match today.month() {
        3 => ("ProNatura Frühjahr", "30 g/m²"),
        6 => ("ProNatura Sommer", "25 g/m²"),
        9 => ("ProNatura Herbst", "35 g/m²"),
        _ => ("Dünger", "25 g/m²"),
    };

    let date_info = optimal_fertilizer_date(weather, today)
        .map(|date| format!(" am {}.{}.", date.day(), date.month()))
        .unwrap_or_default();
    let rain_reason = if upcoming > 3.0 {
        " (Regen erwartet)"
    } else if upcoming > 1.0 {
        " (leichter Regen)"
    } else {
        ""
    };

    Advisory {
        title: product.to_string(),
        body: format!("{amount}{date_info} bei {temp}°C{rain_reason}"),
        priority: Priority::High,
        kind: AdvisoryKind::Fertilizer,
    }
}

/// Fixed per-month fallback tip, parameterized with today's temperature.
fn monthly_tip(weather: &WeatherSnapshot, today: NaiveDate) -> Advisory {
    let temp = weather.current.temp;
    let month = today.month();

    let body = match month {
        1 => format!("Geräte prüfen, Pläne machen. {temp}°C"),
        2 => format!("Boden vorbereiten bei {temp}°C"),
        3 => format!("Erste Düngung ab 10°C (aktuell {temp}°C)"),
        4 => format!("Regelmäßig mähen bei {temp}°C"),
        5 => format!("Gießen bei {temp}°C, Unkraut jäten"),
        6 => format!("Sommerpflege bei {temp}°C starten"),
        7 => format!("Viel gießen! {temp}°C = 15 L/m²"),
        8 => format!("Schädlinge prüfen bei {temp}°C"),
        9 => format!("Herbstdüngung bei {temp}°C"),
        10 => format!("Laub entfernen, {temp}°C beachten"),
        11 => format!("Wintervorbereitung bei {temp}°C"),
        _ => format!("Ruhezeit, Planung für {}", today.year() + 1),
    };

    Advisory {
        title: month_name(month).to_string(),
        body,
        priority: Priority::Low,
        kind: AdvisoryKind::General,
    }
}

/// Care plan summary for the current month, used by the monthly overview.
pub fn monthly_plan_summary(month: u32) -> Option<String> {
    tables::monthly_care(month).map(|care| {
        format!(
            "{}: {} {} g/m², Mähroboter {} pro Woche",
            month_name(month),
            care.fertilizer,
            care.fertilizer_amount,
            care.runtime_per_week
        )
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use chrono::Duration;
    use garten_weather::CurrentConditions;

    fn weather(temp: i32, precipitation: f64, humidity: u8, rain: &[f64]) -> WeatherSnapshot {
        WeatherSnapshot {
            current: CurrentConditions {
                temp,
                condition: "Clear".to_string(),
                description: "sonnig".to_string(),
                humidity,
                precipitation,
            },
            forecast: rain
                .iter()
                .map(|&mm| ForecastDay {
                    date: date(2026, 6, 1),
                    day: "Mo. 1. Juni".to_string(),
                    temp_high: temp + 2,
                    temp_low: temp - 4,
                    rain: mm,
                    condition: "Clouds".to_string(),
                    description: "bewölkt".to_string(),
                })
                .collect(),
        }
    }

    /// Re-date the forecast to the days following `today`.
    fn dated(mut snapshot: WeatherSnapshot, today: NaiveDate) -> WeatherSnapshot {
        for (i, day) in snapshot.forecast.iter_mut().enumerate() {
            day.date = today + Duration::days(i as i64 + 1);
        }
        snapshot
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_march_in_window_yields_fertilizer_advisory() {
        let weather = weather(15, 0.0, 60, &[1.0, 1.0, 0.0]);
        let advisory = advisory_for(&weather, date(2026, 3, 20), &SeasonalWindows::default());

        assert_eq!(advisory.kind, AdvisoryKind::Fertilizer);
        assert_eq!(advisory.priority, Priority::High);
        assert_eq!(advisory.title, "ProNatura Frühjahr");
        assert!(advisory.body.contains("30 g/m²"));
    }

    #[test]
    fn test_march_before_window_yields_too_early_hint() {
        // Humidity blocks aeration and mowing so the seasonal hint surfaces.
        let weather = weather(15, 0.0, 85, &[1.0, 1.0, 0.0]);
        let advisory = advisory_for(&weather, date(2026, 3, 5), &SeasonalWindows::default());

        assert_eq!(advisory.kind, AdvisoryKind::Fertilizer);
        assert_eq!(advisory.priority, Priority::Low);
        assert!(advisory.body.contains("15. März"));
    }

    #[test]
    fn test_missed_june_window_points_to_september() {
        let weather = weather(18, 0.0, 90, &[0.0]);
        let advisory = advisory_for(&weather, date(2026, 6, 25), &SeasonalWindows::default());

        assert_eq!(advisory.title, "Düngefenster verpasst");
        assert!(advisory.body.contains("September"));
    }

    #[test]
    fn test_heat_yields_escalated_watering_advisory() {
        let weather = weather(32, 0.0, 40, &[0.0, 0.0, 0.0]);
        let advisory = advisory_for(&weather, date(2026, 7, 10), &SeasonalWindows::default());

        assert_eq!(advisory.kind, AdvisoryKind::Watering);
        assert_eq!(advisory.priority, Priority::High);
        assert!(advisory.body.contains("20 L/m²"));
        assert!(advisory.body.contains("früh 6-8 Uhr"));
    }

    #[test]
    fn test_moderate_heat_uses_lower_watering_tier() {
        let weather = weather(27, 0.0, 40, &[0.0, 0.0]);
        let advisory = advisory_for(&weather, date(2026, 7, 10), &SeasonalWindows::default());

        assert!(advisory.body.contains("15 L/m²"));
        assert!(advisory.body.contains("morgens"));
        assert!(!advisory.body.contains("früh"));
    }

    #[test]
    fn test_spring_aeration_recommends_scarifier() {
        let weather = weather(14, 0.0, 60, &[0.0, 0.0]);
        let advisory = advisory_for(&weather, date(2026, 4, 10), &SeasonalWindows::default());

        assert_eq!(advisory.kind, AdvisoryKind::Aeration);
        assert!(advisory.body.contains("Vertikutierer"));
    }

    #[test]
    fn test_autumn_aeration_recommends_aerator() {
        let weather = weather(14, 0.0, 60, &[0.0, 0.0]);
        let advisory = advisory_for(&weather, date(2026, 10, 10), &SeasonalWindows::default());

        assert_eq!(advisory.kind, AdvisoryKind::Aeration);
        assert!(advisory.body.contains("Aerifizierer"));
    }

    #[test]
    fn test_dry_summer_day_recommends_mowing() {
        let weather = weather(22, 0.0, 60, &[0.0, 0.0]);
        let advisory = advisory_for(&weather, date(2026, 7, 10), &SeasonalWindows::default());

        assert_eq!(advisory.kind, AdvisoryKind::Mowing);
        assert_eq!(advisory.priority, Priority::Medium);
    }

    #[test]
    fn test_winter_falls_through_to_monthly_tip() {
        let weather = weather(2, 3.0, 90, &[0.0]);
        let advisory = advisory_for(&weather, date(2026, 1, 10), &SeasonalWindows::default());

        assert_eq!(advisory.kind, AdvisoryKind::General);
        assert_eq!(advisory.title, "Januar");
        assert!(advisory.body.contains("2°C"));
    }

    #[test]
    fn test_configured_window_bounds_are_honored() {
        let windows = SeasonalWindows {
            march_start_day: 10,
            june_end_day: 20,
            september_end_day: 25,
        };
        let w = weather(15, 0.0, 60, &[1.0, 1.0]);

        let advisory = advisory_for(&w, date(2026, 3, 12), &windows);
        assert_eq!(advisory.priority, Priority::High);
    }

    #[test]
    fn test_optimal_date_prefers_rainy_forecast_day() {
        let w = dated(weather(15, 0.0, 60, &[0.0, 2.5, 9.0]), date(2026, 3, 18));
        let best = optimal_fertilizer_date(&w, date(2026, 3, 18));
        assert_eq!(best, Some(date(2026, 3, 20)));
    }

    #[test]
    fn test_optimal_date_tracks_a_gap_in_the_forecast() {
        // The provider delivered no samples for March 20; the rainy day's
        // own date must win over its position in the list.
        let mut w = dated(weather(15, 0.0, 60, &[0.0, 2.5]), date(2026, 3, 18));
        w.forecast[1].date = date(2026, 3, 21);

        assert_eq!(
            optimal_fertilizer_date(&w, date(2026, 3, 18)),
            Some(date(2026, 3, 21))
        );
    }

    #[test]
    fn test_optimal_date_falls_back_to_mid_month() {
        let w = weather(15, 0.0, 60, &[0.0, 0.0, 9.0]);
        assert_eq!(
            optimal_fertilizer_date(&w, date(2026, 3, 5)),
            Some(date(2026, 3, 15))
        );
        assert_eq!(
            optimal_fertilizer_date(&w, date(2026, 3, 18)),
            Some(date(2026, 3, 20))
        );
        assert_eq!(optimal_fertilizer_date(&w, date(2026, 3, 26)), None);
    }

    #[test]
    fn test_activity_gates() {
        let good_seeding = weather(15, 0.0, 60, &[2.0, 1.5]);
        assert!(is_good_for_activity(&good_seeding, Activity::Seeding));

        let too_cold = weather(6, 0.0, 60, &[2.0, 1.5]);
        assert!(!is_good_for_activity(&too_cold, Activity::Seeding));

        let wet = weather(15, 2.0, 60, &[2.0]);
        assert!(!is_good_for_activity(&wet, Activity::Mowing));
        assert!(is_good_for_activity(&wet, Activity::Fertilizing));
    }

    #[test]
    fn test_monthly_plan_summary() {
        let summary = monthly_plan_summary(5).unwrap();
        assert!(summary.contains("Mai"));
        assert!(summary.contains("40 g/m²"));
        assert!(monthly_plan_summary(12).is_none());
    }
}
