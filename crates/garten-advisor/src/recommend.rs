//! The banner-list side of the engine: all applicable tips at once.

use chrono::{Datelike, NaiveDate};
use garten_weather::WeatherSnapshot;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Success,
    Warning,
    Info,
}

/// A categorized tip for the recommendations banner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub category: Category,
    pub title: String,
    pub message: String,
}

fn push(list: &mut Vec<Recommendation>, category: Category, title: &str, message: &str) {
    list.push(Recommendation {
        category,
        title: title.to_string(),
        message: message.to_string(),
    });
}

/// All tips that apply to the given weather and date. Unlike the advisory
/// chain this returns every match, not just the top one.
pub fn garden_recommendations(weather: &WeatherSnapshot, today: NaiveDate) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let temp = weather.current.temp;
    let upcoming_rain: f64 = weather.forecast.iter().map(|d| d.rain).sum();
    let month = today.month();

    if temp < 10 {
        push(
            &mut recommendations,
            Category::Warning,
            "Zu kalt zum Düngen",
            "Düngen erst ab 10°C Bodentemperatur für optimale Nährstoffaufnahme.",
        );
    } else if temp <= 20 {
        push(
            &mut recommendations,
            Category::Success,
            "Optimale Düngbedingungen",
            "Perfekte Temperatur für Rasendüngung. Jetzt ist der ideale Zeitpunkt!",
        );
    }

    if upcoming_rain > 5.0 {
        push(
            &mut recommendations,
            Category::Info,
            "Regen erwartet",
            "Idealer Zeitpunkt zum Düngen - der Regen sorgt für gute Nährstoffverteilung.",
        );
    } else if upcoming_rain <= 0.0 && temp > 25 {
        push(
            &mut recommendations,
            Category::Warning,
            "Bewässerung empfohlen",
            "Bei dieser Hitze sollten Sie 15 Liter pro m² bewässern.",
        );
    }

    if (3..=5).contains(&month) && temp >= 10 {
        push(
            &mut recommendations,
            Category::Info,
            "Frühjahrszeit",
            "Zeit für ProNatura Frühjahrs-Dünger und erste Mähroboter-Einsätze.",
        );
    } else if (9..=11).contains(&month) {
        push(
            &mut recommendations,
            Category::Info,
            "Herbstzeit",
            "ProNatura Herbst-Dünger für die Wintervorbereitung verwenden.",
        );
    }

    if weather.current.humidity > 80 && temp > 20 {
        push(
            &mut recommendations,
            Category::Warning,
            "Hohe Luftfeuchtigkeit",
            "Achten Sie auf Pilzkrankheiten. Eventuell Mähpause einlegen.",
        );
    }

    recommendations
}

/// A dated alternative fertilizing suggestion with its justification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatedSuggestion {
    pub date: NaiveDate,
    pub reason: String,
}

const SUGGESTION_SCORE_THRESHOLD: i32 = 3;
const MAX_SUGGESTIONS: usize = 3;

/// Scan the forecast for days that beat today as a fertilizing date.
///
/// Each day is scored on temperature band and rain band; days at or above
/// the threshold make the list, at most three. Days not after `today` are
/// ignored, and each suggestion carries the forecast day's own date.
pub fn better_fertilizer_dates(
    weather: &WeatherSnapshot,
    today: NaiveDate,
) -> Vec<DatedSuggestion> {
    let mut suggestions = Vec::new();

    for day in &weather.forecast {
        if day.date <= today {
            continue;
        }
        let temp = f64::from(day.temp_high + day.temp_low) / 2.0;
        let rain = day.rain;

        let mut score = 0;
        let mut reason = String::new();

        if (12.0..=18.0).contains(&temp) {
            score += 3;
            reason.push_str(&format!("Ideal {temp:.0}°C"));
        } else if (10.0..=25.0).contains(&temp) {
            score += 2;
            reason.push_str(&format!("Gut {temp:.0}°C"));
        } else {
            score -= 1;
            reason.push_str(&format!("{temp:.0}°C"));
        }

        if rain > 1.0 && rain < 5.0 {
            score += 3;
            reason.push_str(&format!(", perfekter Regen ({rain:.1} mm)"));
        } else if rain > 0.0 && rain <= 1.0 {
            score += 1;
            reason.push_str(", leichter Regen");
        } else if rain <= 0.0 {
            reason.push_str(", trocken (gießen!)");
        } else {
            score -= 2;
            reason.push_str(&format!(", zu nass ({rain:.1} mm)"));
        }

        if score >= SUGGESTION_SCORE_THRESHOLD {
            suggestions.push(DatedSuggestion {
                date: day.date,
                reason,
            });
        }
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use chrono::Duration;
    use garten_weather::{CurrentConditions, ForecastDay};

    // Forecast days are dated consecutively from this anchor.
    const ANCHOR: (i32, u32, u32) = (2026, 6, 15);

    fn snapshot(temp: i32, humidity: u8, forecast: &[(i32, i32, f64)]) -> WeatherSnapshot {
        let anchor = date(ANCHOR.0, ANCHOR.1, ANCHOR.2);
        WeatherSnapshot {
            current: CurrentConditions {
                temp,
                condition: "Clear".to_string(),
                description: "sonnig".to_string(),
                humidity,
                precipitation: 0.0,
            },
            forecast: forecast
                .iter()
                .enumerate()
                .map(|(i, &(high, low, rain))| ForecastDay {
                    date: anchor + Duration::days(i as i64 + 1),
                    day: "Di. 16. Juni".to_string(),
                    temp_high: high,
                    temp_low: low,
                    rain,
                    condition: "Clouds".to_string(),
                    description: "bewölkt".to_string(),
                })
                .collect(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cold_day_warns_and_skips_success_tip() {
        let tips = garden_recommendations(&snapshot(5, 60, &[]), date(2026, 2, 10));
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].category, Category::Warning);
        assert_eq!(tips[0].title, "Zu kalt zum Düngen");
    }

    #[test]
    fn test_mild_spring_day_collects_multiple_tips() {
        let tips = garden_recommendations(
            &snapshot(15, 60, &[(18, 10, 3.0), (17, 9, 4.0)]),
            date(2026, 4, 10),
        );

        let titles: Vec<&str> = tips.iter().map(|t| t.title.as_str()).collect();
        assert!(titles.contains(&"Optimale Düngbedingungen"));
        assert!(titles.contains(&"Regen erwartet"));
        assert!(titles.contains(&"Frühjahrszeit"));
    }

    #[test]
    fn test_dry_heat_recommends_watering() {
        let tips = garden_recommendations(&snapshot(28, 40, &[(30, 18, 0.0)]), date(2026, 7, 20));
        assert!(tips.iter().any(|t| t.title == "Bewässerung empfohlen"));
    }

    #[test]
    fn test_humid_warmth_warns_about_fungus() {
        let tips = garden_recommendations(&snapshot(23, 85, &[]), date(2026, 8, 5));
        assert!(tips.iter().any(|t| t.title == "Hohe Luftfeuchtigkeit"));
    }

    #[test]
    fn test_autumn_product_reminder() {
        let tips = garden_recommendations(&snapshot(12, 60, &[]), date(2026, 10, 3));
        assert!(tips.iter().any(|t| t.title == "Herbstzeit"));
    }

    #[test]
    fn test_better_dates_picks_ideal_rain_and_temperature() {
        let weather = snapshot(
            30,
            40,
            &[(30, 22, 0.0), (18, 12, 2.0), (16, 10, 0.5)],
        );
        let suggestions = better_fertilizer_dates(&weather, date(2026, 6, 15));

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].date, date(2026, 6, 17));
        assert!(suggestions[0].reason.contains("Ideal 15°C"));
        assert!(suggestions[0].reason.contains("perfekter Regen"));
        assert_eq!(suggestions[1].date, date(2026, 6, 18));
        assert!(suggestions[1].reason.contains("leichter Regen"));
    }

    #[test]
    fn test_better_dates_rejects_hot_dry_days() {
        let weather = snapshot(30, 40, &[(32, 24, 0.0), (33, 25, 12.0)]);
        assert!(better_fertilizer_dates(&weather, date(2026, 6, 15)).is_empty());
    }

    #[test]
    fn test_better_dates_carries_the_forecast_day_date() {
        // A day missing from the forecast must not shift the suggestion.
        let mut weather = snapshot(30, 40, &[(30, 22, 0.0), (18, 12, 2.0)]);
        weather.forecast[1].date = date(2026, 6, 19);

        let suggestions = better_fertilizer_dates(&weather, date(2026, 6, 15));
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].date, date(2026, 6, 19));
    }
}
