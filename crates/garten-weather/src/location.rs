//! Location resolution for the weather gateway.
//!
//! A small table of common German cities answers most lookups without a
//! network round trip; everything else goes through OpenWeatherMap's
//! geocoding API.

use crate::client::OwmClient;
use garten_core::WeatherError;
use garten_store::{LocationSetting, UserSettings};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommonLocation {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub state: &'static str,
}

pub const COMMON_LOCATIONS: [CommonLocation; 10] = [
    CommonLocation { name: "Happurg", lat: 49.5181, lon: 11.5167, state: "Bayern" },
    CommonLocation { name: "Kulmbach", lat: 50.1047, lon: 11.3563, state: "Bayern" },
    CommonLocation { name: "Nürnberg", lat: 49.4521, lon: 11.0767, state: "Bayern" },
    CommonLocation { name: "Bamberg", lat: 49.8988, lon: 10.9027, state: "Bayern" },
    CommonLocation { name: "Erlangen", lat: 49.5897, lon: 11.0040, state: "Bayern" },
    CommonLocation { name: "Fürth", lat: 49.4771, lon: 10.9906, state: "Bayern" },
    CommonLocation { name: "Bayreuth", lat: 49.9429, lon: 11.5764, state: "Bayern" },
    CommonLocation { name: "München", lat: 48.1351, lon: 11.5820, state: "Bayern" },
    CommonLocation { name: "Berlin", lat: 52.5200, lon: 13.4050, state: "Berlin" },
    CommonLocation { name: "Hamburg", lat: 53.5511, lon: 9.9937, state: "Hamburg" },
];

const MAX_SEARCH_RESULTS: usize = 8;

/// Substring search over the common-locations table, for autocomplete.
/// Queries shorter than two characters yield nothing.
pub fn search_cities(query: &str) -> Vec<&'static CommonLocation> {
    if query.chars().count() < 2 {
        return Vec::new();
    }

    let query = query.to_lowercase();
    COMMON_LOCATIONS
        .iter()
        .filter(|location| {
            location.name.to_lowercase().contains(&query)
                || location.state.to_lowercase().contains(&query)
        })
        .take(MAX_SEARCH_RESULTS)
        .collect()
}

/// Resolve a city name to coordinates: common table first, then the
/// geocoding API. `LocationNotFound` when neither knows the place.
pub async fn resolve_city(
    client: &OwmClient,
    city: &str,
) -> Result<LocationSetting, WeatherError> {
    if let Some(common) = COMMON_LOCATIONS
        .iter()
        .find(|l| l.name.eq_ignore_ascii_case(city))
    {
        return Ok(LocationSetting::city(common.name, common.lat, common.lon));
    }

    let hits = client.geocode_city(city).await?;
    hits.into_iter()
        .next()
        .map(|hit| LocationSetting::city(hit.name, hit.lat, hit.lon))
        .ok_or_else(|| WeatherError::LocationNotFound(city.to_string()))
}

/// How the weather endpoints should be queried for a given location.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City(String),
    Coords { lat: f64, lon: f64 },
}

/// Pick the query for the user's settings.
///
/// With `use_gps` set the saved coordinates carry the latest device fix, so
/// they win over the city name; otherwise the city name is authoritative.
pub fn location_for_weather(settings: &UserSettings) -> WeatherQuery {
    let location = &settings.location;
    if location.use_gps {
        WeatherQuery::Coords {
            lat: location.lat,
            lon: location.lon,
        }
    } else {
        WeatherQuery::City(location.name.clone())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_search_needs_two_characters() {
        assert!(search_cities("B").is_empty());
        assert!(!search_cities("Ba").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = search_cities("kulm");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Kulmbach");
    }

    #[test]
    fn test_search_matches_state_too() {
        let hits = search_cities("Bayern");
        assert_eq!(hits.len(), 8);
    }

    #[test]
    fn test_location_for_weather_prefers_gps_coordinates() {
        let mut settings = UserSettings::default();
        settings.location.use_gps = true;
        settings.location.lat = 49.5181;
        settings.location.lon = 11.5167;

        let query = location_for_weather(&settings);
        assert_eq!(query, WeatherQuery::Coords { lat: 49.5181, lon: 11.5167 });
    }

    #[test]
    fn test_location_for_weather_uses_city_name_by_default() {
        let settings = UserSettings::default();
        assert_eq!(
            location_for_weather(&settings),
            WeatherQuery::City("Kulmbach".to_string())
        );
    }
}
