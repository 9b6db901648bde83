//! Thin OpenWeatherMap HTTP client.
//!
//! Returns raw API shapes; normalization into display types happens in the
//! service layer. Base URLs are injectable so tests can point the client at
//! a local mock server.

use garten_core::{WeatherConfig, WeatherError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct OwmMain {
    pub temp: f64,
    #[serde(default)]
    pub temp_min: f64,
    #[serde(default)]
    pub temp_max: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwmWeather {
    pub main: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwmRain {
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h")]
    pub three_hours: Option<f64>,
}

/// Response of `GET /weather`.
#[derive(Debug, Clone, Deserialize)]
pub struct OwmCurrentResponse {
    /// Resolved place name, also used for reverse geocoding.
    pub name: Option<String>,
    pub main: OwmMain,
    pub weather: Vec<OwmWeather>,
    pub rain: Option<OwmRain>,
}

/// One 3-hour sample of `GET /forecast`.
#[derive(Debug, Clone, Deserialize)]
pub struct OwmForecastSample {
    /// Unix timestamp of the sample.
    pub dt: i64,
    pub main: OwmMain,
    pub weather: Vec<OwmWeather>,
    pub rain: Option<OwmRain>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwmForecastResponse {
    pub list: Vec<OwmForecastSample>,
}

/// One hit of the direct-geocoding API.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeHit {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OwmClient {
    client: Client,
    base_url: String,
    geo_base_url: String,
    api_key: String,
}

impl OwmClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            geo_base_url: config.geo_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<T, WeatherError> {
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))
    }

    fn metric_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
            ("lang", "de".to_string()),
        ]
    }

    pub async fn current_by_city(&self, city: &str) -> Result<OwmCurrentResponse, WeatherError> {
        let mut query = self.metric_query();
        query.push(("q", city.to_string()));
        self.get_json(format!("{}/weather", self.base_url), &query).await
    }

    pub async fn current_by_coords(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<OwmCurrentResponse, WeatherError> {
        let mut query = self.metric_query();
        query.push(("lat", lat.to_string()));
        query.push(("lon", lon.to_string()));
        self.get_json(format!("{}/weather", self.base_url), &query).await
    }

    pub async fn forecast_by_city(&self, city: &str) -> Result<OwmForecastResponse, WeatherError> {
        let mut query = self.metric_query();
        query.push(("q", city.to_string()));
        self.get_json(format!("{}/forecast", self.base_url), &query).await
    }

    pub async fn forecast_by_coords(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<OwmForecastResponse, WeatherError> {
        let mut query = self.metric_query();
        query.push(("lat", lat.to_string()));
        query.push(("lon", lon.to_string()));
        self.get_json(format!("{}/forecast", self.base_url), &query).await
    }

    /// Direct geocoding: city name to coordinates, restricted to Germany.
    pub async fn geocode_city(&self, city: &str) -> Result<Vec<GeocodeHit>, WeatherError> {
        let query = vec![
            ("q", format!("{city},DE")),
            ("limit", "1".to_string()),
            ("appid", self.api_key.clone()),
        ];
        self.get_json(format!("{}/direct", self.geo_base_url), &query).await
    }

    /// Reverse geocoding via the weather endpoint's resolved place name.
    /// Returns `None` on any failure; callers fall back to a generic label.
    pub async fn city_from_coordinates(&self, lat: f64, lon: f64) -> Option<String> {
        match self.current_by_coords(lat, lon).await {
            Ok(response) => response.name.filter(|n| !n.is_empty()),
            Err(e) => {
                tracing::debug!("Reverse geocoding failed: {}", e);
                None
            }
        }
    }
}
