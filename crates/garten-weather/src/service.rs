//! Cache-first weather gateway.
//!
//! Read order per slice: store cache, then the live API, then synthetic
//! data. Fetch failures are logged and degrade to the mock values; the
//! public methods are infallible.

use crate::client::{OwmClient, OwmCurrentResponse, OwmForecastSample};
use crate::location::{location_for_weather, WeatherQuery};
use crate::mock;
use crate::types::{german_day_label, CachedWeather, CurrentConditions, ForecastDay, WeatherSnapshot};
use chrono::{DateTime, Duration, NaiveDate};
use garten_core::{Clock, WeatherConfig, WeatherError};
use garten_store::GardenStore;
use std::sync::Arc;

const FORECAST_DAYS: usize = 3;

#[derive(Clone)]
pub struct WeatherService {
    client: OwmClient,
    store: GardenStore,
    clock: Arc<dyn Clock>,
    cache_ttl: Duration,
}

impl WeatherService {
    pub fn new(
        config: &WeatherConfig,
        store: GardenStore,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, WeatherError> {
        Ok(Self {
            client: OwmClient::new(config)?,
            store,
            clock,
            cache_ttl: Duration::minutes(i64::from(config.cache_ttl_minutes)),
        })
    }

    fn cached(&self) -> CachedWeather {
        self.store
            .cached_weather::<CachedWeather>(self.cache_ttl)
            .unwrap_or_default()
    }

    fn today(&self) -> NaiveDate {
        self.clock.now_local().date()
    }

    /// Current conditions; never fails.
    pub async fn current_conditions(&self) -> CurrentConditions {
        if let Some(current) = self.cached().current {
            tracing::debug!("Serving current conditions from cache");
            return current;
        }

        match self.fetch_current().await {
            Ok(current) => {
                let mut cached = self.cached();
                cached.current = Some(current.clone());
                self.store.cache_weather(&cached);
                current
            }
            Err(e) => {
                tracing::warn!("Weather API failed, using synthetic data: {}", e);
                mock::mock_current(self.today())
            }
        }
    }

    /// Up to three aggregated forecast days; never fails.
    pub async fn forecast(&self) -> Vec<ForecastDay> {
        if let Some(forecast) = self.cached().forecast {
            tracing::debug!("Serving forecast from cache");
            return forecast;
        }

        match self.fetch_forecast().await {
            Ok(forecast) => {
                let mut cached = self.cached();
                cached.forecast = Some(forecast.clone());
                self.store.cache_weather(&cached);
                forecast
            }
            Err(e) => {
                tracing::warn!("Forecast API failed, using synthetic data: {}", e);
                mock::mock_forecast(self.today())
            }
        }
    }

    /// Both slices, fetched concurrently and independently.
    pub async fn complete_weather(&self) -> WeatherSnapshot {
        let (current, forecast) = tokio::join!(self.current_conditions(), self.forecast());
        WeatherSnapshot { current, forecast }
    }

    /// Drop the cached slices so the next read hits the API.
    pub fn refresh(&self) {
        self.store.clear_weather_cache();
    }

    async fn fetch_current(&self) -> Result<CurrentConditions, WeatherError> {
        let settings = self.store.settings();
        let response = match location_for_weather(&settings) {
            WeatherQuery::City(city) => self.client.current_by_city(&city).await?,
            WeatherQuery::Coords { lat, lon } => self.client.current_by_coords(lat, lon).await?,
        };
        Ok(normalize_current(&response))
    }

    async fn fetch_forecast(&self) -> Result<Vec<ForecastDay>, WeatherError> {
        let settings = self.store.settings();
        let response = match location_for_weather(&settings) {
            WeatherQuery::City(city) => self.client.forecast_by_city(&city).await?,
            WeatherQuery::Coords { lat, lon } => self.client.forecast_by_coords(lat, lon).await?,
        };
        Ok(aggregate_forecast(&response.list, self.today()))
    }
}

fn normalize_current(response: &OwmCurrentResponse) -> CurrentConditions {
    let (condition, description) = response
        .weather
        .first()
        .map(|w| (w.main.clone(), w.description.clone()))
        .unwrap_or_else(|| ("Clear".to_string(), String::new()));

    CurrentConditions {
        temp: response.main.temp.round() as i32,
        condition,
        description,
        humidity: response.main.humidity,
        precipitation: response
            .rain
            .as_ref()
            .and_then(|r| r.one_hour)
            .unwrap_or(0.0),
    }
}

/// Collapse 3-hour samples into per-day forecasts.
///
/// Only days after `today` count; the first three distinct days are kept.
/// High and low are the extremes over the day's samples, rain is the sum,
/// condition and description come from the day's first sample.
fn aggregate_forecast(samples: &[OwmForecastSample], today: NaiveDate) -> Vec<ForecastDay> {
    let mut days: Vec<(NaiveDate, ForecastDay)> = Vec::with_capacity(FORECAST_DAYS);

    for sample in samples {
        let Some(timestamp) = DateTime::from_timestamp(sample.dt, 0) else {
            continue;
        };
        let date = timestamp.date_naive();
        if date <= today {
            continue;
        }

        let high = sample.main.temp_max.round() as i32;
        let low = sample.main.temp_min.round() as i32;
        let rain = sample
            .rain
            .as_ref()
            .and_then(|r| r.three_hours)
            .unwrap_or(0.0);

        if let Some((_, day)) = days.iter_mut().find(|(d, _)| *d == date) {
            day.temp_high = day.temp_high.max(high);
            day.temp_low = day.temp_low.min(low);
            day.rain += rain;
        } else if days.len() < FORECAST_DAYS {
            let (condition, description) = sample
                .weather
                .first()
                .map(|w| (w.main.clone(), w.description.clone()))
                .unwrap_or_else(|| ("Clear".to_string(), String::new()));

            days.push((
                date,
                ForecastDay {
                    date,
                    day: german_day_label(date),
                    temp_high: high,
                    temp_low: low,
                    rain,
                    condition,
                    description,
                },
            ));
        }
    }

    days.into_iter().map(|(_, day)| day).collect()
}
