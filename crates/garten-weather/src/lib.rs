//! Weather gateway for Mein Garten
//!
//! Fetches current conditions and a three-day forecast from OpenWeatherMap,
//! caches results in the store with a short TTL and falls back to synthetic
//! data whenever the network or the API lets us down. Callers never see a
//! weather error.

pub mod client;
pub mod location;
pub mod mock;
pub mod service;
pub mod types;

pub use client::OwmClient;
pub use location::{
    location_for_weather, resolve_city, search_cities, CommonLocation, WeatherQuery,
    COMMON_LOCATIONS,
};
pub use service::WeatherService;
pub use types::{CachedWeather, CurrentConditions, ForecastDay, WeatherSnapshot};
