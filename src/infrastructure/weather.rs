//! # Open-Meteo Weather Client
//!
//! Two-stage lookup: geocode the free-text city name, then fetch current
//! conditions for the coordinates. No fallback providers; any network
//! failure at either stage surfaces as `WeatherError`.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::config::WeatherConfig;
use crate::domain::errors::WeatherError;
use crate::domain::traits::WeatherService;
use crate::domain::types::WeatherReading;

pub struct OpenMeteoClient {
    http: reqwest::Client,
    geocode_url: String,
    forecast_url: String,
    language: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    latitude: f64,
    longitude: f64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    weathercode: u32,
}

impl OpenMeteoClient {
    pub fn new(http: reqwest::Client, config: &WeatherConfig) -> Self {
        Self {
            http,
            geocode_url: config.geocode_url.clone(),
            forecast_url: config.forecast_url.clone(),
            language: config.language.clone(),
        }
    }

    async fn geocode(&self, city: &str) -> Result<Option<GeocodeResult>, WeatherError> {
        let response = self
            .http
            .get(&self.geocode_url)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", self.language.as_str()),
                ("format", "json"),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| WeatherError::Geocoding(e.to_string()))?;

        let geo: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Geocoding(e.to_string()))?;

        Ok(geo.results.into_iter().next())
    }

    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, WeatherError> {
        let response = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| WeatherError::Forecast(e.to_string()))?;

        let forecast: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Forecast(e.to_string()))?;

        Ok(forecast.current_weather)
    }
}

#[async_trait]
impl WeatherService for OpenMeteoClient {
    async fn lookup(&self, city: &str) -> Result<Option<WeatherReading>, WeatherError> {
        let Some(location) = self.geocode(city).await? else {
            tracing::info!("No geocoding match for '{}'", city);
            return Ok(None);
        };

        let current = self
            .current_conditions(location.latitude, location.longitude)
            .await?;

        Ok(Some(WeatherReading {
            resolved_city_name: location.name,
            description: describe(current.weathercode).to_string(),
            temperature_celsius: current.temperature,
            // The source exposes no feels-like metric and no humidity.
            feels_like_celsius: current.temperature,
            humidity_percent: "N/A".to_string(),
        }))
    }
}

/// WMO weather code to human description.
pub fn describe(code: u32) -> &'static str {
    match code {
        0 => "clear sky",
        1 => "mainly clear",
        2 => "partly cloudy",
        3 => "overcast",
        45 | 48 => "fog",
        51 => "light drizzle",
        53 => "moderate drizzle",
        55 => "dense drizzle",
        56 => "light freezing drizzle",
        57 => "dense freezing drizzle",
        61 => "slight rain",
        63 => "moderate rain",
        65 => "heavy rain",
        66 => "light freezing rain",
        67 => "heavy freezing rain",
        71 => "slight snowfall",
        73 => "moderate snowfall",
        75 => "heavy snowfall",
        77 => "snow grains",
        80 => "slight rain showers",
        81 => "moderate rain showers",
        82 => "violent rain showers",
        85 => "slight snow showers",
        86 => "heavy snow showers",
        95 => "thunderstorm",
        96 => "thunderstorm with slight hail",
        99 => "thunderstorm with heavy hail",
        _ => "unknown",
    }
}
