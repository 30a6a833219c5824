//! # Error Types
//!
//! Failure taxonomy for the service seams. Validation problems are not
//! errors; they map directly to usage-hint replies in the router.

use thiserror::Error;

/// Task persistence failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("blocking task failed: {0}")]
    Runtime(String),
}

/// Exchange-rate lookup failure.
#[derive(Debug, Error)]
pub enum RateError {
    /// Every configured provider was tried once and none produced a rate.
    #[error("all exchange rate providers failed")]
    Unavailable,
}

/// Weather lookup failure. A city with no geocoding match is NOT an error;
/// see `WeatherService::lookup`.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("geocoding request failed: {0}")]
    Geocoding(String),

    #[error("forecast request failed: {0}")]
    Forecast(String),
}
