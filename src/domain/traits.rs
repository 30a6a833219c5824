//! # Domain Traits
//!
//! Abstract interfaces for the bot's service seams (task storage, exchange
//! rates, weather). The router depends on these rather than on concrete
//! clients, so tests can inject stub implementations.

use async_trait::async_trait;

use crate::domain::errors::{RateError, StoreError, WeatherError};
use crate::domain::types::{ConversionResult, Task, WeatherReading};

/// Durable per-user ordered list of text items.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert a task and return its assigned id.
    async fn add(&self, owner_id: i64, text: &str) -> Result<i64, StoreError>;

    /// All tasks belonging to `owner_id`, in creation order.
    async fn list(&self, owner_id: i64) -> Result<Vec<Task>, StoreError>;

    /// Remove the task matching both `id` and `owner_id`. Returns true iff a
    /// row was removed; a miss (wrong owner or unknown id) is not an error.
    async fn delete(&self, owner_id: i64, id: i64) -> Result<bool, StoreError>;
}

/// Currency conversion against external rate sources.
#[async_trait]
pub trait RateService: Send + Sync {
    /// Convert `amount` from one currency code to another. Codes are passed
    /// through uppercased and otherwise unvalidated.
    async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<ConversionResult, RateError>;
}

/// City weather lookup.
#[async_trait]
pub trait WeatherService: Send + Sync {
    /// Resolve a free-text city name and fetch current conditions.
    /// `Ok(None)` means the name matched no known city, which is a distinct
    /// outcome from the service being unreachable.
    async fn lookup(&self, city: &str) -> Result<Option<WeatherReading>, WeatherError>;
}
