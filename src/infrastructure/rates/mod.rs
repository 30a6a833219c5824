//! # Exchange Rate Client
//!
//! Queries an ordered list of external rate sources with
//! fallback-on-failure. Each source is a strategy object pairing an endpoint
//! with a response-field extractor; the client walks the list strictly
//! forward and short-circuits on the first usable rate.

mod providers;

pub use providers::default_sources;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::RateError;
use crate::domain::traits::RateService;
use crate::domain::types::ConversionResult;

/// A single external rate source.
#[async_trait]
pub trait RateSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetch the raw JSON document for a `from -> to` quote.
    async fn fetch(&self, from: &str, to: &str) -> anyhow::Result<Value>;

    /// Locate the target-currency rate in a fetched document.
    fn extract_rate(&self, body: &Value, to: &str) -> Option<f64>;
}

pub struct RateClient {
    sources: Vec<Box<dyn RateSource>>,
}

impl RateClient {
    pub fn new(sources: Vec<Box<dyn RateSource>>) -> Self {
        Self { sources }
    }

    /// Client backed by the standard provider list.
    pub fn with_default_sources(http: reqwest::Client) -> Self {
        Self::new(providers::default_sources(http))
    }
}

#[async_trait]
impl RateService for RateClient {
    async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<ConversionResult, RateError> {
        // One pass over the list, advancing on any failure; never restart
        // from the top.
        for source in &self.sources {
            tracing::info!("Trying {} for {} -> {}", source.name(), from, to);

            let body = match source.fetch(from, to).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("{} failed: {}", source.name(), e);
                    continue;
                }
            };

            match source.extract_rate(&body, to) {
                Some(rate) => {
                    tracing::info!("{} returned rate {}", source.name(), rate);
                    return Ok(ConversionResult {
                        converted_amount: amount * rate,
                        unit_rate: rate,
                    });
                }
                None => {
                    tracing::warn!("{}: no rate for {} in response", source.name(), to);
                }
            }
        }

        Err(RateError::Unavailable)
    }
}
