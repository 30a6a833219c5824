//! # Rate Providers
//!
//! Concrete `RateSource` implementations. All are free, keyless endpoints;
//! they differ only in URL template and where the rate lives in the
//! response.

use async_trait::async_trait;
use serde_json::Value;

use super::RateSource;

/// The standard fallback order.
pub fn default_sources(http: reqwest::Client) -> Vec<Box<dyn RateSource>> {
    vec![
        Box::new(ExchangeRateApi { http: http.clone() }),
        Box::new(CurrencyCdn { http: http.clone() }),
        Box::new(OpenErApi { http }),
    ]
}

async fn fetch_json(http: &reqwest::Client, url: &str) -> anyhow::Result<Value> {
    let response = http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("HTTP {status}");
    }
    Ok(response.json().await?)
}

/// api.exchangerate-api.com: rates keyed by upper-case code under "rates".
pub struct ExchangeRateApi {
    http: reqwest::Client,
}

#[async_trait]
impl RateSource for ExchangeRateApi {
    fn name(&self) -> &'static str {
        "ExchangeRate-API"
    }

    async fn fetch(&self, from: &str, _to: &str) -> anyhow::Result<Value> {
        let url = format!("https://api.exchangerate-api.com/v4/latest/{from}");
        fetch_json(&self.http, &url).await
    }

    fn extract_rate(&self, body: &Value, to: &str) -> Option<f64> {
        body.get("rates")?.get(to)?.as_f64()
    }
}

/// fawazahmed0 currency CDN: one document per pair, rate keyed by the
/// lower-case target code.
pub struct CurrencyCdn {
    http: reqwest::Client,
}

#[async_trait]
impl RateSource for CurrencyCdn {
    fn name(&self) -> &'static str {
        "CurrencyAPI"
    }

    async fn fetch(&self, from: &str, to: &str) -> anyhow::Result<Value> {
        let url = format!(
            "https://cdn.jsdelivr.net/gh/fawazahmed0/currency-api@1/latest/currencies/{}/{}.json",
            from.to_ascii_lowercase(),
            to.to_ascii_lowercase()
        );
        fetch_json(&self.http, &url).await
    }

    fn extract_rate(&self, body: &Value, to: &str) -> Option<f64> {
        body.get(to.to_ascii_lowercase())?.as_f64()
    }
}

/// open.er-api.com: same shape as ExchangeRate-API.
pub struct OpenErApi {
    http: reqwest::Client,
}

#[async_trait]
impl RateSource for OpenErApi {
    fn name(&self) -> &'static str {
        "OpenExchangeRates"
    }

    async fn fetch(&self, from: &str, _to: &str) -> anyhow::Result<Value> {
        let url = format!("https://open.er-api.com/v6/latest/{from}");
        fetch_json(&self.http, &url).await
    }

    fn extract_rate(&self, body: &Value, to: &str) -> Option<f64> {
        body.get("rates")?.get(to)?.as_f64()
    }
}
