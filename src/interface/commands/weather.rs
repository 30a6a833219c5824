//! # Weather Command
//!
//! Handles `/weather <city...>`. A city with no geocoding match is a
//! distinct outcome from the weather service being down.

use crate::domain::traits::WeatherService;
use crate::domain::types::Reply;

pub async fn handle(weather: &dyn WeatherService, args: &[String]) -> Reply {
    let city = args.join(" ");
    let city = city.trim();
    if city.is_empty() {
        return Reply::WeatherMenu;
    }

    match weather.lookup(city).await {
        Ok(Some(reading)) => Reply::Weather { reading },
        Ok(None) => Reply::CityNotFound {
            city: city.to_string(),
        },
        Err(e) => {
            tracing::warn!("Weather lookup for '{}' failed: {}", city, e);
            Reply::WeatherUnavailable
        }
    }
}
