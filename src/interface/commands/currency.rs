//! # Currency Command
//!
//! Handles `/currency <amount> <from> <to>`. Currency codes are uppercased
//! and passed through unvalidated; the providers decide what exists.

use crate::domain::errors::RateError;
use crate::domain::traits::RateService;
use crate::domain::types::Reply;

pub async fn handle(rates: &dyn RateService, args: &[String]) -> Reply {
    let [amount, from, to] = args else {
        return Reply::CurrencyMenu;
    };

    let Ok(amount) = amount.parse::<f64>() else {
        return Reply::InvalidAmount;
    };
    let from = from.to_ascii_uppercase();
    let to = to.to_ascii_uppercase();

    tracing::info!("Conversion request: {} {} -> {}", amount, from, to);

    match rates.convert(&from, &to, amount).await {
        Ok(result) => Reply::Conversion {
            amount,
            from,
            to,
            result,
        },
        Err(RateError::Unavailable) => Reply::RateUnavailable,
    }
}
