//! # Domain Types
//!
//! Common data structures and enums used across the application logic.

use chrono::NaiveDateTime;

/// A single to-do entry. Identity is `(owner_id, id)`; ids are assigned by
/// the store and never reused within a store lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub owner_id: i64,
    pub text: String,
    pub created_at: NaiveDateTime,
}

/// Result of a currency conversion. Transient, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    pub converted_amount: f64,
    pub unit_rate: f64,
}

/// Current conditions for a resolved city. Transient, never persisted.
///
/// Open-Meteo reports neither humidity nor a separate feels-like metric, so
/// `humidity_percent` is always "N/A" and `feels_like_celsius` equals the
/// ambient temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub resolved_city_name: String,
    pub description: String,
    pub temperature_celsius: f64,
    pub feels_like_celsius: f64,
    pub humidity_percent: String,
}

/// The primary keyword of a parsed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Start,
    Help,
    Todo,
    Currency,
    Weather,
    Random,
}

/// A parsed inbound command: verb plus its argument tokens. The argument
/// split is capped per verb so task text and city names keep their spaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub verb: Verb,
    pub args: Vec<String>,
}

/// Markup hint attached to a rendered reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Plain,
    Markdown,
}

/// Every user-visible outcome of dispatching a command. The transport layer
/// renders these to text; handlers never build message strings themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Welcome,
    Help,
    RandomMenu,
    CurrencyMenu,
    WeatherMenu,
    TaskAdded {
        text: String,
    },
    TaskList {
        tasks: Vec<Task>,
    },
    TaskDeleted,
    TaskNotFound,
    EmptyTaskText,
    InvalidTaskId,
    TodoAddUsage,
    TodoDeleteUsage,
    TodoUnknownAction,
    Conversion {
        amount: f64,
        from: String,
        to: String,
        result: ConversionResult,
    },
    InvalidAmount,
    RateUnavailable,
    Weather {
        reading: WeatherReading,
    },
    CityNotFound {
        city: String,
    },
    WeatherUnavailable,
    RandomNumber {
        value: i64,
    },
    RandomChoice {
        value: String,
    },
    RandomNumberUsage,
    InvalidNumberFormat,
    InvalidRange,
    InsufficientOptions,
    StorageError,
    Unknown,
}
