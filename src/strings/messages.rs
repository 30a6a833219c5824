//! # Messages
//!
//! Constant strings and format functions for user-facing replies.

use crate::domain::types::{Task, WeatherReading};

/// Keyboard captions. The parser also accepts these as command synonyms.
pub mod captions {
    pub const MY_TASKS: &str = "My Tasks";
    pub const CURRENCY: &str = "Currency";
    pub const WEATHER: &str = "Weather";
    pub const RANDOM: &str = "Random";
}

pub const UNKNOWN_COMMAND: &str = "I don't understand that. Use the menu buttons or /help";
pub const STORAGE_ERROR: &str = "❌ Something went wrong while processing your request";

// Tasks

pub const TASK_DELETED: &str = "✅ Task deleted";
pub const TASK_NOT_FOUND: &str = "❌ Task not found";
pub const INVALID_TASK_ID: &str = "❌ Invalid task number";
pub const EMPTY_TASK_TEXT: &str = "❌ Task text cannot be empty";
pub const TODO_ADD_USAGE: &str = "❌ Name the task: `/todo add Your task`";
pub const TODO_DELETE_USAGE: &str = "❌ Name the task number: `/todo delete 1`";
pub const TODO_UNKNOWN_ACTION: &str = "❌ Unknown action. Use: add, list or delete";
pub const EMPTY_TASK_LIST: &str =
    "📝 *Your task list is empty*\n\nAdd one: `/todo add Your task`";

pub fn task_added(text: &str) -> String {
    format!("✅ Task added: *{text}*")
}

pub fn task_list(tasks: &[Task]) -> String {
    let mut text = String::from("📝 *Your tasks:*\n\n");
    for task in tasks {
        text.push_str(&format!("{}. {}\n", task.id, task.text));
    }
    text.push_str("\nDelete one: `/todo delete <number>`");
    text
}

// Currency

pub const INVALID_AMOUNT: &str = "❌ Invalid amount. Use a number, e.g. 100 or 50.5";
pub const RATE_UNAVAILABLE: &str = concat!(
    "❌ Could not fetch the exchange rate.\n",
    "\n",
    "*Possible reasons:*\n",
    "• Wrong currency codes\n",
    "• Temporary API trouble\n",
    "• Try a different pair\n",
    "\n",
    "*Example:* `/currency 1 USD EUR`"
);

pub fn conversion_result(amount: f64, from: &str, converted: f64, to: &str, rate: f64) -> String {
    // {:?} keeps the decimal point on whole amounts (100 echoes back as 100.0).
    format!(
        "💱 *Conversion result:*\n\n*{amount:?} {from} = {converted:.2} {to}*\nRate: 1 {from} = {rate:.4} {to}"
    )
}

// Weather

pub const WEATHER_UNAVAILABLE: &str =
    "❌ Could not fetch the weather. Please try again later";

pub fn city_not_found(city: &str) -> String {
    format!("❌ City '{city}' not found")
}

const WEATHER_EMOJI: [(&str, &str); 8] = [
    ("clear", "☀️"),
    ("cloud", "☁️"),
    ("overcast", "☁️"),
    ("thunderstorm", "⛈️"),
    ("drizzle", "🌦️"),
    ("rain", "🌧️"),
    ("snow", "❄️"),
    ("fog", "🌫️"),
];

fn weather_emoji(description: &str) -> &'static str {
    WEATHER_EMOJI
        .iter()
        .find(|(keyword, _)| description.contains(keyword))
        .map(|(_, emoji)| *emoji)
        .unwrap_or("🌤️")
}

pub fn weather_report(reading: &WeatherReading) -> String {
    format!(
        "{} *Weather in {}*\n\n*Conditions:* {}\n*Temperature:* {:.1}°C\n*Feels like:* {:.1}°C\n*Humidity:* {}%",
        weather_emoji(&reading.description),
        reading.resolved_city_name,
        capitalize(&reading.description),
        reading.temperature_celsius,
        reading.feels_like_celsius,
        reading.humidity_percent,
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// Random

pub const INVALID_RANGE: &str = "❌ The first number must be less than the second";
pub const INVALID_NUMBER_FORMAT: &str = "❌ Invalid numbers. Use: `/random number 1 100`";
pub const RANDOM_NUMBER_USAGE: &str = "❌ Name the range: `/random number 1 100`";
pub const INSUFFICIENT_OPTIONS: &str = "❌ Name at least 2 options to choose from";

pub fn random_number(value: i64) -> String {
    format!("🎲 Random number: *{value}*")
}

pub fn random_choice(value: &str) -> String {
    format!("🎯 I pick: *{value}*")
}
