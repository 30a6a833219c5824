//! # Reply Renderer
//!
//! Maps every `Reply` variant to its user-facing text and markup hint.
//! The transport layer sends exactly what comes out of here.

use crate::domain::types::{Markup, Reply};
use crate::strings::{help, messages};

pub fn render(reply: &Reply) -> (String, Markup) {
    use Markup::{Markdown, Plain};

    match reply {
        Reply::Welcome => (help::WELCOME.to_string(), Markdown),
        Reply::Help => (help::MAIN.to_string(), Markdown),
        Reply::RandomMenu => (help::RANDOM_MENU.to_string(), Markdown),
        Reply::CurrencyMenu => (help::CURRENCY_MENU.to_string(), Markdown),
        Reply::WeatherMenu => (help::WEATHER_MENU.to_string(), Markdown),

        Reply::TaskAdded { text } => (messages::task_added(text), Markdown),
        Reply::TaskList { tasks } if tasks.is_empty() => {
            (messages::EMPTY_TASK_LIST.to_string(), Markdown)
        }
        Reply::TaskList { tasks } => (messages::task_list(tasks), Markdown),
        Reply::TaskDeleted => (messages::TASK_DELETED.to_string(), Plain),
        Reply::TaskNotFound => (messages::TASK_NOT_FOUND.to_string(), Plain),
        Reply::EmptyTaskText => (messages::EMPTY_TASK_TEXT.to_string(), Plain),
        Reply::InvalidTaskId => (messages::INVALID_TASK_ID.to_string(), Plain),
        Reply::TodoAddUsage => (messages::TODO_ADD_USAGE.to_string(), Markdown),
        Reply::TodoDeleteUsage => (messages::TODO_DELETE_USAGE.to_string(), Markdown),
        Reply::TodoUnknownAction => (messages::TODO_UNKNOWN_ACTION.to_string(), Plain),

        Reply::Conversion {
            amount,
            from,
            to,
            result,
        } => (
            messages::conversion_result(
                *amount,
                from,
                result.converted_amount,
                to,
                result.unit_rate,
            ),
            Markdown,
        ),
        Reply::InvalidAmount => (messages::INVALID_AMOUNT.to_string(), Plain),
        Reply::RateUnavailable => (messages::RATE_UNAVAILABLE.to_string(), Markdown),

        Reply::Weather { reading } => (messages::weather_report(reading), Markdown),
        Reply::CityNotFound { city } => (messages::city_not_found(city), Plain),
        Reply::WeatherUnavailable => (messages::WEATHER_UNAVAILABLE.to_string(), Plain),

        Reply::RandomNumber { value } => (messages::random_number(*value), Markdown),
        Reply::RandomChoice { value } => (messages::random_choice(value), Markdown),
        Reply::RandomNumberUsage => (messages::RANDOM_NUMBER_USAGE.to_string(), Markdown),
        Reply::InvalidNumberFormat => (messages::INVALID_NUMBER_FORMAT.to_string(), Markdown),
        Reply::InvalidRange => (messages::INVALID_RANGE.to_string(), Plain),
        Reply::InsufficientOptions => (messages::INSUFFICIENT_OPTIONS.to_string(), Plain),

        Reply::StorageError => (messages::STORAGE_ERROR.to_string(), Plain),
        Reply::Unknown => (messages::UNKNOWN_COMMAND.to_string(), Plain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Task;
    use chrono::NaiveDateTime;

    fn task(id: i64, text: &str) -> Task {
        Task {
            id,
            owner_id: 1,
            text: text.to_string(),
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn task_list_numbers_by_id() {
        let reply = Reply::TaskList {
            tasks: vec![task(1, "Buy milk"), task(3, "Call mum")],
        };
        let (text, markup) = render(&reply);
        assert!(text.contains("1. Buy milk"));
        assert!(text.contains("3. Call mum"));
        assert_eq!(markup, Markup::Markdown);
    }

    #[test]
    fn empty_task_list_has_its_own_message() {
        let (text, _) = render(&Reply::TaskList { tasks: vec![] });
        assert!(text.contains("empty"));
    }

    #[test]
    fn plain_replies_carry_no_markup() {
        let (_, markup) = render(&Reply::TaskDeleted);
        assert_eq!(markup, Markup::Plain);
        let (_, markup) = render(&Reply::Unknown);
        assert_eq!(markup, Markup::Plain);
    }
}
