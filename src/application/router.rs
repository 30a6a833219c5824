//! # Command Router
//!
//! Parses raw message text into a `Command` and dispatches it to the
//! appropriate handler (in `interface/commands`). Services are injected at
//! construction; the router owns no state of its own.

use std::sync::Arc;

use crate::domain::traits::{RateService, TaskStore, WeatherService};
use crate::domain::types::{Command, Reply, Verb};
use crate::interface::commands;
use crate::strings::messages::captions;

pub struct CommandRouter {
    store: Arc<dyn TaskStore>,
    rates: Arc<dyn RateService>,
    weather: Arc<dyn WeatherService>,
}

impl CommandRouter {
    pub fn new(
        store: Arc<dyn TaskStore>,
        rates: Arc<dyn RateService>,
        weather: Arc<dyn WeatherService>,
    ) -> Self {
        Self {
            store,
            rates,
            weather,
        }
    }

    /// Parse and dispatch one inbound message. Never fails: anything the
    /// parser rejects becomes `Reply::Unknown`, and internal handler
    /// failures map to error replies.
    pub async fn handle(&self, user_id: i64, text: &str) -> Reply {
        match parse(text) {
            Some(command) => {
                tracing::info!(
                    "Dispatching verb={:?} args={:?} user={}",
                    command.verb,
                    command.args,
                    user_id
                );
                self.dispatch(&command, user_id).await
            }
            None => Reply::Unknown,
        }
    }

    pub async fn dispatch(&self, command: &Command, user_id: i64) -> Reply {
        match command.verb {
            Verb::Start => Reply::Welcome,
            Verb::Help => Reply::Help,
            Verb::Todo => commands::todo::handle(self.store.as_ref(), user_id, &command.args).await,
            Verb::Currency => commands::currency::handle(self.rates.as_ref(), &command.args).await,
            Verb::Weather => commands::weather::handle(self.weather.as_ref(), &command.args).await,
            Verb::Random => commands::random::handle(&command.args),
        }
    }
}

/// Parse raw message text into a `Command`. Slash commands map by verb
/// (an `@botname` suffix on the verb is stripped, as sent in group chats);
/// the menu keyboard captions map to the equivalent verbs. Anything else is
/// not a command.
pub fn parse(raw: &str) -> Option<Command> {
    let msg = raw.trim();

    if let Some(rest) = msg.strip_prefix('/') {
        let (verb_token, remainder) = match rest.find(char::is_whitespace) {
            Some(idx) => (&rest[..idx], rest[idx..].trim_start()),
            None => (rest, ""),
        };
        let verb_token = verb_token.split('@').next().unwrap_or(verb_token);

        let verb = match verb_token.to_ascii_lowercase().as_str() {
            "start" => Verb::Start,
            "help" => Verb::Help,
            "todo" => Verb::Todo,
            "currency" => Verb::Currency,
            "weather" => Verb::Weather,
            "random" => Verb::Random,
            _ => return None,
        };

        return Some(Command {
            verb,
            args: split_args(verb, remainder),
        });
    }

    // Keyboard captions double as commands.
    match msg {
        captions::MY_TASKS => Some(Command {
            verb: Verb::Todo,
            args: vec!["list".to_string()],
        }),
        captions::CURRENCY => Some(Command {
            verb: Verb::Currency,
            args: Vec::new(),
        }),
        captions::WEATHER => Some(Command {
            verb: Verb::Weather,
            args: Vec::new(),
        }),
        captions::RANDOM => Some(Command {
            verb: Verb::Random,
            args: Vec::new(),
        }),
        _ => None,
    }
}

/// Verb-specific argument split. The token cap keeps free text intact:
/// `todo add Buy milk` must yield ["add", "Buy milk"], and a city name is
/// one argument no matter how many words it has.
fn split_args(verb: Verb, remainder: &str) -> Vec<String> {
    match verb {
        Verb::Start | Verb::Help => Vec::new(),
        Verb::Todo => split_limit(remainder, 2),
        Verb::Currency | Verb::Random => {
            remainder.split_whitespace().map(str::to_string).collect()
        }
        Verb::Weather => {
            if remainder.is_empty() {
                Vec::new()
            } else {
                vec![remainder.to_string()]
            }
        }
    }
}

/// Whitespace split into at most `limit` tokens; the last token keeps the
/// rest of the string verbatim.
fn split_limit(s: &str, limit: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut rest = s.trim();

    while parts.len() + 1 < limit {
        match rest.find(char::is_whitespace) {
            Some(idx) => {
                parts.push(rest[..idx].to_string());
                rest = rest[idx..].trim_start();
            }
            None => break,
        }
    }

    if !rest.is_empty() {
        parts.push(rest.to_string());
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::domain::errors::{RateError, WeatherError};
    use crate::domain::types::{ConversionResult, WeatherReading};
    use crate::infrastructure::store::SqliteTaskStore;
    use crate::interface::render;

    // --- parsing ---

    #[test]
    fn parses_verbs_and_caps_todo_split() {
        let cmd = parse("/todo add Buy milk and bread").unwrap();
        assert_eq!(cmd.verb, Verb::Todo);
        assert_eq!(cmd.args, vec!["add", "Buy milk and bread"]);
    }

    #[test]
    fn city_names_keep_their_spaces() {
        let cmd = parse("/weather New York").unwrap();
        assert_eq!(cmd.verb, Verb::Weather);
        assert_eq!(cmd.args, vec!["New York"]);
    }

    #[test]
    fn currency_splits_fully() {
        let cmd = parse("/currency 100 usd rub").unwrap();
        assert_eq!(cmd.verb, Verb::Currency);
        assert_eq!(cmd.args, vec!["100", "usd", "rub"]);
    }

    #[test]
    fn bot_name_suffix_is_stripped() {
        let cmd = parse("/help@helper_bot").unwrap();
        assert_eq!(cmd.verb, Verb::Help);
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn keyboard_captions_map_to_verbs() {
        let cmd = parse(captions::MY_TASKS).unwrap();
        assert_eq!(cmd.verb, Verb::Todo);
        assert_eq!(cmd.args, vec!["list"]);

        assert_eq!(parse(captions::WEATHER).unwrap().verb, Verb::Weather);
        assert_eq!(parse(captions::CURRENCY).unwrap().verb, Verb::Currency);
        assert_eq!(parse(captions::RANDOM).unwrap().verb, Verb::Random);
    }

    #[test]
    fn unknown_input_is_not_a_command() {
        assert!(parse("/frobnicate 1 2").is_none());
        assert!(parse("hello there").is_none());
        assert!(parse("").is_none());
    }

    // --- stub services ---

    struct StubRates {
        rate: f64,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl crate::domain::traits::RateService for StubRates {
        async fn convert(
            &self,
            _from: &str,
            _to: &str,
            amount: f64,
        ) -> Result<ConversionResult, RateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ConversionResult {
                converted_amount: amount * self.rate,
                unit_rate: self.rate,
            })
        }
    }

    struct DownRates;

    #[async_trait]
    impl crate::domain::traits::RateService for DownRates {
        async fn convert(
            &self,
            _from: &str,
            _to: &str,
            _amount: f64,
        ) -> Result<ConversionResult, RateError> {
            Err(RateError::Unavailable)
        }
    }

    enum StubWeather {
        Found,
        NoCity,
        Down,
    }

    #[async_trait]
    impl crate::domain::traits::WeatherService for StubWeather {
        async fn lookup(&self, city: &str) -> Result<Option<WeatherReading>, WeatherError> {
            match self {
                StubWeather::Found => Ok(Some(WeatherReading {
                    resolved_city_name: city.to_string(),
                    description: "clear sky".to_string(),
                    temperature_celsius: 21.3,
                    feels_like_celsius: 21.3,
                    humidity_percent: "N/A".to_string(),
                })),
                StubWeather::NoCity => Ok(None),
                StubWeather::Down => {
                    Err(WeatherError::Geocoding("connection refused".to_string()))
                }
            }
        }
    }

    fn router_with(
        dir: &tempfile::TempDir,
        rates: Arc<dyn crate::domain::traits::RateService>,
        weather: Arc<dyn crate::domain::traits::WeatherService>,
    ) -> CommandRouter {
        let store = Arc::new(SqliteTaskStore::new(dir.path().join("tasks.db")).unwrap());
        CommandRouter::new(store, rates, weather)
    }

    fn default_router(dir: &tempfile::TempDir) -> CommandRouter {
        router_with(
            dir,
            Arc::new(StubRates {
                rate: 90.5,
                calls: AtomicUsize::new(0),
            }),
            Arc::new(StubWeather::Found),
        )
    }

    // --- dispatch scenarios ---

    #[tokio::test]
    async fn todo_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let router = default_router(&dir);

        let reply = router.handle(42, "/todo add Buy milk").await;
        assert_eq!(
            reply,
            Reply::TaskAdded {
                text: "Buy milk".to_string()
            }
        );

        let reply = router.handle(42, "/todo list").await;
        let (text, _) = render::render(&reply);
        assert!(text.contains("1. Buy milk"));

        assert_eq!(router.handle(42, "/todo delete 1").await, Reply::TaskDeleted);

        // Empty again.
        let reply = router.handle(42, "/todo list").await;
        assert!(matches!(&reply, Reply::TaskList { tasks } if tasks.is_empty()));
    }

    #[tokio::test]
    async fn bare_todo_lists_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let router = default_router(&dir);

        router.handle(1, "/todo add something").await;
        let reply = router.handle(1, "/todo").await;
        assert!(matches!(&reply, Reply::TaskList { tasks } if tasks.len() == 1));
    }

    #[tokio::test]
    async fn todo_validation_replies() {
        let dir = tempfile::tempdir().unwrap();
        let router = default_router(&dir);

        assert_eq!(router.handle(1, "/todo add").await, Reply::TodoAddUsage);
        assert_eq!(
            router.handle(1, "/todo delete abc").await,
            Reply::InvalidTaskId
        );
        assert_eq!(
            router.handle(1, "/todo delete 99").await,
            Reply::TaskNotFound
        );
        assert_eq!(
            router.handle(1, "/todo frobnicate x").await,
            Reply::TodoUnknownAction
        );
    }

    #[tokio::test]
    async fn whitespace_only_task_text_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let router = default_router(&dir);

        let command = Command {
            verb: Verb::Todo,
            args: vec!["add".to_string(), "   ".to_string()],
        };
        assert_eq!(router.dispatch(&command, 1).await, Reply::EmptyTaskText);
    }

    #[tokio::test]
    async fn tasks_are_scoped_per_user() {
        let dir = tempfile::tempdir().unwrap();
        let router = default_router(&dir);

        router.handle(1, "/todo add mine").await;
        // Another user cannot delete it.
        assert_eq!(router.handle(2, "/todo delete 1").await, Reply::TaskNotFound);
        let reply = router.handle(1, "/todo list").await;
        assert!(matches!(&reply, Reply::TaskList { tasks } if tasks.len() == 1));
    }

    #[tokio::test]
    async fn currency_conversion_renders_amount_and_rate() {
        let dir = tempfile::tempdir().unwrap();
        let router = default_router(&dir);

        let reply = router.handle(1, "/currency 100 usd rub").await;
        let (text, _) = render::render(&reply);
        assert!(text.contains("100.0 USD = 9050.00 RUB"), "got: {text}");
        assert!(text.contains("1 USD = 90.5000 RUB"), "got: {text}");
    }

    #[tokio::test]
    async fn currency_validation_replies() {
        let dir = tempfile::tempdir().unwrap();
        let router = default_router(&dir);

        assert_eq!(router.handle(1, "/currency 100 USD").await, Reply::CurrencyMenu);
        assert_eq!(
            router.handle(1, "/currency abc USD RUB").await,
            Reply::InvalidAmount
        );
    }

    #[tokio::test]
    async fn currency_reports_unavailable_providers() {
        let dir = tempfile::tempdir().unwrap();
        let router = router_with(&dir, Arc::new(DownRates), Arc::new(StubWeather::Found));

        assert_eq!(
            router.handle(1, "/currency 1 USD EUR").await,
            Reply::RateUnavailable
        );
    }

    #[tokio::test]
    async fn weather_distinguishes_missing_city_from_outage() {
        let dir = tempfile::tempdir().unwrap();

        let router = router_with(
            &dir,
            Arc::new(DownRates),
            Arc::new(StubWeather::NoCity),
        );
        assert_eq!(
            router.handle(1, "/weather Atlantis").await,
            Reply::CityNotFound {
                city: "Atlantis".to_string()
            }
        );

        let router = router_with(&dir, Arc::new(DownRates), Arc::new(StubWeather::Down));
        assert_eq!(
            router.handle(1, "/weather Atlantis").await,
            Reply::WeatherUnavailable
        );
    }

    #[tokio::test]
    async fn weather_without_city_shows_usage() {
        let dir = tempfile::tempdir().unwrap();
        let router = default_router(&dir);

        assert_eq!(router.handle(1, "/weather").await, Reply::WeatherMenu);
    }

    #[tokio::test]
    async fn random_number_validates_before_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let router = default_router(&dir);

        assert_eq!(
            router.handle(1, "/random number 50 10").await,
            Reply::InvalidRange
        );
        assert_eq!(
            router.handle(1, "/random number one two").await,
            Reply::InvalidNumberFormat
        );
        assert_eq!(
            router.handle(1, "/random number 5").await,
            Reply::RandomNumberUsage
        );

        match router.handle(1, "/random number 1 100").await {
            Reply::RandomNumber { value } => assert!((1..=100).contains(&value)),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[tokio::test]
    async fn random_choice_needs_two_options() {
        let dir = tempfile::tempdir().unwrap();
        let router = default_router(&dir);

        assert_eq!(
            router.handle(1, "/random choice pizza").await,
            Reply::InsufficientOptions
        );

        match router.handle(1, "/random choice pizza sushi").await {
            Reply::RandomChoice { value } => {
                assert!(value == "pizza" || value == "sushi");
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[tokio::test]
    async fn bare_random_shows_menu() {
        let dir = tempfile::tempdir().unwrap();
        let router = default_router(&dir);

        assert_eq!(router.handle(1, "/random").await, Reply::RandomMenu);
        assert_eq!(router.handle(1, "/random juggle").await, Reply::RandomMenu);
    }

    #[tokio::test]
    async fn unknown_text_gets_unknown_reply() {
        let dir = tempfile::tempdir().unwrap();
        let router = default_router(&dir);

        assert_eq!(router.handle(1, "what's up").await, Reply::Unknown);
        assert_eq!(router.handle(1, "/frobnicate").await, Reply::Unknown);
    }

    #[tokio::test]
    async fn start_and_help_are_static() {
        let dir = tempfile::tempdir().unwrap();
        let router = default_router(&dir);

        assert_eq!(router.handle(1, "/start").await, Reply::Welcome);
        assert_eq!(router.handle(1, "/help").await, Reply::Help);
    }
}
