//! # Main Entry Point
//!
//! Initializes the application:
//! - Domain: Configuration and Types
//! - Infrastructure: SQLite store, Rate/Weather clients, Telegram
//! - Application: Router, Random
//! - Interface: Command Handlers, Rendering
//!
//! All services are constructed here and injected into the router; nothing
//! in the core reaches for process-wide singletons.

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::sync::Arc;
use teloxide::{dptree, prelude::*};

use crate::application::router::CommandRouter;
use crate::domain::config::AppConfig;
use crate::infrastructure::rates::RateClient;
use crate::infrastructure::store::SqliteTaskStore;
use crate::infrastructure::telegram;
use crate::infrastructure::weather::OpenMeteoClient;

#[derive(Parser)]
#[command(name = "helperbot", about = "Telegram assistant bot")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "data/config.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    // Ensure data directory exists (log file and default DB live there)
    if !std::path::Path::new("data").exists() {
        fs::create_dir("data").context("Failed to create data directory")?;
    }

    let file_appender = tracing_appender::rolling::never("data", "session.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("info,teloxide=warn,hyper=warn,reqwest=warn")
    });

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .init();

    // 3. Credential (the only startup-fatal condition)
    let token_env = &config.services.telegram.token_env;
    let token = std::env::var(token_env)
        .with_context(|| format!("{token_env} is not set - the bot cannot start without it"))?;

    // 4. Initialize Infrastructure
    let store = Arc::new(
        SqliteTaskStore::new(&config.storage.db_path)
            .with_context(|| format!("Failed to open task database {}", config.storage.db_path))?,
    );

    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.http.timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let rates = Arc::new(RateClient::with_default_sources(http.clone()));
    let weather = Arc::new(OpenMeteoClient::new(http, &config.weather));

    // 5. Application Components
    let router = Arc::new(CommandRouter::new(store, rates, weather));

    tracing::info!(
        "Starting helperbot (db: {}, weather: {})",
        config.storage.db_path,
        config.weather.forecast_url
    );

    // 6. Telegram Event Loop
    let bot = Bot::new(token);

    let handler = Update::filter_message().endpoint(
        |bot: Bot, msg: Message, router: Arc<CommandRouter>| async move {
            let Some(text) = msg.text() else {
                return respond(());
            };
            tracing::info!("Received message from {}: {}", msg.chat.id, text);

            // Dispatch never fails; only the send can, and a failed send
            // must not take the process down.
            let reply = router.handle(msg.chat.id.0, text).await;
            if let Err(e) = telegram::send_reply(&bot, msg.chat.id, &reply).await {
                tracing::error!("Failed to send reply to {}: {}", msg.chat.id, e);
            }

            respond(())
        },
    );

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![router])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
