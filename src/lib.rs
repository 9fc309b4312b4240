use anyhow::{Context, Result};
use teloxide::{prelude::*, utils::command::BotCommands};

pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod list;
pub mod messages;
pub mod service;
pub mod store;
pub mod system_info;
pub mod utils;

pub use commands::Command;
pub use config::Config;
pub use error::{ConfigError, StoreError};
pub use list::{Action, InputMode, ListState, Markup, Outgoing, PendingPurchase, Reply};
pub use service::ListService;
pub use store::{ListRecord, Store};
pub use system_info::get_system_info;

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

/// Log filter built from `RUST_LOG` once `.env` has been applied.
pub fn env_filter() -> tracing_subscriber::EnvFilter {
    dotenvy::dotenv().ok();
    tracing_subscriber::EnvFilter::from_default_env()
}

pub async fn run() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();

    let config = Config::from_env()?;
    tracing::info!(build = %get_system_info(), ?config, "Starting shared shopping list bot...");

    // A corrupt store stops startup instead of being replaced by an empty list.
    let store = Store::open(&config.store_url)
        .await
        .context("opening list store")?;
    let service = ListService::load(store)
        .await
        .context("loading shared list")?;

    let bot = Bot::new(config.token);
    bot.set_my_commands(Command::bot_commands())
        .await
        .context("registering bot commands")?;

    Dispatcher::builder(bot, handlers::schema())
        .dependencies(dptree::deps![service])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("Dispatcher stopped");
    Ok(())
}
