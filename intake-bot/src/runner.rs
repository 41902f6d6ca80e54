//! Application entry points: start the bot or print a config summary.

use anyhow::Result;
use intake_core::init_tracing;
use intake_telegram::{register_commands, run_polling, TelegramBotAdapter};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::components::{build_handler_chain, BotComponents};
use crate::config::BotConfig;
use crate::notification::SystemClock;
use crate::session::InMemorySessionStore;
use crate::texts::COMMAND_MENU;

/// Validates config, initialises logging, registers commands and polls until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        admins = config.admin_chat_ids.len(),
        log_file = %config.log_file,
        poll_timeout_secs = config.telegram.poll_timeout_secs,
        restart_delay_secs = config.telegram.restart_delay_secs,
        "Starting intake bot"
    );

    let teloxide_bot = config.telegram.build_bot()?;
    register_commands(&teloxide_bot, COMMAND_MENU).await;

    let components = BotComponents::new(
        Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
        Arc::new(InMemorySessionStore::new()),
        config.admin_chat_ids.clone(),
        Arc::new(SystemClock),
    );
    let handler_chain = build_handler_chain(&components);

    run_polling(teloxide_bot, handler_chain, &config.telegram).await
}

/// Human-readable config summary for `check-config`. Never includes the token.
pub fn config_summary(config: &BotConfig) -> String {
    format!(
        "Config OK\n  admins: {}\n  api url: {}\n  log file: {}\n  poll timeout: {}s\n  restart delay: {}s",
        config.admin_chat_ids.len(),
        config
            .telegram
            .telegram_api_url
            .as_deref()
            .unwrap_or("(Telegram default)"),
        config.log_file,
        config.telegram.poll_timeout_secs,
        config.telegram.restart_delay_secs,
    )
}
