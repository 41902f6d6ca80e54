//! Polling runner: converts teloxide messages to core::Message and passes them to HandlerChain.
//!
//! Updates come from a long-polling listener. teloxide's Dispatcher handles updates of one chat
//! sequentially and different chats concurrently; each message is handled to completion (no
//! extra spawn), which keeps per-chat arrival order for the session store.

use anyhow::Result;
use futures::future::BoxFuture;
use handler_chain::HandlerChain;
use intake_core::ToCoreMessage;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;
use teloxide::error_handlers::ErrorHandler;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use teloxide::update_listeners::Polling;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::config::TelegramConfig;
use super::supervisor::supervise;

/// Update listener error handler: logs the transport error, then pauses a fixed delay before
/// polling resumes. There is no retry limit.
pub struct PollingErrorHandler {
    delay: Duration,
}

impl PollingErrorHandler {
    pub fn new(delay: Duration) -> Arc<Self> {
        Arc::new(Self { delay })
    }
}

impl<E> ErrorHandler<E> for PollingErrorHandler
where
    E: Debug,
{
    fn handle_error(self: Arc<Self>, error: E) -> BoxFuture<'static, ()> {
        error!(
            error = ?error,
            delay_ms = self.delay.as_millis() as u64,
            "Update listener error, pausing before polling resumes"
        );
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
        })
    }
}

/// Registers the command menu shown by Telegram clients. Failure is logged, not fatal.
pub async fn register_commands(bot: &teloxide::Bot, commands: &[(&str, &str)]) {
    let commands: Vec<BotCommand> = commands
        .iter()
        .map(|(name, description)| BotCommand::new(*name, *description))
        .collect();
    match bot.set_my_commands(commands).await {
        Ok(_) => info!("Bot commands registered"),
        Err(e) => warn!(error = %e, "Failed to register bot commands"),
    }
}

/// Runs the bot until shutdown: logs the bot identity, then long-polls under [`supervise`].
/// Listener errors pause polling for `config.restart_delay()`; a crashed dispatcher is rebuilt
/// after the same delay.
#[instrument(skip(bot, handler_chain, config))]
pub async fn run_polling(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    config: &TelegramConfig,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone().unwrap_or_default();
            info!(username = %username, "Bot identity resolved");
        }
        Err(e) => warn!(error = %e, "getMe failed, starting polling anyway"),
    }

    let poll_timeout = config.poll_timeout();
    let restart_delay = config.restart_delay();

    let attempts = supervise(restart_delay, move || {
        dispatch(bot.clone(), handler_chain.clone(), poll_timeout, restart_delay)
    })
    .await;

    info!(attempts = attempts, "Polling finished");
    Ok(())
}

async fn dispatch(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    poll_timeout: Duration,
    restart_delay: Duration,
) {
    let listener = Polling::builder(bot.clone()).timeout(poll_timeout).build();
    let handler = Update::filter_message().endpoint(handle_message);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(listener, PollingErrorHandler::new(restart_delay))
        .await;
}

async fn handle_message(
    msg: teloxide::types::Message,
    handler_chain: HandlerChain,
) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();

    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        message_id = %core_msg.id,
        kind = %core_msg.content.kind_name(),
        "Received message"
    );

    if let Err(e) = handler_chain.handle(&core_msg).await {
        error!(
            error = %e,
            chat_id = core_msg.chat.id,
            user_id = core_msg.user.id,
            "Handler chain failed"
        );
    }

    respond(())
}
