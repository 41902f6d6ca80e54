//! Component factory: assembles the session store, fanout and handler chain around a [`Bot`].

use handler_chain::HandlerChain;
use intake_core::Bot;
use std::sync::Arc;

use crate::fanout::AdminFanout;
use crate::handlers::{CommandHandler, ConfirmButtonHandler, IntakeHandler, LoggingHandler};
use crate::notification::Clock;
use crate::session::SessionStore;

/// Shared dependencies of the router handlers.
#[derive(Clone)]
pub struct BotComponents {
    pub bot: Arc<dyn Bot>,
    pub sessions: Arc<dyn SessionStore>,
    pub fanout: AdminFanout,
}

impl BotComponents {
    pub fn new(
        bot: Arc<dyn Bot>,
        sessions: Arc<dyn SessionStore>,
        admin_chat_ids: Vec<i64>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let fanout = AdminFanout::new(bot.clone(), admin_chat_ids, clock);
        Self {
            bot,
            sessions,
            fanout,
        }
    }
}

/// Builds the chain in routing order: logging, commands, confirmation buttons, intake.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(
            components.bot.clone(),
            components.sessions.clone(),
        )))
        .add_handler(Arc::new(ConfirmButtonHandler::new(
            components.bot.clone(),
            components.sessions.clone(),
            components.fanout.clone(),
        )))
        .add_handler(Arc::new(IntakeHandler::new(
            components.bot.clone(),
            components.sessions.clone(),
            components.fanout.clone(),
        )))
}
