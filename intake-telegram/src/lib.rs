//! # intake-telegram
//!
//! Telegram transport layer: adapters (teloxide → core types), [`intake_core::Bot`] implementation,
//! transport config, and the supervised long-polling runner that feeds a [`handler_chain::HandlerChain`].
//! No intake business logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod runner;
mod supervisor;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{register_commands, run_polling, PollingErrorHandler};
pub use supervisor::supervise;
