//! # Intake bot
//!
//! Telegram bot for a single operator (an attorney): clients either write free-form messages,
//! which are relayed to the admins at once, or use `/consult` to collect several messages and
//! submit them with a confirmation button. Every relayed message becomes an HTML summary card
//! followed by the forwarded original, sent to each admin chat.

pub mod classifier;
pub mod cli;
pub mod components;
pub mod config;
pub mod fanout;
pub mod handlers;
pub mod notification;
pub mod runner;
pub mod session;
pub mod texts;

pub use classifier::{classify, Classification};
pub use cli::{Cli, Commands};
pub use components::{build_handler_chain, BotComponents};
pub use config::{parse_admin_ids, BotConfig};
pub use fanout::{AdminDelivery, AdminFanout, DeliveryFailure, DeliveryStage, FanoutReport};
pub use handlers::{Command, CommandHandler, ConfirmButtonHandler, IntakeHandler, LoggingHandler};
pub use notification::{format_notification, Clock, Source, SystemClock};
pub use runner::{config_summary, run_bot};
pub use session::{ChatSession, InMemorySessionStore, SessionStore};
