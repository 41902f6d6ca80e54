//! # intake-core
//!
//! Core types and traits for the intake bot: [`Bot`], [`Handler`], message, user and chat types,
//! outgoing message description, errors and tracing initialization. Transport-agnostic; used by
//! handler-chain, intake-telegram and intake-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{HandlerError, IntakeError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageContent, OutgoingMessage, ReplyMarkup,
    TextFormat, ToCoreMessage, ToCoreUser, User,
};
