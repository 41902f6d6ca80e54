//! Core types: user, chat, message, outgoing message, handler response, and Handler trait.
//!
//! One file per main type.

mod chat;
mod handler;
mod message;
mod outgoing;
mod response;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::{Message, MessageContent};
pub use outgoing::{OutgoingMessage, ReplyMarkup, TextFormat};
pub use response::HandlerResponse;
pub use user::User;
