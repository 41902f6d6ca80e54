use async_trait::async_trait;
use intake_core::{Bot, Handler, HandlerResponse, Message, OutgoingMessage, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::send_reply;
use crate::session::SessionStore;
use crate::texts::{consult_text, help_text, BTN_MORE, BTN_SEND, START_TEXT};

/// Commands the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Consult,
}

impl Command {
    /// Parses the leading command word of a text. Returns `Some(None)` for an unrecognised
    /// command and `None` when the text is not a command at all.
    ///
    /// `/consult@my_bot` is accepted; anything after the first whitespace is ignored.
    pub fn parse(text: &str) -> Option<Option<Command>> {
        let rest = text.strip_prefix('/')?;
        let word = rest.split_whitespace().next().unwrap_or("");
        let name = word.split('@').next().unwrap_or("");
        let command = match name {
            "start" => Some(Command::Start),
            "help" => Some(Command::Help),
            "consult" => Some(Command::Consult),
            _ => None,
        };
        Some(command)
    }
}

/// Handles `/start`, `/help` and `/consult`; swallows unknown commands without replying.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    sessions: Arc<dyn SessionStore>,
}

impl CommandHandler {
    pub fn new(bot: Arc<dyn Bot>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { bot, sessions }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(parsed) = message.text().and_then(Command::parse) else {
            return Ok(HandlerResponse::Continue);
        };
        let Some(command) = parsed else {
            debug!(chat_id = message.chat.id, "Ignoring unknown command");
            return Ok(HandlerResponse::Stop);
        };

        let reply = match command {
            Command::Start => OutgoingMessage::plain(START_TEXT).reply_to(message.id.clone()),
            Command::Help => OutgoingMessage::html(help_text()).reply_to(message.id.clone()),
            Command::Consult => {
                self.sessions.start(message.chat.id).await;
                info!(chat_id = message.chat.id, "Guided intake started");
                OutgoingMessage::html(consult_text()).with_keyboard([BTN_SEND, BTN_MORE])
            }
        };

        let text = reply.text.clone();
        send_reply(self.bot.as_ref(), message, reply).await;
        Ok(HandlerResponse::Reply(text))
    }
}
