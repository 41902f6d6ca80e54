//! Wraps teloxide::Bot and implements [`intake_core::Bot`]. Production code sends messages via
//! Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use intake_core::{
    parse_message_id, Bot as CoreBot, IntakeError, OutgoingMessage, ReplyMarkup, Result,
    TextFormat,
};
use teloxide::prelude::*;
use teloxide::types::{
    ChatId, KeyboardButton, KeyboardMarkup, KeyboardRemove, MessageId, ParseMode, ReplyParameters,
};

/// Thin wrapper around teloxide::Bot that implements the core Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Builds a resized reply keyboard from rows of button labels.
fn keyboard_markup(rows: Vec<Vec<String>>) -> KeyboardMarkup {
    KeyboardMarkup::new(
        rows.into_iter()
            .map(|row| row.into_iter().map(KeyboardButton::new).collect::<Vec<_>>()),
    )
    .resize_keyboard()
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send(&self, chat_id: i64, message: OutgoingMessage) -> Result<()> {
        let mut req = self.bot.send_message(ChatId(chat_id), message.text);
        if message.format == TextFormat::Html {
            req = req.parse_mode(ParseMode::Html);
        }
        match message.markup {
            ReplyMarkup::None => {}
            ReplyMarkup::Keyboard(rows) => req = req.reply_markup(keyboard_markup(rows)),
            ReplyMarkup::RemoveKeyboard => req = req.reply_markup(KeyboardRemove::new()),
        }
        if let Some(id) = message.reply_to_message_id {
            let id = parse_message_id(&id)?;
            req = req.reply_parameters(ReplyParameters::new(MessageId(id)));
        }
        req.await.map_err(|e| IntakeError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn forward_message(
        &self,
        to_chat_id: i64,
        from_chat_id: i64,
        message_id: &str,
    ) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .forward_message(ChatId(to_chat_id), ChatId(from_chat_id), MessageId(id))
            .await
            .map_err(|e| IntakeError::Bot(e.to_string()))?;
        Ok(())
    }
}
