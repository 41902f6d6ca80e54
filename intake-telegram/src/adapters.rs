//! Adapters from Telegram (teloxide) types to intake_core types.
//! Depends only on teloxide and intake_core type definitions.

use intake_core::{Chat, Message, MessageContent, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.0.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: self.chat_type().to_string(),
            },
            content: self.content(),
            created_at: self.0.date,
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    fn chat_type(&self) -> &'static str {
        let chat = &self.0.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_group() {
            "group"
        } else if chat.is_supergroup() {
            "supergroup"
        } else if chat.is_channel() {
            "channel"
        } else {
            "unknown"
        }
    }

    fn content(&self) -> MessageContent {
        let msg = self.0;
        let caption = msg.caption().map(str::to_string);
        if let Some(text) = msg.text() {
            MessageContent::Text(text.to_string())
        } else if msg.photo().is_some() {
            MessageContent::Photo { caption }
        } else if let Some(doc) = msg.document() {
            MessageContent::Document {
                file_name: doc.file_name.clone(),
                caption,
            }
        } else {
            MessageContent::Other {
                kind: self.other_kind_name().to_string(),
            }
        }
    }

    /// Bot API content-type name for kinds the intake flow does not relay itself.
    fn other_kind_name(&self) -> &'static str {
        let msg = self.0;
        if msg.sticker().is_some() {
            "sticker"
        } else if msg.voice().is_some() {
            "voice"
        } else if msg.video_note().is_some() {
            "video_note"
        } else if msg.video().is_some() {
            "video"
        } else if msg.audio().is_some() {
            "audio"
        } else if msg.animation().is_some() {
            "animation"
        } else if msg.contact().is_some() {
            "contact"
        } else if msg.venue().is_some() {
            "venue"
        } else if msg.location().is_some() {
            "location"
        } else if msg.poll().is_some() {
            "poll"
        } else if msg.dice().is_some() {
            "dice"
        } else {
            "unknown"
        }
    }
}
