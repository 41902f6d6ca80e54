//! Inbound message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// What an inbound message carries. Attachments keep only the metadata the bot reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageContent {
    Text(String),
    Photo {
        caption: Option<String>,
    },
    Document {
        file_name: Option<String>,
        caption: Option<String>,
    },
    /// Any other kind (sticker, voice, location, ...), identified by its transport name.
    Other {
        kind: String,
    },
}

impl MessageContent {
    /// Short kind name: "text", "photo", "document" or the transport name for other kinds.
    pub fn kind_name(&self) -> &str {
        match self {
            MessageContent::Text(_) => "text",
            MessageContent::Photo { .. } => "photo",
            MessageContent::Document { .. } => "document",
            MessageContent::Other { kind } => kind.as_str(),
        }
    }
}

/// A single inbound message: sender, chat, content and arrival time.
///
/// The bot never mutates messages; originals are re-delivered by `chat.id` + `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: MessageContent,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Text body for text messages; `None` for every other kind (captions are not text).
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text(body) => Some(body),
            _ => None,
        }
    }
}
