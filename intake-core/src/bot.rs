//! Bot abstraction for sending and forwarding messages.
//!
//! [`Bot`] is transport-agnostic; intake-telegram implements it via teloxide and tests substitute a
//! recording mock.

use async_trait::async_trait;

use crate::error::{HandlerError, Result};
use crate::types::{Chat, Message, OutgoingMessage};

/// Abstraction for outbound traffic. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a message (text, format, keyboard, optional reply target) to the given chat.
    async fn send(&self, chat_id: i64, message: OutgoingMessage) -> Result<()>;

    /// Re-delivers an existing message, by reference, to another chat.
    /// `message_id` is transport-specific (e.g. Telegram numeric string).
    async fn forward_message(&self, to_chat_id: i64, from_chat_id: i64, message_id: &str)
        -> Result<()>;

    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send(chat.id, OutgoingMessage::plain(text)).await
    }

    /// Sends a plain text reply quoting the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send(
            message.chat.id,
            OutgoingMessage::plain(text).reply_to(message.id.clone()),
        )
        .await
    }
}

/// Parses a message id string into an i32. Used when forwarding or replying.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| HandlerError::InvalidMessageId(s.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntakeError;
    use crate::types::{MessageContent, User};
    use chrono::Utc;
    use std::sync::Mutex;

    #[test]
    fn test_parse_message_id_valid() {
        assert_eq!(parse_message_id("123").unwrap(), 123);
        assert_eq!(parse_message_id("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_message_id_invalid() {
        assert!(parse_message_id("").is_err());
        assert!(parse_message_id("abc").is_err());
        assert!(parse_message_id("12.3").is_err());
        assert!(matches!(
            parse_message_id("x").unwrap_err(),
            IntakeError::Handler(HandlerError::InvalidMessageId(id)) if id == "x"
        ));
    }

    struct RecordingBot {
        sent: Mutex<Vec<(i64, OutgoingMessage)>>,
    }

    #[async_trait]
    impl Bot for RecordingBot {
        async fn send(&self, chat_id: i64, message: OutgoingMessage) -> Result<()> {
            self.sent.lock().unwrap().push((chat_id, message));
            Ok(())
        }

        async fn forward_message(&self, _to: i64, _from: i64, _message_id: &str) -> Result<()> {
            Ok(())
        }
    }

    /// **Test: default reply_to sends a plain message to the source chat, quoting the source message.**
    #[tokio::test]
    async fn test_default_reply_to_targets_source_chat() {
        let bot = RecordingBot {
            sent: Mutex::new(Vec::new()),
        };
        let message = Message {
            id: "42".to_string(),
            user: User {
                id: 1,
                username: None,
                first_name: Some("Ann".to_string()),
                last_name: None,
            },
            chat: Chat {
                id: 777,
                chat_type: "private".to_string(),
            },
            content: MessageContent::Text("hi".to_string()),
            created_at: Utc::now(),
        };

        bot.reply_to(&message, "thanks").await.unwrap();
        bot.send_message(&message.chat, "plain").await.unwrap();

        let sent = bot.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].0, 777);
        assert_eq!(sent[0].1.text, "thanks");
        assert_eq!(sent[0].1.reply_to_message_id.as_deref(), Some("42"));
        assert_eq!(sent[1].1.reply_to_message_id, None);
    }
}
