//! Mock implementation of [`intake_core::Bot`] that records every outbound call.
//!
//! Chats listed as failing make the corresponding call return an error after it is recorded,
//! so tests can check both what was attempted and how failures were handled.

use async_trait::async_trait;
use intake_core::{Bot, IntakeError, OutgoingMessage, Result};
use std::collections::HashSet;
use std::sync::Mutex;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Sent {
        chat_id: i64,
        message: OutgoingMessage,
    },
    Forwarded {
        to_chat_id: i64,
        from_chat_id: i64,
        message_id: String,
    },
}

#[derive(Default)]
pub struct MockBot {
    events: Mutex<Vec<Event>>,
    failing_sends: HashSet<i64>,
    failing_forwards: HashSet<i64>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `send` to `chat_id` fails.
    pub fn fail_sends_to(mut self, chat_id: i64) -> Self {
        self.failing_sends.insert(chat_id);
        self
    }

    /// Every `forward_message` to `chat_id` fails.
    pub fn fail_forwards_to(mut self, chat_id: i64) -> Self {
        self.failing_forwards.insert(chat_id);
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Messages sent to `chat_id`, in order.
    pub fn sent_to(&self, chat_id: i64) -> Vec<OutgoingMessage> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Sent { chat_id: c, message } if c == chat_id => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Ids of messages forwarded to `chat_id`, in order.
    pub fn forwarded_to(&self, chat_id: i64) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Forwarded {
                    to_chat_id,
                    message_id,
                    ..
                } if to_chat_id == chat_id => Some(message_id),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send(&self, chat_id: i64, message: OutgoingMessage) -> Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(Event::Sent { chat_id, message });
        if self.failing_sends.contains(&chat_id) {
            return Err(IntakeError::Bot(format!("chat {} unreachable", chat_id)));
        }
        Ok(())
    }

    async fn forward_message(
        &self,
        to_chat_id: i64,
        from_chat_id: i64,
        message_id: &str,
    ) -> Result<()> {
        self.events.lock().unwrap().push(Event::Forwarded {
            to_chat_id,
            from_chat_id,
            message_id: message_id.to_string(),
        });
        if self.failing_forwards.contains(&to_chat_id) {
            return Err(IntakeError::Bot(format!("forward to {} blocked", to_chat_id)));
        }
        Ok(())
    }
}
