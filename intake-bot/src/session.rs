//! Session store: per-chat guided-intake state.
//!
//! A session exists only while its chat is collecting; there is no archived state. The store is
//! injected into the router handlers; [`InMemorySessionStore`] keeps everything in process memory
//! (lost on restart).

use async_trait::async_trait;
use intake_core::Message;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Guided-intake session for one chat. `messages` is in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    pub collecting: bool,
    pub messages: Vec<Message>,
}

impl ChatSession {
    fn collecting() -> Self {
        Self {
            collecting: true,
            messages: Vec::new(),
        }
    }
}

/// Mapping chat id → [`ChatSession`].
///
/// Callers must not interleave operations for the same chat concurrently; the transport
/// serializes updates per chat.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Inserts or overwrites the chat's session: collecting, empty message list.
    async fn start(&self, chat_id: i64);

    /// Appends to the chat's session. No-op (returns false) when there is no collecting session.
    async fn append(&self, chat_id: i64, message: Message) -> bool;

    /// Snapshot of the chat's session, if any.
    async fn get(&self, chat_id: i64) -> Option<ChatSession>;

    /// Removes the chat's session. Returns whether one existed.
    async fn clear(&self, chat_id: i64) -> bool;

    /// Number of chats with a session.
    async fn len(&self) -> usize;
}

/// In-memory session store guarded by an async RwLock.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<i64, ChatSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn start(&self, chat_id: i64) {
        let mut sessions = self.sessions.write().await;
        let previous = sessions.insert(chat_id, ChatSession::collecting());
        debug!(
            chat_id = chat_id,
            discarded = previous.map(|s| s.messages.len()).unwrap_or(0),
            "Session started"
        );
    }

    async fn append(&self, chat_id: i64, message: Message) -> bool {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&chat_id) {
            Some(session) if session.collecting => {
                session.messages.push(message);
                debug!(
                    chat_id = chat_id,
                    collected = session.messages.len(),
                    "Message appended to session"
                );
                true
            }
            _ => false,
        }
    }

    async fn get(&self, chat_id: i64) -> Option<ChatSession> {
        self.sessions.read().await.get(&chat_id).cloned()
    }

    async fn clear(&self, chat_id: i64) -> bool {
        self.sessions.write().await.remove(&chat_id).is_some()
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
