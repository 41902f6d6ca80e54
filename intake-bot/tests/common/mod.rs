//! Shared fixtures for intake-bot integration tests.
#![allow(dead_code)]

pub mod mock_bot;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use handler_chain::HandlerChain;
use intake_bot::{build_handler_chain, BotComponents, Clock, InMemorySessionStore, SessionStore};
use intake_core::{Chat, Message, MessageContent, User};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

pub use mock_bot::MockBot;

pub const CLIENT_CHAT: i64 = 5001;
pub const ADMIN_A: i64 = 9001;
pub const ADMIN_B: i64 = 9002;

/// Clock that always returns the same instant.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 17)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap()
}

/// Chain wired to a mock bot, in-memory sessions and a fixed clock.
pub struct Harness {
    pub bot: Arc<MockBot>,
    pub sessions: Arc<InMemorySessionStore>,
    pub chain: HandlerChain,
    next_id: AtomicU32,
}

impl Harness {
    pub fn new(admins: Vec<i64>) -> Self {
        Self::with_bot(MockBot::new(), admins)
    }

    pub fn with_bot(bot: MockBot, admins: Vec<i64>) -> Self {
        let bot = Arc::new(bot);
        let sessions = Arc::new(InMemorySessionStore::new());
        let components = BotComponents::new(
            bot.clone(),
            sessions.clone(),
            admins,
            Arc::new(FixedClock(fixed_time())),
        );
        Self {
            bot,
            sessions,
            chain: build_handler_chain(&components),
            next_id: AtomicU32::new(1),
        }
    }

    pub fn message(&self, content: MessageContent) -> Message {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Message {
            id: id.to_string(),
            user: User {
                id: CLIENT_CHAT,
                username: Some("client_ann".to_string()),
                first_name: Some("Ann".to_string()),
                last_name: Some("Lee".to_string()),
            },
            chat: Chat {
                id: CLIENT_CHAT,
                chat_type: "private".to_string(),
            },
            content,
            created_at: Utc::now(),
        }
    }

    pub fn text(&self, body: &str) -> Message {
        self.message(MessageContent::Text(body.to_string()))
    }

    /// Builds a text message, runs it through the chain and returns it.
    pub async fn send_text(&self, body: &str) -> Message {
        let message = self.text(body);
        self.chain.handle(&message).await.unwrap();
        message
    }

    pub async fn session_len(&self) -> Option<usize> {
        self.sessions
            .get(CLIENT_CHAT)
            .await
            .map(|s| s.messages.len())
    }
}
