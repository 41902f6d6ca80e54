use async_trait::async_trait;
use intake_core::{Bot, Handler, HandlerResponse, Message, MessageContent, OutgoingMessage, Result};
use std::sync::Arc;
use tracing::{debug, instrument};

use super::send_reply;
use crate::fanout::AdminFanout;
use crate::notification::Source;
use crate::session::SessionStore;
use crate::texts::DIRECT_ACK_TEXT;

/// Handles text, photo and document messages: collected silently during guided intake,
/// relayed to admins immediately otherwise.
pub struct IntakeHandler {
    bot: Arc<dyn Bot>,
    sessions: Arc<dyn SessionStore>,
    fanout: AdminFanout,
}

impl IntakeHandler {
    pub fn new(bot: Arc<dyn Bot>, sessions: Arc<dyn SessionStore>, fanout: AdminFanout) -> Self {
        Self {
            bot,
            sessions,
            fanout,
        }
    }
}

#[async_trait]
impl Handler for IntakeHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if let MessageContent::Other { kind } = &message.content {
            debug!(chat_id = message.chat.id, kind = %kind, "Unsupported message kind");
            return Ok(HandlerResponse::Continue);
        }

        if self.sessions.append(message.chat.id, message.clone()).await {
            return Ok(HandlerResponse::Stop);
        }

        self.fanout.deliver(message, Source::Direct).await;
        send_reply(
            self.bot.as_ref(),
            message,
            OutgoingMessage::plain(DIRECT_ACK_TEXT).reply_to(message.id.clone()),
        )
        .await;
        Ok(HandlerResponse::Reply(DIRECT_ACK_TEXT.to_string()))
    }
}
