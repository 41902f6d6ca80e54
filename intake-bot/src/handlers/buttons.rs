use async_trait::async_trait;
use intake_core::{Bot, Handler, HandlerResponse, Message, OutgoingMessage, Result};
use std::sync::Arc;
use tracing::{info, instrument};

use super::send_reply;
use crate::fanout::AdminFanout;
use crate::notification::Source;
use crate::session::SessionStore;
use crate::texts::{more_text, nothing_recorded_text, BTN_MORE, BTN_SEND, SUBMITTED_TEXT};

/// Handles presses of the two confirmation buttons (text exactly equal to a label).
pub struct ConfirmButtonHandler {
    bot: Arc<dyn Bot>,
    sessions: Arc<dyn SessionStore>,
    fanout: AdminFanout,
}

impl ConfirmButtonHandler {
    pub fn new(bot: Arc<dyn Bot>, sessions: Arc<dyn SessionStore>, fanout: AdminFanout) -> Self {
        Self {
            bot,
            sessions,
            fanout,
        }
    }

    async fn submit(&self, message: &Message) -> OutgoingMessage {
        let chat_id = message.chat.id;
        let collected = match self.sessions.get(chat_id).await {
            Some(session) if !session.messages.is_empty() => session.messages,
            _ => {
                info!(chat_id = chat_id, "Submit pressed with nothing collected");
                return OutgoingMessage::plain(nothing_recorded_text())
                    .reply_to(message.id.clone());
            }
        };

        for stored in &collected {
            self.fanout.deliver(stored, Source::GuidedIntake).await;
        }
        self.sessions.clear(chat_id).await;
        info!(
            chat_id = chat_id,
            messages = collected.len(),
            "Guided intake submitted"
        );

        OutgoingMessage::plain(SUBMITTED_TEXT).remove_keyboard()
    }
}

#[async_trait]
impl Handler for ConfirmButtonHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let reply = match message.text() {
            Some(BTN_MORE) => OutgoingMessage::plain(more_text()).reply_to(message.id.clone()),
            Some(BTN_SEND) => self.submit(message).await,
            _ => return Ok(HandlerResponse::Continue),
        };

        let text = reply.text.clone();
        send_reply(self.bot.as_ref(), message, reply).await;
        Ok(HandlerResponse::Reply(text))
    }
}
