//! Command router: chain handlers implementing the per-chat intake state machine.
//!
//! Chain order is routing precedence: [`LoggingHandler`] → [`CommandHandler`] →
//! [`ConfirmButtonHandler`] → [`IntakeHandler`]. A chat is IDLE without a session and COLLECTING
//! while one exists in the [`SessionStore`](crate::session::SessionStore).

mod buttons;
mod command;
mod intake;
mod logging;

pub use buttons::ConfirmButtonHandler;
pub use command::{Command, CommandHandler};
pub use intake::IntakeHandler;
pub use logging::LoggingHandler;

use intake_core::{Bot, Message, OutgoingMessage};
use tracing::warn;

/// Sends a reply to the message's chat. A failed reply is logged and swallowed so the state
/// transition already performed stands.
pub(crate) async fn send_reply(bot: &dyn Bot, message: &Message, reply: OutgoingMessage) {
    if let Err(e) = bot.send(message.chat.id, reply).await {
        warn!(
            error = %e,
            chat_id = message.chat.id,
            message_id = %message.id,
            "Failed to send reply"
        );
    }
}
