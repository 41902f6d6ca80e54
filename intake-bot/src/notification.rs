//! Notification formatter: the HTML summary card sent to administrators.

use chrono::{Local, NaiveDateTime};
use intake_core::Message;
use teloxide::utils::html::escape;

use crate::classifier::classify;

/// How the inquiry reached the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Collected during `/consult` and submitted with the confirmation button.
    GuidedIntake,
    /// A single message sent outside of a session.
    Direct,
}

impl Source {
    pub fn label(self) -> &'static str {
        match self {
            Source::GuidedIntake => "via guided intake",
            Source::Direct => "direct message",
        }
    }
}

/// Wall clock used for card timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local time of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Upper bound on the escaped preview. Keeps the whole card under Telegram's 4096-character
/// message limit whatever the client sent.
pub const MAX_PREVIEW_CHARS: usize = 3500;

/// Escapes `preview` for HTML, cutting it with an ellipsis once the escaped text would exceed
/// [`MAX_PREVIEW_CHARS`].
fn escape_preview(preview: &str) -> String {
    let escaped = escape(preview);
    if escaped.chars().count() <= MAX_PREVIEW_CHARS {
        return escaped;
    }

    let mut out = String::new();
    let mut used = 0;
    for c in preview.chars() {
        let piece = escape(c.encode_utf8(&mut [0u8; 4]));
        let len = piece.chars().count();
        if used + len > MAX_PREVIEW_CHARS - 1 {
            break;
        }
        used += len;
        out.push_str(&piece);
    }
    out.push('…');
    out
}

/// Renders the admin card for one message. User-supplied fields are HTML-escaped.
pub fn format_notification(message: &Message, source: Source, now: NaiveDateTime) -> String {
    let classification = classify(message);
    let name = message
        .user
        .display_name()
        .unwrap_or_else(|| "Not specified".to_string());
    let username = match message.user.username.as_deref() {
        Some(handle) if !handle.is_empty() => format!("@{}", handle),
        _ => "no username".to_string(),
    };

    format!(
        "🆕 <b>New client request</b>\n\n\
📥 <b>Source:</b> {source}\n\n\
👤 <b>Name:</b> {name}\n\
🔗 <b>Username:</b> {username}\n\
🆔 <b>Chat ID:</b> <code>{chat_id}</code>\n\
⏰ <b>Time:</b> {time}\n\
📎 <b>Type:</b> {kind}\n\n\
💬 <b>Message:</b>\n<blockquote>{preview}</blockquote>",
        source = source.label(),
        name = escape(&name),
        username = escape(&username),
        chat_id = message.chat.id,
        time = now.format("%Y-%m-%d %H:%M"),
        kind = escape(&classification.type_label),
        preview = escape_preview(&classification.preview),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use intake_core::{Chat, MessageContent, User};

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(14, 5, 59))
            .unwrap()
    }

    fn message(user: User, content: MessageContent) -> Message {
        Message {
            id: "10".to_string(),
            user,
            chat: Chat {
                id: 555,
                chat_type: "private".to_string(),
            },
            content,
            created_at: Utc::now(),
        }
    }

    fn anna() -> User {
        User {
            id: 555,
            username: Some("anna_p".to_string()),
            first_name: Some("Anna".to_string()),
            last_name: Some("Petrova".to_string()),
        }
    }

    #[test]
    fn test_card_fields_in_order() {
        let card = format_notification(
            &message(anna(), MessageContent::Text("Need advice".to_string())),
            Source::GuidedIntake,
            at(),
        );

        let fields = [
            "New client request",
            "via guided intake",
            "Anna Petrova",
            "@anna_p",
            "<code>555</code>",
            "2024-03-09 14:05",
            "<b>Type:</b> Text",
            "<blockquote>Need advice</blockquote>",
        ];
        let mut last = 0;
        for field in fields {
            let pos = card[last..]
                .find(field)
                .unwrap_or_else(|| panic!("missing or out of order: {field}\n{card}"));
            last += pos + field.len();
        }
    }

    #[test]
    fn test_missing_names_and_username() {
        let user = User {
            id: 1,
            username: None,
            first_name: None,
            last_name: None,
        };
        let card = format_notification(
            &message(user, MessageContent::Photo { caption: None }),
            Source::Direct,
            at(),
        );
        assert!(card.contains("direct message"));
        assert!(card.contains("<b>Name:</b> Not specified"));
        assert!(card.contains("<b>Username:</b> no username"));
        assert!(card.contains("<b>Type:</b> Photo"));
        assert!(card.contains("(photo)"));
    }

    #[test]
    fn test_user_fields_are_escaped() {
        let user = User {
            id: 1,
            username: None,
            first_name: Some("<b>Eve</b>".to_string()),
            last_name: None,
        };
        let card = format_notification(
            &message(user, MessageContent::Text("a < b & c".to_string())),
            Source::Direct,
            at(),
        );
        assert!(card.contains("&lt;b&gt;Eve&lt;/b&gt;"));
        assert!(card.contains("a &lt; b &amp; c"));
        assert!(!card.contains("<b>Eve</b>"));
    }

    #[test]
    fn test_long_text_is_cut_to_fit_one_message() {
        for body in ["a".repeat(4096), "&".repeat(4096), "я".repeat(5000)] {
            let card = format_notification(
                &message(anna(), MessageContent::Text(body)),
                Source::Direct,
                at(),
            );
            assert!(card.chars().count() < 4096, "card too long: {}", card.chars().count());
            assert!(card.contains("…</blockquote>"));
        }
    }

    #[test]
    fn test_short_text_is_not_cut() {
        let body = "b".repeat(MAX_PREVIEW_CHARS);
        let card = format_notification(
            &message(anna(), MessageContent::Text(body.clone())),
            Source::Direct,
            at(),
        );
        assert!(card.contains(&format!("<blockquote>{}</blockquote>", body)));
    }

    #[test]
    fn test_document_label() {
        let card = format_notification(
            &message(
                anna(),
                MessageContent::Document {
                    file_name: Some("contract.pdf".to_string()),
                    caption: None,
                },
            ),
            Source::Direct,
            at(),
        );
        assert!(card.contains("<b>Type:</b> Document: contract.pdf"));
        assert!(card.contains("<blockquote>(document)</blockquote>"));
    }
}
