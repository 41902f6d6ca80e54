//! Outbound message description, independent of the transport's request types.

/// How the transport should interpret `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    #[default]
    Plain,
    Html,
}

/// Keyboard attached to an outgoing message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReplyMarkup {
    /// Leave whatever keyboard the user currently has.
    #[default]
    None,
    /// Reply keyboard; each inner vec is one row of button labels.
    Keyboard(Vec<Vec<String>>),
    /// Remove the custom reply keyboard.
    RemoveKeyboard,
}

/// A message to send: text, format, keyboard and optional reply target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: String,
    pub format: TextFormat,
    pub markup: ReplyMarkup,
    pub reply_to_message_id: Option<String>,
}

impl OutgoingMessage {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            markup: ReplyMarkup::None,
            reply_to_message_id: None,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            format: TextFormat::Html,
            ..Self::plain(text)
        }
    }

    /// Attaches a reply keyboard with one button per row.
    pub fn with_keyboard<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.markup = ReplyMarkup::Keyboard(labels.into_iter().map(|l| vec![l.into()]).collect());
        self
    }

    pub fn remove_keyboard(mut self) -> Self {
        self.markup = ReplyMarkup::RemoveKeyboard;
        self
    }

    pub fn reply_to(mut self, message_id: impl Into<String>) -> Self {
        self.reply_to_message_id = Some(message_id.into());
        self
    }
}
