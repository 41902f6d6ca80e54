//! Message classifier: a short type label and a preview for the admin card.

use intake_core::{Message, MessageContent};

/// Type label and preview text derived from one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub type_label: String,
    pub preview: String,
}

/// Classifies a message. Pure; unknown kinds degrade to their raw kind name.
pub fn classify(message: &Message) -> Classification {
    let (type_label, preview) = match &message.content {
        MessageContent::Text(body) => ("Text".to_string(), body.clone()),
        MessageContent::Photo { .. } => ("Photo".to_string(), "(photo)".to_string()),
        MessageContent::Document { file_name, .. } => (
            format!("Document: {}", file_name.as_deref().unwrap_or("unnamed")),
            "(document)".to_string(),
        ),
        MessageContent::Other { kind } => (kind.clone(), "(message)".to_string()),
    };
    Classification {
        type_label,
        preview,
    }
}
