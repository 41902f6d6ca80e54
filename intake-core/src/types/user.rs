//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// Sender profile (id, optional handle, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// First and last name joined by a space and trimmed; `None` when both are empty.
    pub fn display_name(&self) -> Option<String> {
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let full = full.trim();
        if full.is_empty() {
            None
        } else {
            Some(full.to_string())
        }
    }
}
