//! A contact-form submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A message left through the public contact form.
///
/// Rows are created by the contact form and only ever read or deleted by the
/// admin console. There is no update path.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq)]
pub struct Message {
    /// Store-assigned identifier.
    pub id: i64,

    /// Sender's name.
    pub name: String,

    /// Sender's reply address.
    pub email: String,

    pub subject: String,

    /// Free-form body.
    pub message: String,

    /// Store-assigned creation time.
    pub created_at: DateTime<Utc>,
}

/// Fields submitted by the contact form.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,

    /// Per-render form token; a repeated token is stored only once.
    #[serde(default)]
    pub form_token: Option<String>,
}

impl NewMessage {
    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}
