//! Contact draft normalization and `mailto:` URI construction.
//!
//! The form never performs a network submission; its payload is folded into
//! a percent-encoded mailto link that opens the visitor's mail client.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use urlencoding::encode;

use crate::consts::{CONTACT_ADDRESS, FALLBACK_EMAIL, FALLBACK_NAME};

/// Trimmed form fields with placeholders substituted for blanks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Build a draft from raw form values. Fields are trimmed; a missing or
    /// blank name or email gets its placeholder, a blank message stays empty.
    #[must_use]
    pub fn from_fields(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            name: non_blank(name).unwrap_or_else(|| FALLBACK_NAME.to_owned()),
            email: non_blank(email).unwrap_or_else(|| FALLBACK_EMAIL.to_owned()),
            message: non_blank(message).unwrap_or_default(),
        }
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    let trimmed = raw?.trim().to_owned();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Percent-encoded `mailto:` URI carrying `draft` as subject and body.
#[must_use]
pub fn url(draft: &ContactDraft) -> String {
    let subject = format!("New message from {}", draft.name);
    let body = format!("Name: {}\nEmail: {}\n\n{}", draft.name, draft.email, draft.message);
    format!("mailto:{CONTACT_ADDRESS}?subject={}&body={}", encode(&subject), encode(&body))
}
