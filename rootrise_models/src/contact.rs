use rootrise_utils::truncate_chars;

use crate::macros::required_string;

/// Maximum number of message characters written to the operational log.
pub const MESSAGE_PREVIEW_CHARS: usize = 200;

/// A contact form submission that passed presence validation.
///
/// Only exists for the duration of a single request; it is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub message: ContactMessage,
}

required_string!(ContactName);
// Intentionally not validated as an email address, presence is the only rule.
required_string!(ContactEmail);
required_string!(ContactMessage);

impl ContactSubmission {
    /// Builds a submission from optional raw field values.
    ///
    /// Returns `None` if any field is missing or empty after trimming.
    pub fn from_parts(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Option<Self> {
        Some(Self {
            name: ContactName::try_new(name?).ok()?,
            email: ContactEmail::try_new(email?).ok()?,
            message: ContactMessage::try_new(message?).ok()?,
        })
    }

    pub fn preview(&self) -> &str {
        truncate_chars(&self.message, MESSAGE_PREVIEW_CHARS)
    }
}
