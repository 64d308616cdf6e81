//! Contact form validation and feedback.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Feedback shown after a submission passes every rule.
pub const CONTACT_SUCCESS_MESSAGE: &str = "Thanks! Your message has been sent.";

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// A failed contact form rule. `Display` is the user-facing message.
pub enum ContactFieldError {
    /// Name missing or shorter than two characters.
    #[error("Please enter your name (at least 2 characters).")]
    NameTooShort,
    /// Email missing or not shaped like `local@domain.tld`.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    /// No reason selected.
    #[error("Please select a reason for contacting us.")]
    MissingReason,
    /// Message missing or shorter than ten characters.
    #[error("Please enter a message of at least 10 characters.")]
    MessageTooShort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Styling of the feedback line.
pub enum FeedbackTone {
    /// Validation failed; rendered in the alert color.
    Error,
    /// Submission accepted; default text color.
    Success,
}

impl FeedbackTone {
    /// Inline color applied to the feedback element, `None` for the stylesheet default.
    pub fn color(self) -> Option<&'static str> {
        match self {
            Self::Error => Some("#c0392b"),
            Self::Success => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Text and tone written to the feedback element after a submission.
pub struct FormFeedback {
    /// Message text.
    pub text: String,
    /// Styling.
    pub tone: FeedbackTone,
}

impl FormFeedback {
    /// Whether the form fields should be cleared.
    pub fn clears_form(&self) -> bool {
        self.tone == FeedbackTone::Success
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Values read from the contact form. Stored trimmed.
pub struct ContactSubmission {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Selected contact reason.
    pub reason: String,
    /// Message body.
    pub message: String,
}

impl ContactSubmission {
    /// Builds a submission from raw field values, trimming each one.
    pub fn new(name: &str, email: &str, reason: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            reason: reason.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Checks every rule and returns all failures in field order.
    pub fn errors(&self) -> Vec<ContactFieldError> {
        let mut errors = Vec::new();
        if self.name.chars().count() < NAME_MIN_CHARS {
            errors.push(ContactFieldError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.push(ContactFieldError::InvalidEmail);
        }
        if self.reason.is_empty() {
            errors.push(ContactFieldError::MissingReason);
        }
        if self.message.chars().count() < MESSAGE_MIN_CHARS {
            errors.push(ContactFieldError::MessageTooShort);
        }
        errors
    }

    /// Validates the submission and renders the feedback line.
    pub fn feedback(&self) -> FormFeedback {
        let errors = self.errors();
        if errors.is_empty() {
            return FormFeedback {
                text: CONTACT_SUCCESS_MESSAGE.to_string(),
                tone: FeedbackTone::Success,
            };
        }
        FormFeedback {
            text: errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            tone: FeedbackTone::Error,
        }
    }
}

// Equivalent to /^[^\s@]+@[^\s@]+\.[^\s@]+$/.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < domain.len())
}
