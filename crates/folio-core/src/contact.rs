//! Contact form model and validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minimum message length, in characters, after trimming.
pub const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Loose `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// DOM id / form key.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

/// Submitted form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Checks a single field.
    pub fn check(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Name => self.name.trim().is_empty().then_some(ValidationError::MissingName),
            Field::Email => {
                if self.email.trim().is_empty() {
                    Some(ValidationError::MissingEmail)
                } else if !is_valid_email(&self.email) {
                    Some(ValidationError::InvalidEmail)
                } else {
                    None
                }
            }
            Field::Subject => self.subject.is_empty().then_some(ValidationError::MissingSubject),
            Field::Message => {
                let message = self.message.trim();
                if message.is_empty() {
                    Some(ValidationError::MissingMessage)
                } else if message.chars().count() < MIN_MESSAGE_LEN {
                    Some(ValidationError::MessageTooShort {
                        min: MIN_MESSAGE_LEN,
                    })
                } else {
                    None
                }
            }
        }
    }

    /// Checks every field, collecting all problems in field order.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors: Vec<(Field, ValidationError)> = Field::ALL
            .into_iter()
            .filter_map(|field| self.check(field).map(|err| (field, err)))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FieldErrors(errors))
        }
    }
}

/// Validation failures keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(Field, ValidationError)>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, e)| *e)
    }

    /// Drops the error for `field`, e.g. once the user edits it.
    pub fn clear(&mut self, field: Field) {
        self.0.retain(|(f, _)| *f != field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, ValidationError)> {
        self.0.iter()
    }
}

/// Submit button lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
}

impl SubmitState {
    pub fn is_sending(self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
        }
    }
}

/// Notification text after a successful send.
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Notification text after a failed send.
pub const FAILED_MESSAGE: &str =
    "Failed to send message. Please try again or email me directly.";

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "collaboration".into(),
            message: "Let's build something.".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some(ValidationError::MissingName));
        assert_eq!(errors.get(Field::Email), Some(ValidationError::MissingEmail));
        assert_eq!(errors.get(Field::Subject), Some(ValidationError::MissingSubject));
        assert_eq!(errors.get(Field::Message), Some(ValidationError::MissingMessage));
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut form = filled();
        form.name = "   ".into();
        form.message = "\n\t ".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::Name), Some(ValidationError::MissingName));
        assert_eq!(errors.get(Field::Message), Some(ValidationError::MissingMessage));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("no@tld"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spa ce@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_invalid_email_message() {
        let mut form = filled();
        form.email = "nope".into();
        assert_eq!(form.check(Field::Email), Some(ValidationError::InvalidEmail));
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_message_length_is_trimmed() {
        let mut form = filled();
        form.message = "  short  ".into();
        let err = form.check(Field::Message).unwrap();
        assert_eq!(err.to_string(), "Message must be at least 10 characters");

        form.message = "  ten chars!  ".into();
        assert_eq!(form.check(Field::Message), None);
    }

    #[test]
    fn test_clear_single_error() {
        let mut errors = ContactForm::default().validate().unwrap_err();
        errors.clear(Field::Email);
        assert_eq!(errors.get(Field::Email), None);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_serializes_with_field_ids() {
        let json = serde_json::to_value(filled()).unwrap();
        for field in Field::ALL {
            assert!(json.get(field.id()).is_some());
        }
    }
}
