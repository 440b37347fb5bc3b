//! Error types for the site core.
//!
//! - [`TypingError`] - rejected typing animator configuration
//! - [`ContentError`] - embedded site content that failed to parse
//! - [`ValidationError`] - a single contact form field problem
//! - [`SendError`] - contact message hand-off failures

use thiserror::Error;

/// Typing animator construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypingError {
    /// The phrase list was empty.
    #[error("typing animation needs at least one phrase")]
    NoPhrases,
    /// A phrase with no characters can never reach the full-phrase dwell.
    #[error("phrase #{index} is empty")]
    EmptyPhrase { index: usize },
}

/// Site content loading errors.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid site content: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Contact form field validation errors.
///
/// The display strings are shown verbatim under the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please select a subject")]
    MissingSubject,
    #[error("Please enter a message")]
    MissingMessage,
    #[error("Message must be at least {min} characters")]
    MessageTooShort { min: usize },
}

/// Contact message hand-off errors.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}
