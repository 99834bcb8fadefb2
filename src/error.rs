//! Error types for stepform.

use std::time::Duration;

/// Top-level error type for the wizard.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// A user-correctable validation failure.
///
/// Carries the banner message shown to the user. Never fatal: the step and
/// the recorded answers are untouched when one of these is returned, and it
/// is logged at debug level only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);

impl ValidationError {
    /// The banner message for this failure.
    pub fn message(&self) -> &'static str {
        self.0
    }
}

/// Submission-related errors.
///
/// The current step and answers are preserved on failure so the caller can
/// retry without re-entering data.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Submission request failed: {0}")]
    Transport(String),

    #[error("Submission rejected by server: status {status}")]
    Rejected { status: u16 },

    #[error("Submission timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type alias for the wizard.
pub type Result<T> = std::result::Result<T, Error>;
