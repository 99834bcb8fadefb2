//! Submission backends.
//!
//! The controller hands the finished [`AnswerSet`] to a [`Submitter`] and
//! never learns about transport, encoding, timeouts, or retry policy —
//! those belong to the implementation behind the trait.

pub mod http;
pub mod simulated;

pub use http::HttpSubmitter;
pub use simulated::SimulatedSubmitter;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{ConfigError, SubmissionError};
use crate::wizard::AnswerSet;

/// External collaborator performing the final data submission.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &str;

    /// Submit the accumulated answers. Awaited by the controller; this is
    /// the session's only suspension point.
    async fn submit(&self, answers: &AnswerSet) -> Result<(), SubmissionError>;
}

/// Supported submission backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBackend {
    Http,
    Simulated,
}

/// Configuration for creating a submitter.
#[derive(Debug, Clone)]
pub struct SubmitConfig {
    pub backend: SubmitBackend,
    /// Endpoint for the HTTP backend.
    pub endpoint: Option<String>,
    /// Optional bearer token for the HTTP backend.
    pub auth_token: Option<secrecy::SecretString>,
    /// Artificial latency for the simulated backend.
    pub delay: Duration,
    /// Failure probability in `[0.0, 1.0]` for the simulated backend.
    pub failure_rate: f64,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            backend: SubmitBackend::Simulated,
            endpoint: None,
            auth_token: None,
            delay: Duration::from_millis(1500),
            failure_rate: 0.0,
        }
    }
}

/// Create a submitter from configuration.
pub fn create_submitter(config: &SubmitConfig) -> Result<Arc<dyn Submitter>, ConfigError> {
    match config.backend {
        SubmitBackend::Http => {
            let endpoint = config
                .endpoint
                .clone()
                .ok_or_else(|| ConfigError::MissingEnvVar("STEPFORM_SUBMIT_URL".to_string()))?;
            let submitter = HttpSubmitter::new(&endpoint, config.auth_token.clone())?;
            tracing::info!(endpoint = %endpoint, "Using HTTP submitter");
            Ok(Arc::new(submitter))
        }
        SubmitBackend::Simulated => {
            if !(0.0..=1.0).contains(&config.failure_rate) {
                return Err(ConfigError::InvalidValue {
                    key: "failure_rate".to_string(),
                    message: format!("{} is not within 0.0..=1.0", config.failure_rate),
                });
            }
            tracing::info!(
                delay_ms = config.delay.as_millis() as u64,
                failure_rate = config.failure_rate,
                "Using simulated submitter"
            );
            Ok(Arc::new(SimulatedSubmitter::new(
                config.delay,
                config.failure_rate,
            )))
        }
    }
}
