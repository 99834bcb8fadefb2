//! HTTP submission backend — posts the answers as JSON to an endpoint.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{ConfigError, SubmissionError};
use crate::wizard::AnswerSet;

use super::Submitter;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// JSON body sent to the submission endpoint.
#[derive(Debug, Serialize)]
struct SubmissionEnvelope<'a> {
    submission_id: Uuid,
    submitted_at: DateTime<Utc>,
    answers: &'a AnswerSet,
}

/// Submits the finished form to a configured HTTP endpoint.
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    auth_token: Option<SecretString>,
}

impl HttpSubmitter {
    pub fn new(endpoint: &str, auth_token: Option<SecretString>) -> Result<Self, ConfigError> {
        let endpoint = reqwest::Url::parse(endpoint).map_err(|e| ConfigError::InvalidValue {
            key: "endpoint".to_string(),
            message: e.to_string(),
        })?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                key: "http_client".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            endpoint,
            auth_token,
        })
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    fn name(&self) -> &str {
        "http"
    }

    async fn submit(&self, answers: &AnswerSet) -> Result<(), SubmissionError> {
        let envelope = SubmissionEnvelope {
            submission_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            answers,
        };

        let mut request = self.client.post(self.endpoint.clone()).json(&envelope);
        if let Some(ref token) = self.auth_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                SubmissionError::Timeout(REQUEST_TIMEOUT)
            } else {
                SubmissionError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::info!(submission_id = %envelope.submission_id, "submission accepted");
        Ok(())
    }
}
