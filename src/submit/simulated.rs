//! Simulated submission backend.
//!
//! Stands in for a real endpoint during local runs: waits a configured
//! delay, then fails with a configured probability so the retry path can
//! be exercised without a server.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::error::SubmissionError;
use crate::wizard::AnswerSet;

use super::Submitter;

pub struct SimulatedSubmitter {
    delay: Duration,
    failure_rate: f64,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        Self {
            delay,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn submit(&self, answers: &AnswerSet) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.delay).await;

        if self.failure_rate > 0.0 && rand::thread_rng().gen_bool(self.failure_rate) {
            return Err(SubmissionError::Transport(
                "simulated submission failure".to_string(),
            ));
        }

        tracing::debug!(fields = answers.len(), "simulated submission accepted");
        Ok(())
    }
}
