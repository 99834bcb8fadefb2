//! WizardController — drives the step sequence, owns the answers,
//! validates, and submits.

use std::sync::Arc;

use crate::config::WizardConfig;
use crate::error::{Error, ValidationError};
use crate::submit::Submitter;
use crate::view::ViewModel;

use super::answers::{AnswerSet, AnswerValue};
use super::state::{FIRST_STEP, Step, SubmissionStatus, WizardState};
use super::validate::{ValidationResult, validate_step};

/// Drives one wizard session: step position, accumulated answers,
/// validation dispatch, and the final submission.
///
/// The View forwards user actions into these methods and re-reads
/// [`view_model`](Self::view_model) after every call to render. All
/// operations run on one logical task; the only suspension point is the
/// [`Submitter`] call inside [`submit`](Self::submit).
pub struct WizardController {
    state: WizardState,
    total_steps: Step,
    submitter: Arc<dyn Submitter>,
}

impl WizardController {
    pub fn new(config: &WizardConfig, submitter: Arc<dyn Submitter>) -> Self {
        Self {
            state: WizardState::new(),
            total_steps: config.total_steps,
            submitter,
        }
    }

    /// Active step, always within `[1, total_steps]`.
    pub fn current_step(&self) -> Step {
        self.state.current_step
    }

    pub fn total_steps(&self) -> Step {
        self.total_steps
    }

    /// The last step the user fills in; the step after it is the
    /// thank-you page.
    pub fn final_input_step(&self) -> Step {
        self.total_steps.saturating_sub(1)
    }

    pub fn submission_status(&self) -> SubmissionStatus {
        self.state.submission_status
    }

    /// Read access to the recorded answers.
    pub fn answers(&self) -> &AnswerSet {
        &self.state.answers
    }

    /// Record (upsert) an answer. Validation happens separately, on
    /// navigation.
    pub fn record_answer(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        let key = key.into();
        tracing::debug!(key = %key, "answer recorded");
        self.state.answers.insert(key, value.into());
    }

    /// Validate a single step against the current answers.
    pub fn validate_step(&self, step: Step) -> ValidationResult {
        validate_step(step, &self.state.answers)
    }

    /// Validate the step the user is on.
    pub fn validate_current(&self) -> ValidationResult {
        self.validate_step(self.state.current_step)
    }

    /// Move forward one step if the current one validates.
    ///
    /// Returns the banner message as an error when validation fails, with
    /// the state untouched. No-op on the last step and while a submission
    /// is in flight.
    pub fn advance(&mut self) -> Result<(), ValidationError> {
        if self.state.submission_status.in_flight() {
            tracing::debug!("advance ignored: submission in flight");
            return Ok(());
        }
        if let ValidationResult::Invalid(message) = self.validate_current() {
            tracing::debug!(step = self.state.current_step, %message, "validation failed");
            return Err(ValidationError(message));
        }
        if self.state.current_step < self.total_steps {
            self.state.current_step += 1;
            tracing::debug!(step = self.state.current_step, "advanced");
        }
        Ok(())
    }

    /// Move back one step. Never validates; no-op on the first step and
    /// while a submission is in flight.
    pub fn retreat(&mut self) {
        if self.state.submission_status.in_flight() {
            tracing::debug!("retreat ignored: submission in flight");
            return;
        }
        if self.state.current_step > FIRST_STEP {
            self.state.current_step -= 1;
            tracing::debug!(step = self.state.current_step, "retreated");
        }
    }

    /// Submit the accumulated answers.
    ///
    /// Only acts on the final input step with a status that may enter
    /// `Submitting`; anything else is an ignored no-op, so duplicate
    /// invocations are safe. On success the thank-you step is revealed; on
    /// failure the step and answers are preserved and the error is
    /// returned for display, leaving the session ready for a retry.
    pub async fn submit(&mut self) -> Result<(), Error> {
        if !self
            .state
            .submission_status
            .can_transition_to(SubmissionStatus::Submitting)
        {
            tracing::debug!(status = %self.state.submission_status, "submit ignored");
            return Ok(());
        }
        if self.state.current_step != self.final_input_step() {
            tracing::debug!(
                step = self.state.current_step,
                "submit ignored: not the final input step"
            );
            return Ok(());
        }
        if let ValidationResult::Invalid(message) = self.validate_current() {
            tracing::debug!(step = self.state.current_step, %message, "validation failed");
            return Err(ValidationError(message).into());
        }

        self.state.submission_status = SubmissionStatus::Submitting;
        tracing::info!(submitter = self.submitter.name(), "submitting form");

        match self.submitter.submit(&self.state.answers).await {
            Ok(()) => {
                self.state.submission_status = SubmissionStatus::Submitted;
                self.state.current_step += 1;
                tracing::info!("form submitted");
                Ok(())
            }
            Err(e) => {
                self.state.submission_status = SubmissionStatus::Failed;
                tracing::warn!(error = %e, "form submission failed");
                Err(e.into())
            }
        }
    }

    /// Project the current state for rendering.
    pub fn view_model(&self) -> ViewModel {
        ViewModel::project(&self.state, self.total_steps)
    }
}
