//! Wizard session state and the submission state machine.

use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;

/// One-based position within the form sequence.
pub type Step = u8;

/// The step every session starts on.
pub const FIRST_STEP: Step = 1;

/// Status of the final form submission.
///
/// Progresses Idle → Submitting → {Submitted, Failed}; Failed may re-enter
/// Submitting on retry. Submitted is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Submitted,
    Failed,
}

impl SubmissionStatus {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: SubmissionStatus) -> bool {
        use SubmissionStatus::*;
        matches!(
            (self, target),
            (Idle, Submitting)
                | (Failed, Submitting)
                | (Submitting, Submitted)
                | (Submitting, Failed)
        )
    }

    /// Whether a submission is currently awaiting its outcome.
    pub fn in_flight(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether this status is terminal (the form went through).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Submitted => "submitted",
            Self::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// Full state of one wizard session.
///
/// Created once per session with the first step active, an empty answer
/// set, and an idle submission; mutated only through
/// [`WizardController`](super::WizardController) operations and discarded
/// with the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardState {
    /// Active step, always within `[1, total_steps]`.
    pub current_step: Step,
    /// Everything the user has entered so far.
    pub answers: AnswerSet,
    pub submission_status: SubmissionStatus,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            current_step: FIRST_STEP,
            answers: AnswerSet::new(),
            submission_status: SubmissionStatus::Idle,
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
