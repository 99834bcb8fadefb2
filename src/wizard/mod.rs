//! Wizard core — session state, accumulated answers, per-step validation,
//! and the controller that ties them together.
//!
//! The wizard is a fixed linear sequence of form steps. The controller is
//! the sole stateful unit: the View forwards user actions into it and
//! renders whatever [`WizardController::view_model`] projects back.

pub mod answers;
pub mod controller;
pub mod state;
pub mod validate;

pub use answers::{AnswerSet, AnswerValue, field_keys};
pub use controller::WizardController;
pub use state::{FIRST_STEP, Step, SubmissionStatus, WizardState};
pub use validate::{ValidationResult, validate_step};
