//! Integration tests for a full wizard session.
//!
//! Each test drives the controller the way a View would — recording
//! answers, navigating, submitting — against a scripted Submitter, and
//! checks the state the View would render afterwards.

use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use stepform::config::WizardConfig;
use stepform::error::{Error, SubmissionError};
use stepform::submit::Submitter;
use stepform::wizard::validate::messages;
use stepform::wizard::{SubmissionStatus, WizardController, field_keys};

/// Returns scripted outcomes in order and counts how often it was called.
struct ScriptedSubmitter {
    outcomes: Mutex<VecDeque<Result<(), SubmissionError>>>,
    calls: AtomicUsize,
}

impl ScriptedSubmitter {
    fn new(outcomes: Vec<Result<(), SubmissionError>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Submitter for ScriptedSubmitter {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn submit(
        &self,
        _answers: &stepform::wizard::AnswerSet,
    ) -> Result<(), SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

/// Walk a fresh controller through steps 1–3 and fill step 4, stopping on
/// the final input step.
fn reach_final_step(controller: &mut WizardController) {
    controller.record_answer(field_keys::PRIORITY, "高時給");
    controller.advance().unwrap();

    let qualifications: BTreeSet<String> = ["普通自動車免許".to_string()].into();
    controller.record_answer(field_keys::QUALIFICATIONS, qualifications);
    controller.advance().unwrap();

    controller.record_answer(field_keys::ADDRESS, "東京都千代田区1-1");
    controller.record_answer(field_keys::NAME, "山田太郎");
    controller.record_answer(field_keys::AGE, "25");
    controller.record_answer(field_keys::PHONE, "090-0000-0000");
    controller.record_answer(field_keys::EMAIL, "taro@example.com");
    controller.advance().unwrap();

    controller.record_answer(field_keys::TERMS_AGREEMENT, true);
    assert_eq!(controller.current_step(), 4);
}

#[tokio::test]
async fn failed_submission_then_retry_succeeds() {
    let submitter = ScriptedSubmitter::new(vec![
        Err(SubmissionError::Transport("connection reset".to_string())),
        Ok(()),
    ]);
    let mut controller =
        WizardController::new(&WizardConfig::default(), Arc::clone(&submitter) as Arc<dyn Submitter>);
    reach_final_step(&mut controller);

    // First attempt fails: step and answers survive for the retry
    let err = controller.submit().await.unwrap_err();
    assert!(matches!(err, Error::Submission(SubmissionError::Transport(_))));
    assert_eq!(controller.submission_status(), SubmissionStatus::Failed);
    assert_eq!(controller.current_step(), 4);
    assert_eq!(controller.answers().len(), 8);

    let vm = controller.view_model();
    assert!(vm.submit_visible);
    assert!(vm.submit_enabled, "failed submission must allow a retry");

    // Retry goes through without re-entering any data
    controller.submit().await.unwrap();
    assert_eq!(controller.submission_status(), SubmissionStatus::Submitted);
    assert_eq!(controller.current_step(), 5);
    assert_eq!(submitter.call_count(), 2);

    let vm = controller.view_model();
    assert!(!vm.next_visible);
    assert!(!vm.submit_visible);
}

#[tokio::test]
async fn submission_runs_once_despite_repeated_calls() {
    let submitter = ScriptedSubmitter::new(vec![Ok(())]);
    let mut controller =
        WizardController::new(&WizardConfig::default(), Arc::clone(&submitter) as Arc<dyn Submitter>);
    reach_final_step(&mut controller);

    controller.submit().await.unwrap();
    controller.submit().await.unwrap();
    controller.submit().await.unwrap();

    assert_eq!(submitter.call_count(), 1);
    assert_eq!(controller.submission_status(), SubmissionStatus::Submitted);
    assert_eq!(controller.current_step(), 5);
}

#[tokio::test]
async fn invalid_terms_never_reach_the_submitter() {
    let submitter = ScriptedSubmitter::new(vec![Ok(())]);
    let mut controller =
        WizardController::new(&WizardConfig::default(), Arc::clone(&submitter) as Arc<dyn Submitter>);
    reach_final_step(&mut controller);
    controller.record_answer(field_keys::TERMS_AGREEMENT, false);

    let err = controller.submit().await.unwrap_err();
    match err {
        Error::Validation(e) => assert_eq!(e.message(), messages::AGREE_TO_TERMS),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(submitter.call_count(), 0);
    assert_eq!(controller.submission_status(), SubmissionStatus::Idle);
}

#[tokio::test]
async fn full_session_renders_expected_frames() {
    let submitter = ScriptedSubmitter::new(vec![Ok(())]);
    let mut controller =
        WizardController::new(&WizardConfig::default(), Arc::clone(&submitter) as Arc<dyn Submitter>);

    // Step 1: no back button, next visible
    let vm = controller.view_model();
    assert_eq!(vm.active_step, 1);
    assert!(!vm.back_visible);
    assert!(vm.next_visible);

    // Empty answers cannot advance
    let err = controller.advance().unwrap_err();
    assert_eq!(err.message(), messages::SELECT_PRIORITY);
    assert_eq!(controller.view_model().active_step, 1);

    reach_final_step(&mut controller);

    // Going back keeps the recorded data and re-validates on the way forward
    controller.retreat();
    assert_eq!(controller.current_step(), 3);
    controller.advance().unwrap();
    assert_eq!(controller.current_step(), 4);

    let vm = controller.view_model();
    assert!(vm.back_visible);
    assert!(!vm.next_visible);
    assert!(vm.submit_visible);

    controller.submit().await.unwrap();
    let vm = controller.view_model();
    assert_eq!(vm.active_step, 5);
    assert!(vm.back_visible);
    assert!(!vm.next_visible);
    assert!(!vm.submit_visible);
}
