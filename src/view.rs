//! Declarative projection of wizard state for rendering.
//!
//! The View never inspects `WizardState` directly: it reads a [`ViewModel`]
//! after every controller call and renders it whole — one active step,
//! completion markers for the progress indicator, and the visibility of the
//! three navigation controls.

use serde::Serialize;

use crate::wizard::{FIRST_STEP, Step, SubmissionStatus, WizardState};

/// Progress-indicator marker for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMarker {
    Completed,
    Active,
    Upcoming,
}

/// Everything the View needs to render one frame.
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    /// The single active step.
    pub active_step: Step,
    /// One marker per step, in step order.
    pub markers: Vec<StepMarker>,
    /// Back control; hidden on the first step.
    pub back_visible: bool,
    /// Next control; hidden on the final input step and the thank-you page.
    pub next_visible: bool,
    /// Submit control; shown only on the final input step.
    pub submit_visible: bool,
    /// Submit control is disabled while a submission is in flight.
    pub submit_enabled: bool,
    pub submission_status: SubmissionStatus,
}

impl ViewModel {
    /// Project `state` into a renderable description.
    pub fn project(state: &WizardState, total_steps: Step) -> Self {
        let current = state.current_step;
        let markers = (FIRST_STEP..=total_steps)
            .map(|step| {
                if step < current {
                    StepMarker::Completed
                } else if step == current {
                    StepMarker::Active
                } else {
                    StepMarker::Upcoming
                }
            })
            .collect();

        let on_final_input = current == total_steps.saturating_sub(1);
        let on_thank_you = current == total_steps;

        Self {
            active_step: current,
            markers,
            back_visible: current > FIRST_STEP,
            next_visible: !on_final_input && !on_thank_you,
            submit_visible: on_final_input,
            submit_enabled: on_final_input && !state.submission_status.in_flight(),
            submission_status: state.submission_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(step: Step) -> WizardState {
        let mut state = WizardState::new();
        state.current_step = step;
        state
    }

    #[test]
    fn first_step_hides_back() {
        let vm = ViewModel::project(&state_at(1), 5);
        assert!(!vm.back_visible);
        assert!(vm.next_visible);
        assert!(!vm.submit_visible);
    }

    #[test]
    fn middle_steps_show_back_and_next() {
        for step in [2, 3] {
            let vm = ViewModel::project(&state_at(step), 5);
            assert!(vm.back_visible, "step {step}");
            assert!(vm.next_visible, "step {step}");
            assert!(!vm.submit_visible, "step {step}");
        }
    }

    #[test]
    fn final_input_step_swaps_next_for_submit() {
        let vm = ViewModel::project(&state_at(4), 5);
        assert!(vm.back_visible);
        assert!(!vm.next_visible);
        assert!(vm.submit_visible);
        assert!(vm.submit_enabled);
    }

    #[test]
    fn thank_you_hides_next_and_submit() {
        let vm = ViewModel::project(&state_at(5), 5);
        assert!(!vm.next_visible);
        assert!(!vm.submit_visible);
    }

    #[test]
    fn exactly_one_active_marker() {
        for step in 1..=5 {
            let vm = ViewModel::project(&state_at(step), 5);
            let active = vm
                .markers
                .iter()
                .filter(|m| **m == StepMarker::Active)
                .count();
            assert_eq!(active, 1, "step {step}");
        }
    }

    #[test]
    fn markers_track_progress() {
        let vm = ViewModel::project(&state_at(3), 5);
        assert_eq!(
            vm.markers,
            vec![
                StepMarker::Completed,
                StepMarker::Completed,
                StepMarker::Active,
                StepMarker::Upcoming,
                StepMarker::Upcoming,
            ]
        );
    }

    #[test]
    fn in_flight_submission_disables_submit() {
        let mut state = state_at(4);
        state.submission_status = SubmissionStatus::Submitting;
        let vm = ViewModel::project(&state, 5);
        assert!(vm.submit_visible);
        assert!(!vm.submit_enabled);
    }

    #[test]
    fn failed_submission_reenables_submit() {
        let mut state = state_at(4);
        state.submission_status = SubmissionStatus::Failed;
        let vm = ViewModel::project(&state, 5);
        assert!(vm.submit_visible);
        assert!(vm.submit_enabled);
    }
}
