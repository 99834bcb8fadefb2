//! Configuration types.

use crate::wizard::Step;

/// Wizard configuration.
#[derive(Debug, Clone)]
pub struct WizardConfig {
    /// Total number of steps, thank-you page included.
    pub total_steps: Step,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self { total_steps: 5 }
    }
}
