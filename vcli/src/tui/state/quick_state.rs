use vcli_core::{VcliError, VcliResult};

use crate::cli::{QuickAction, QuickOutcome};
use crate::tui::forms::step_progress;

/// Progress of the quick action requested on the command line.
#[derive(Debug, Default)]
pub struct QuickScreen {
    pub action: Option<QuickAction>,
    pub progress: Option<f64>,
    pub outcome: Option<QuickOutcome>,
    pub error: Option<VcliError>,
}

impl QuickScreen {
    pub fn new(action: Option<QuickAction>) -> Self {
        Self {
            action,
            ..Self::default()
        }
    }

    pub fn start(&mut self) {
        self.progress = Some(0.0);
        self.outcome = None;
        self.error = None;
    }

    pub fn is_running(&self) -> bool {
        self.progress.is_some() && self.outcome.is_none() && self.error.is_none()
    }

    pub fn advance(&mut self) -> bool {
        self.is_running() && step_progress(&mut self.progress)
    }

    pub fn finish(&mut self, result: VcliResult<QuickOutcome>) {
        self.progress = Some(1.0);
        match result {
            Ok(outcome) => self.outcome = Some(outcome),
            Err(e) => self.error = Some(e),
        }
    }
}
