//! BranchStep: threshold detector.
//!
//! Passes samples through unchanged. After every sample it records whether that
//! sample was strictly greater than the threshold; only the latest comparison
//! is kept.

use crate::pipeline::step::{Step, ThresholdFlag};
use crate::pipeline::step_type::StepType;

/// Threshold of a directly constructed `BranchStep`.
///
/// Factory-built steps use `BranchConfig::threshold` instead.
pub const DEFAULT_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct BranchStep {
    threshold: f64,
    branch_taken: bool,
}

impl BranchStep {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            branch_taken: false,
        }
    }
}

impl Default for BranchStep {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Step for BranchStep {
    fn name(&self) -> &str {
        StepType::Branch.name()
    }

    fn execute(&mut self, sample: f64) -> f64 {
        self.branch_taken = sample > self.threshold;
        sample
    }

    fn as_threshold_flag(&self) -> Option<&dyn ThresholdFlag> {
        Some(self)
    }
}

impl ThresholdFlag for BranchStep {
    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn branch_taken(&self) -> bool {
        self.branch_taken
    }
}
