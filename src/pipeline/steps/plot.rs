//! PlotStep: accumulating sink.
//!
//! Passes samples through unchanged and appends each one to a log that is
//! never truncated.

use crate::pipeline::step::{SampleLog, Step};
use crate::pipeline::step_type::StepType;

#[derive(Debug, Default, Clone)]
pub struct PlotStep {
    output_data: Vec<f64>,
}

impl PlotStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything seen so far.
    pub fn get_data(&self) -> Vec<f64> {
        self.output_data.clone()
    }
}

impl Step for PlotStep {
    fn name(&self) -> &str {
        StepType::Plot.name()
    }

    fn execute(&mut self, sample: f64) -> f64 {
        self.output_data.push(sample);
        sample
    }

    fn execute_batch(&mut self, samples: &[f64]) -> Vec<f64> {
        self.output_data.extend_from_slice(samples);
        samples.to_vec()
    }

    fn as_sample_log(&self) -> Option<&dyn SampleLog> {
        Some(self)
    }
}

impl SampleLog for PlotStep {
    fn data(&self) -> &[f64] {
        &self.output_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identity_with_accumulation() {
        let mut step = PlotStep::new();
        assert_eq!(step.execute(1.5), 1.5);
        assert_eq!(step.execute_batch(&[2.0, 3.0]), vec![2.0, 3.0]);
        assert_eq!(step.execute(4.0), 4.0);
        assert_eq!(step.data(), &[1.5, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut step = PlotStep::new();
        step.execute(1.0);
        let snapshot = step.get_data();
        step.execute(2.0);
        assert_eq!(snapshot, vec![1.0]);
        assert_eq!(step.data().len(), 2);
    }

    proptest! {
        #[test]
        fn test_log_length_equals_samples_seen(
            chunks in prop::collection::vec(prop::collection::vec(-100.0f64..100.0, 0..8), 0..16)
        ) {
            let mut step = PlotStep::new();
            let mut expected = Vec::new();
            for (i, chunk) in chunks.iter().enumerate() {
                // Alternate between single and batch entry points
                if i % 2 == 0 {
                    for &v in chunk {
                        step.execute(v);
                    }
                } else {
                    step.execute_batch(chunk);
                }
                expected.extend_from_slice(chunk);
            }

            // Property: log holds every sample in arrival order
            prop_assert_eq!(step.data(), expected.as_slice());
        }
    }
}
