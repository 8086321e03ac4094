//! TransformStep: doubles every sample.

use crate::pipeline::step::Step;
use crate::pipeline::step_type::StepType;

const GAIN: f64 = 2.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct TransformStep;

impl TransformStep {
    pub fn new() -> Self {
        Self
    }
}

impl Step for TransformStep {
    fn name(&self) -> &str {
        StepType::Transform.name()
    }

    fn execute(&mut self, sample: f64) -> f64 {
        sample * GAIN
    }

    fn execute_batch(&mut self, samples: &[f64]) -> Vec<f64> {
        samples.iter().map(|&s| s * GAIN).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_doubles() {
        let mut step = TransformStep::new();
        assert_eq!(step.execute(3.5), 7.0);
        assert_eq!(step.execute(-1.0), -2.0);
        assert_eq!(step.execute_batch(&[0.0, 1.0, 2.5]), vec![0.0, 2.0, 5.0]);
    }

    proptest! {
        #[test]
        fn test_batch_matches_single(samples in prop::collection::vec(-1e6f64..1e6, 0..64)) {
            let mut step = TransformStep::new();
            let batch = step.execute_batch(&samples);
            let single: Vec<f64> = samples.iter().map(|&s| step.execute(s)).collect();

            // Property: same length, same order, each element doubled
            prop_assert_eq!(batch.len(), samples.len());
            prop_assert_eq!(&batch, &single);
            for (out, inp) in batch.iter().zip(samples.iter()) {
                prop_assert_eq!(*out, 2.0 * inp);
            }
        }
    }
}
