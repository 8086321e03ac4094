//! Step abstraction for the pipeline.
//!
//! Every step has a single-value operation (`execute`) and a batch operation
//! (`execute_batch`) that defaults to mapping `execute` over the input in order.
//!
//! Optional behavior is exposed through capability accessors rather than type
//! inspection. A variant overrides the accessor for each capability it has:
//!
//! | Capability          | Accessor              | Provided by     |
//! |---------------------|-----------------------|-----------------|
//! | accumulated log     | `as_sample_log`       | Plot            |
//! | threshold flag      | `as_threshold_flag`   | Branch          |
//! | switchable mode     | `as_mode_switch`      | GenerateData    |
//! | magnitude spectrum  | `as_spectrum`         | FFT             |
//! | smoothing factor    | `as_smoothing`        | LowPassFilter   |

use crate::error::DspFlowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One named unit of pipeline computation.
pub trait Step: Send {
    /// Name of this step. Fixed at construction.
    fn name(&self) -> &str;

    /// Process one sample. Must be total over finite inputs.
    fn execute(&mut self, sample: f64) -> f64;

    /// Process a whole sequence. The output has the same length and order as
    /// the input unless the variant documents otherwise.
    fn execute_batch(&mut self, samples: &[f64]) -> Vec<f64> {
        samples.iter().map(|&s| self.execute(s)).collect()
    }

    fn as_sample_log(&self) -> Option<&dyn SampleLog> {
        None
    }

    fn as_threshold_flag(&self) -> Option<&dyn ThresholdFlag> {
        None
    }

    fn as_mode_switch(&mut self) -> Option<&mut dyn ModeSwitch> {
        None
    }

    fn as_spectrum(&self) -> Option<&dyn SpectrumSource> {
        None
    }

    fn as_smoothing(&mut self) -> Option<&mut dyn Smoothing> {
        None
    }
}

/// A sink that keeps every value it has processed, in arrival order.
pub trait SampleLog {
    fn data(&self) -> &[f64];
}

/// A step that records whether its latest input exceeded a threshold.
pub trait ThresholdFlag {
    fn threshold(&self) -> f64;

    /// Result of the most recent `input > threshold` comparison.
    fn branch_taken(&self) -> bool;
}

/// A source whose output count depends on a processing mode.
pub trait ModeSwitch {
    fn processing_mode(&self) -> ProcessingMode;

    /// Returns `true` if the mode actually changed.
    fn set_processing_mode(&mut self, mode: ProcessingMode) -> bool;
}

/// A step that produces a magnitude spectrum as a side effect.
pub trait SpectrumSource {
    /// Magnitudes of the last completed window; empty until one completes.
    fn magnitude_spectrum(&self) -> &[f64];
}

/// A step with a tunable smoothing coefficient.
pub trait Smoothing {
    fn alpha(&self) -> f64;

    /// Returns `true` if the coefficient actually changed.
    fn set_alpha(&mut self, alpha: f64) -> bool;
}

/// Processing mode of a generator step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMode {
    /// One sample per run.
    Single,
    /// `batch_size` samples per run.
    #[default]
    Batch,
}

impl ProcessingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingMode::Single => "single",
            ProcessingMode::Batch => "batch",
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessingMode {
    type Err = DspFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(ProcessingMode::Single),
            "batch" => Ok(ProcessingMode::Batch),
            other => Err(DspFlowError::InvalidMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Negate;

    impl Step for Negate {
        fn name(&self) -> &str {
            "Negate"
        }

        fn execute(&mut self, sample: f64) -> f64 {
            -sample
        }
    }

    #[test]
    fn test_default_batch_maps_execute_in_order() {
        let mut step = Negate;
        assert_eq!(step.execute_batch(&[1.0, -2.0, 3.0]), vec![-1.0, 2.0, -3.0]);
        assert!(step.execute_batch(&[]).is_empty());
    }

    #[test]
    fn test_default_capabilities_are_absent() {
        let mut step = Negate;
        assert!(step.as_sample_log().is_none());
        assert!(step.as_threshold_flag().is_none());
        assert!(step.as_spectrum().is_none());
        assert!(step.as_mode_switch().is_none());
        assert!(step.as_smoothing().is_none());
    }

    #[test]
    fn test_processing_mode_parse() {
        assert_eq!("single".parse::<ProcessingMode>().unwrap(), ProcessingMode::Single);
        assert_eq!("batch".parse::<ProcessingMode>().unwrap(), ProcessingMode::Batch);
        assert!(matches!(
            "Single".parse::<ProcessingMode>(),
            Err(DspFlowError::InvalidMode(_))
        ));
        assert_eq!(ProcessingMode::default(), ProcessingMode::Batch);
        assert_eq!(ProcessingMode::Single.to_string(), "single");
    }
}
