//! GenerateDataStep: pseudo-random sample source.
//!
//! Ignores its input. Samples are drawn uniformly from the 100 values
//! `0.0, 0.1, …, 9.9`. In `single` mode a batch call yields one sample,
//! in `batch` mode it yields `batch_size` samples.

use crate::config::GeneratorConfig;
use crate::error::{DspFlowError, Result};
use crate::pipeline::bridge::{EventSink, PipelineEvent};
use crate::pipeline::step::{ModeSwitch, ProcessingMode, Step};
use crate::pipeline::step_type::StepType;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of distinct values a sample can take.
const SAMPLE_LEVELS: u32 = 100;

/// Divisor mapping a level to its sample value.
const SAMPLE_SCALE: f64 = 10.0;

pub struct GenerateDataStep {
    processing_mode: ProcessingMode,
    batch_size: usize,
    rng: StdRng,
    events: EventSink,
}

impl GenerateDataStep {
    /// Batch mode, 10 samples per batch, entropy-seeded.
    pub fn new() -> Self {
        Self::with_config(&GeneratorConfig::default(), EventSink::detached())
    }

    pub fn with_config(config: &GeneratorConfig, events: EventSink) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            processing_mode: config.processing_mode,
            batch_size: config.batch_size.max(1),
            rng,
            events,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Set the number of samples a batch-mode call produces.
    pub fn set_batch_size(&mut self, batch_size: usize) -> Result<()> {
        if batch_size == 0 {
            return Err(DspFlowError::invalid_parameter(
                "batch_size",
                "must be at least 1",
            ));
        }
        self.batch_size = batch_size;
        Ok(())
    }

    fn generate_sample(&mut self) -> f64 {
        f64::from(self.rng.gen_range(0..SAMPLE_LEVELS)) / SAMPLE_SCALE
    }
}

impl Default for GenerateDataStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for GenerateDataStep {
    fn name(&self) -> &str {
        StepType::GenerateData.name()
    }

    fn execute(&mut self, _sample: f64) -> f64 {
        self.generate_sample()
    }

    fn execute_batch(&mut self, _samples: &[f64]) -> Vec<f64> {
        let count = match self.processing_mode {
            ProcessingMode::Single => 1,
            ProcessingMode::Batch => self.batch_size,
        };
        (0..count).map(|_| self.generate_sample()).collect()
    }

    fn as_mode_switch(&mut self) -> Option<&mut dyn ModeSwitch> {
        Some(self)
    }
}

impl ModeSwitch for GenerateDataStep {
    fn processing_mode(&self) -> ProcessingMode {
        self.processing_mode
    }

    fn set_processing_mode(&mut self, mode: ProcessingMode) -> bool {
        if mode == self.processing_mode {
            return false;
        }
        self.processing_mode = mode;
        tracing::debug!("{} processing mode -> {}", self.name(), mode);
        self.events.emit(PipelineEvent::ProcessingModeChanged {
            step: self.name().to_string(),
            mode,
        });
        true
    }
}
