//! FftStep: windowed frequency transform.
//!
//! Passes samples through unchanged while buffering them. Each time the buffer
//! reaches `window_size` samples, the magnitude spectrum of that window
//! (bins `[0, N/2)`) replaces the previous one and the buffer is cleared.
//! A partially filled buffer never produces a spectrum.

use crate::analysis::{dft_magnitudes, Spectrum, WindowFunction};
use crate::config::{FftStepConfig, DEFAULT_WINDOW_SIZE};
use crate::pipeline::step::{SpectrumSource, Step};
use crate::pipeline::step_type::StepType;

#[derive(Debug, Clone)]
pub struct FftStep {
    window_size: usize,
    window: WindowFunction,
    buffer: Vec<f64>,
    magnitude: Spectrum,
    windows_completed: u64,
}

impl FftStep {
    /// 32-sample rectangular window.
    pub fn new() -> Self {
        Self::with_config(&FftStepConfig::default())
    }

    pub fn with_config(config: &FftStepConfig) -> Self {
        let window_size = if config.window_size < 2 {
            DEFAULT_WINDOW_SIZE
        } else {
            config.window_size
        };
        Self {
            window_size,
            window: config.window,
            buffer: Vec::with_capacity(window_size),
            magnitude: Spectrum::default(),
            windows_completed: 0,
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Samples waiting for the current window to fill.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Number of windows transformed since construction.
    pub fn windows_completed(&self) -> u64 {
        self.windows_completed
    }

    /// Full spectrum of the last completed window.
    pub fn spectrum(&self) -> &Spectrum {
        &self.magnitude
    }

    fn perform_transform(&mut self) {
        let windowed = self.window.apply(&self.buffer);
        self.magnitude = Spectrum {
            magnitudes: dft_magnitudes(&windowed),
        };
        self.windows_completed += 1;
        tracing::debug!(
            "FFT window {} complete ({} bins, {} window)",
            self.windows_completed,
            self.magnitude.len(),
            self.window.display_name()
        );
    }
}

impl Default for FftStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Step for FftStep {
    fn name(&self) -> &str {
        StepType::Fft.name()
    }

    fn execute(&mut self, sample: f64) -> f64 {
        self.buffer.push(sample);
        if self.buffer.len() >= self.window_size {
            self.perform_transform();
            self.buffer.clear();
        }
        sample
    }

    fn execute_batch(&mut self, samples: &[f64]) -> Vec<f64> {
        for &s in samples {
            self.execute(s);
        }
        samples.to_vec()
    }

    fn as_spectrum(&self) -> Option<&dyn SpectrumSource> {
        Some(self)
    }
}

impl SpectrumSource for FftStep {
    fn magnitude_spectrum(&self) -> &[f64] {
        &self.magnitude.magnitudes
    }
}
