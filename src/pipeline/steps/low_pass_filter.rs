//! LowPassFilterStep: first-order exponential smoothing.
//!
//! `y = alpha * x + (1 - alpha) * y_prev`, committing `y` as the new `y_prev`
//! after every sample. Batch calls use the default per-sample mapping since
//! the state carries across samples.

use crate::config::{LowPassConfig, DEFAULT_ALPHA};
use crate::pipeline::bridge::{EventSink, PipelineEvent};
use crate::pipeline::step::{Smoothing, Step};
use crate::pipeline::step_type::StepType;

pub struct LowPassFilterStep {
    alpha: f64,
    y_prev: f64,
    events: EventSink,
}

impl LowPassFilterStep {
    /// `alpha = 0.1`, memory cleared.
    pub fn new() -> Self {
        Self::with_config(&LowPassConfig::default(), EventSink::detached())
    }

    pub fn with_config(config: &LowPassConfig, events: EventSink) -> Self {
        let alpha = if config.alpha.is_finite() {
            config.alpha
        } else {
            DEFAULT_ALPHA
        };
        Self {
            alpha,
            y_prev: 0.0,
            events,
        }
    }

    /// Last committed output.
    pub fn y_prev(&self) -> f64 {
        self.y_prev
    }
}

impl Default for LowPassFilterStep {
    fn default() -> Self {
        Self::new()
    }
}

/// Relative comparison for coefficient updates. Zero only equals zero.
fn fuzzy_eq(a: f64, b: f64) -> bool {
    (a - b).abs() * 1e12 <= a.abs().min(b.abs())
}

impl Step for LowPassFilterStep {
    fn name(&self) -> &str {
        StepType::LowPassFilter.name()
    }

    fn execute(&mut self, sample: f64) -> f64 {
        let y = self.alpha * sample + (1.0 - self.alpha) * self.y_prev;
        self.y_prev = y;
        y
    }

    fn as_smoothing(&mut self) -> Option<&mut dyn Smoothing> {
        Some(self)
    }
}

impl Smoothing for LowPassFilterStep {
    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: f64) -> bool {
        if fuzzy_eq(alpha, self.alpha) {
            return false;
        }
        self.alpha = alpha;
        tracing::debug!("{} alpha -> {}", self.name(), alpha);
        self.events.emit(PipelineEvent::AlphaChanged {
            step: self.name().to_string(),
            alpha,
        });
        true
    }
}
