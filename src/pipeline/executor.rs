//! Pipeline executor: ordered step list and run dispatch.
//!
//! A run feeds data through every step in insertion order. Two entry points:
//!
//! - [`Pipeline::run_value`] pushes one value through `execute` on every step.
//! - [`Pipeline::run`] starts from an empty working sequence and picks, per
//!   step, between generator seeding, single-value dispatch and batch dispatch:
//!   1. Empty sequence and a mode-switchable step: `single` mode seeds the
//!      sequence with `execute(0.0)`, `batch` mode with `execute_batch(&[])`.
//!   2. Exactly one element: `execute` on it, replacing it in place.
//!   3. Anything else: `execute_batch` on the whole sequence.
//!
//! Rule 2 is a length heuristic rather than a per-step contract. A step that
//! turns one value into many switches every later step to batch dispatch.
//!
//! After each step, a sample-log step publishes `PlotDataUpdated` and a
//! threshold step publishes `BranchTaken`.

use crate::config::EngineConfig;
use crate::error::{DspFlowError, Result, ResultExt};
use crate::pipeline::bridge::{EventSink, PipelineBridge, PipelineEvent};
use crate::pipeline::factory::StepFactory;
use crate::pipeline::id::StepId;
use crate::pipeline::step::{ProcessingMode, Step};

/// Which operation a step was dispatched with during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Mode-switchable step seeding an empty sequence.
    Seed(ProcessingMode),
    /// `execute` on the single flowing value.
    Single,
    /// `execute_batch` on the whole sequence.
    Batch,
}

/// Owns an append-only, ordered list of steps.
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
    factory: StepFactory,
    events: EventSink,
}

impl Pipeline {
    /// Create an empty pipeline whose steps use `config` and publish on `events`.
    pub fn new(config: &EngineConfig, events: EventSink) -> Self {
        Self {
            steps: Vec::new(),
            factory: StepFactory::with_config(config, events.clone()),
            events,
        }
    }

    /// Create an empty pipeline together with the bridge that receives its events.
    pub fn with_bridge(config: &EngineConfig) -> (Self, PipelineBridge) {
        let (bridge, events) = PipelineBridge::new();
        (Self::new(config, events), bridge)
    }

    // ── Graph building ──

    /// Append a new step of type `type_name`.
    ///
    /// Unknown names leave the pipeline unchanged and publish `UnknownStep`.
    pub fn add_step(&mut self, type_name: &str) -> Result<StepId> {
        let Some(step) = self.factory.create_step(type_name) else {
            tracing::warn!("Unknown step: {}", type_name);
            self.events.emit(PipelineEvent::UnknownStep {
                step_type: type_name.to_string(),
            });
            return Err(DspFlowError::UnknownStep(type_name.to_string()));
        };

        let id = StepId(self.steps.len() as u32);
        self.steps.push(step);
        tracing::info!("Added step {:?}: {}", id, type_name);
        self.events.emit(PipelineEvent::StepAdded {
            id,
            step_type: type_name.to_string(),
        });
        Ok(id)
    }

    /// Type names accepted by [`Pipeline::add_step`].
    pub fn available_steps(&self) -> Vec<String> {
        self.factory.available_steps()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in execution order.
    pub fn steps(&self) -> impl Iterator<Item = &dyn Step> + '_ {
        self.steps.iter().map(|s| &**s)
    }

    /// First step whose name equals `name`.
    pub fn step(&self, name: &str) -> Option<&dyn Step> {
        self.steps.iter().find(|s| s.name() == name).map(|s| &**s)
    }

    pub fn step_by_id(&self, id: StepId) -> Option<&dyn Step> {
        self.steps.get(id.index()).map(|s| &**s)
    }

    fn step_mut(&mut self, name: &str) -> Option<&mut Box<dyn Step>> {
        self.steps.iter_mut().find(|s| s.name() == name)
    }

    // ── Step properties ──

    /// Change the processing mode of the first step named `step_name`.
    ///
    /// Silently ignored if that step has no switchable mode or no step has
    /// the name; the mode string is not looked at in either case. For a
    /// switchable step it must be `single` or `batch`.
    pub fn set_step_mode(&mut self, step_name: &str, mode: &str) -> Result<()> {
        match self.step_mut(step_name) {
            Some(step) => match step.as_mode_switch() {
                Some(switch) => {
                    let mode: ProcessingMode = mode.parse()?;
                    switch.set_processing_mode(mode);
                }
                None => tracing::debug!("{} has no processing mode, ignoring", step_name),
            },
            None => tracing::debug!("No step named {}, ignoring mode change", step_name),
        }
        Ok(())
    }

    /// Change the smoothing coefficient of the first step named `step_name`.
    ///
    /// Silently ignored if that step has no coefficient. Non-finite values are
    /// rejected.
    pub fn set_step_alpha(&mut self, step_name: &str, alpha: f64) -> Result<()> {
        if !alpha.is_finite() {
            tracing::warn!("Rejected alpha {} for {}", alpha, step_name);
            return Err(DspFlowError::invalid_parameter("alpha", "must be finite"));
        }
        if let Some(smoothing) = self.step_mut(step_name).and_then(|s| s.as_smoothing()) {
            smoothing.set_alpha(alpha);
        }
        Ok(())
    }

    // ── Runs ──

    /// Push one value through every step in order; returns the last output.
    pub fn run_value(&mut self, value: f64) -> f64 {
        let mut v = value;
        for step in self.steps.iter_mut() {
            v = step.execute(v);
            publish_step_events(&self.events, &**step);
        }
        tracing::trace!("Single-value run over {} steps -> {}", self.steps.len(), v);
        v
    }

    /// Generator-driven run; returns the final working sequence.
    pub fn run(&mut self) -> Vec<f64> {
        let mut data: Vec<f64> = Vec::new();

        for step in self.steps.iter_mut() {
            let dispatch = choose_dispatch(&data, step.as_mut());
            match dispatch {
                Dispatch::Seed(ProcessingMode::Single) => data = vec![step.execute(0.0)],
                Dispatch::Seed(ProcessingMode::Batch) => data = step.execute_batch(&[]),
                Dispatch::Single => data[0] = step.execute(data[0]),
                Dispatch::Batch => data = step.execute_batch(&data),
            }
            tracing::debug!(
                "{} dispatched as {:?}, {} value(s) flowing",
                step.name(),
                dispatch,
                data.len()
            );
            publish_step_events(&self.events, &**step);
        }

        data
    }
}

/// Decide how `step` runs given the current working sequence.
fn choose_dispatch(data: &[f64], step: &mut dyn Step) -> Dispatch {
    if data.is_empty() {
        if let Some(switch) = step.as_mode_switch() {
            return Dispatch::Seed(switch.processing_mode());
        }
    }
    if data.len() == 1 {
        Dispatch::Single
    } else {
        Dispatch::Batch
    }
}

fn publish_step_events(events: &EventSink, step: &dyn Step) {
    if let Some(log) = step.as_sample_log() {
        events.emit(PipelineEvent::PlotDataUpdated(log.data().to_vec()));
    }
    if let Some(flag) = step.as_threshold_flag() {
        events.emit(PipelineEvent::BranchTaken(flag.branch_taken()));
    }
}

/// Builder for constructing a pipeline from a list of step type names.
pub struct PipelineBuilder {
    config: EngineConfig,
    step_types: Vec<String>,
}

impl PipelineBuilder {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            step_types: Vec::new(),
        }
    }

    /// Append a step type name.
    pub fn step(mut self, type_name: impl Into<String>) -> Self {
        self.step_types.push(type_name.into());
        self
    }

    /// Append several step type names.
    pub fn steps<I, S>(mut self, type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.step_types
            .extend(type_names.into_iter().map(Into::into));
        self
    }

    /// Validate the config and add every step, failing on the first unknown name.
    pub fn build(self) -> Result<(Pipeline, PipelineBridge)> {
        self.config.validate().context("engine config rejected")?;
        let (mut pipeline, bridge) = Pipeline::with_bridge(&self.config);
        for type_name in &self.step_types {
            pipeline.add_step(type_name)?;
        }
        Ok((pipeline, bridge))
    }
}
