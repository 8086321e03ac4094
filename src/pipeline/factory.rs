//! Factory for creating steps by type name.
//!
//! The registry maps each built-in type name to a zero-argument constructor.
//! It is populated once in [`StepFactory::new`] and read-only afterwards.
//! Constructors capture the engine config and the event sink, so every step
//! they build starts from the configured defaults and reports its property
//! changes on the pipeline's channel.

use crate::config::EngineConfig;
use crate::pipeline::bridge::EventSink;
use crate::pipeline::step::Step;
use crate::pipeline::step_type::StepType;
use crate::pipeline::steps::{
    BranchStep, FftStep, GenerateDataStep, LowPassFilterStep, PlotStep, TransformStep,
};
use std::collections::BTreeMap;

type StepConstructor = Box<dyn Fn() -> Box<dyn Step> + Send + Sync>;

pub struct StepFactory {
    constructors: BTreeMap<&'static str, StepConstructor>,
}

impl StepFactory {
    /// Registry with the default config and no event channel.
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default(), EventSink::detached())
    }

    /// Registry whose constructors use `config` and publish on `events`.
    pub fn with_config(config: &EngineConfig, events: EventSink) -> Self {
        let mut factory = Self {
            constructors: BTreeMap::new(),
        };
        for &step_type in StepType::all() {
            let config = config.clone();
            let events = events.clone();
            factory.register(
                step_type.name(),
                Box::new(move || build_step(step_type, &config, &events)),
            );
        }
        factory
    }

    fn register(&mut self, name: &'static str, constructor: StepConstructor) {
        self.constructors.insert(name, constructor);
    }

    /// Create a fresh step of the given type, or `None` if unregistered.
    pub fn create_step(&self, type_name: &str) -> Option<Box<dyn Step>> {
        self.constructors.get(type_name).map(|ctor| ctor())
    }

    /// Registered type names, sorted.
    pub fn available_steps(&self) -> Vec<String> {
        self.constructors.keys().map(|k| k.to_string()).collect()
    }

    pub fn is_registered(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }
}

impl Default for StepFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn build_step(step_type: StepType, config: &EngineConfig, events: &EventSink) -> Box<dyn Step> {
    match step_type {
        StepType::GenerateData => Box::new(GenerateDataStep::with_config(
            &config.generator,
            events.clone(),
        )),
        StepType::Transform => Box::new(TransformStep::new()),
        StepType::Branch => Box::new(BranchStep::new(config.branch.threshold)),
        StepType::Plot => Box::new(PlotStep::new()),
        StepType::Fft => Box::new(FftStep::with_config(&config.fft)),
        StepType::LowPassFilter => Box::new(LowPassFilterStep::with_config(
            &config.low_pass,
            events.clone(),
        )),
    }
}
