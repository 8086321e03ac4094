//! Step-based signal processing pipeline.
//!
//! Samples flow through an ordered list of steps, each created by name from
//! the [`StepFactory`] registry. Steps expose optional capabilities (sample
//! log, threshold flag, switchable mode, spectrum, smoothing) which the
//! executor inspects after every step to publish events.
//!
//! # Architecture
//!
//! ```text
//! [GenerateData] ──► [Transform] ──► [LowPassFilter] ──► [Branch] ──► [Plot]
//!                                                           │            │
//!                                                   BranchTaken   PlotDataUpdated
//!                                                           └──► PipelineBridge ◄┘
//! ```
//!
//! # Design
//!
//! - **Trait objects**: every step is a `Box<dyn Step>` built by a registered constructor.
//! - **Capability accessors**: `as_*` methods replace runtime type checks.
//! - **Channel events**: notifications go through a crossbeam channel, drained by the caller.

pub mod bridge;
pub mod executor;
pub mod factory;
pub mod id;
pub mod step;
pub mod step_type;
pub mod steps;

pub use bridge::{EventSink, PipelineBridge, PipelineEvent};
pub use executor::{Dispatch, Pipeline, PipelineBuilder};
pub use factory::StepFactory;
pub use id::StepId;
pub use step::{ModeSwitch, ProcessingMode, SampleLog, Smoothing, SpectrumSource, Step, ThresholdFlag};
pub use step_type::StepType;
