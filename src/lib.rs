//! # dspflow: step-based signal processing pipelines
//!
//! Samples are generated, scaled, smoothed, thresholded, transformed to the
//! frequency domain and recorded by a chain of steps that are created by name.
//!
//! ## Architecture
//!
//! - **Pipeline**: ordered list of steps with single-value and generator-driven runs
//! - **Steps**: six built-in step types registered in a `StepFactory`
//! - **Analysis**: window functions and magnitude spectra
//! - **Communication**: crossbeam channel carrying `PipelineEvent`s to the caller
//!
//! ## Configuration
//!
//! Step defaults are read from `engine.toml` (or a JSON file) in the platform
//! config directory under `dspflow`:
//!
//! - **Linux**: `~/.config/dspflow/engine.toml`
//! - **macOS**: `~/Library/Application Support/dspflow/engine.toml`
//! - **Windows**: `%APPDATA%\dspflow\engine.toml`
//!
//! ## Example
//!
//! ```no_run
//! use dspflow::{EngineConfig, PipelineBuilder, PipelineEvent};
//!
//! fn main() -> dspflow::Result<()> {
//!     let (mut pipeline, bridge) = PipelineBuilder::new(EngineConfig::default())
//!         .steps(["GenerateData", "Transform", "Plot"])
//!         .build()?;
//!
//!     let output = pipeline.run();
//!     for event in bridge.iter_pending() {
//!         if let PipelineEvent::PlotDataUpdated(data) = event {
//!             println!("plotted {} samples", data.len());
//!         }
//!     }
//!     println!("{:?}", output);
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use config::EngineConfig;
pub use error::{DspFlowError, Result, ResultExt};
pub use pipeline::{
    Pipeline, PipelineBridge, PipelineBuilder, PipelineEvent, ProcessingMode, Step, StepFactory,
    StepType,
};
