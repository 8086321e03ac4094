//! Test data builders for creating test pipelines

use super::TEST_SEED;
use dspflow::{EngineConfig, Pipeline, PipelineBridge, PipelineBuilder, ProcessingMode};

/// Builder for seeded pipelines with a drained event queue
pub struct TestPipelineBuilder {
    config: EngineConfig,
    steps: Vec<String>,
}

impl TestPipelineBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default().with_seed(TEST_SEED),
            steps: Vec::new(),
        }
    }

    pub fn mode(mut self, mode: ProcessingMode) -> Self {
        self.config.generator.processing_mode = mode;
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.config.generator.batch_size = batch_size;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.branch.threshold = threshold;
        self
    }

    pub fn step(mut self, name: &str) -> Self {
        self.steps.push(name.to_string());
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build the pipeline and discard the `StepAdded` events
    pub fn build(self) -> (Pipeline, PipelineBridge) {
        let (pipeline, bridge) = PipelineBuilder::new(self.config)
            .steps(self.steps)
            .build()
            .expect("test pipeline should build");
        bridge.drain();
        (pipeline, bridge)
    }
}

impl Default for TestPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_builder() {
        let (pipeline, bridge) = TestPipelineBuilder::new()
            .step("Transform")
            .step("Plot")
            .build();

        assert_eq!(pipeline.len(), 2);
        assert_eq!(bridge.pending(), 0);
    }
}
