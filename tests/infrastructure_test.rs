//! Test to verify test infrastructure works correctly

mod common;

use common::builders::TestPipelineBuilder;
use dspflow::ProcessingMode;

#[test]
fn test_infrastructure_setup() {
    // Test that builders work
    let builder = TestPipelineBuilder::new()
        .mode(ProcessingMode::Single)
        .batch_size(4)
        .threshold(2.5)
        .step("GenerateData");

    assert_eq!(builder.config().generator.processing_mode, ProcessingMode::Single);
    assert_eq!(builder.config().generator.batch_size, 4);
    assert_eq!(builder.config().generator.seed, Some(common::TEST_SEED));
    assert_eq!(builder.config().branch.threshold, 2.5);

    let (pipeline, _bridge) = builder.build();
    assert_eq!(pipeline.len(), 1);
}

#[test]
fn test_float_comparison() {
    common::assert_float_eq(1.0, 1.0000001, 0.001);
}

#[test]
#[should_panic]
fn test_float_comparison_fails() {
    common::assert_float_eq(1.0, 2.0, 0.001);
}

#[test]
#[should_panic]
fn test_generated_sample_off_grid_fails() {
    common::assert_generated_sample(1.05);
}
