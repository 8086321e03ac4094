//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use dspflow::PipelineEvent;

/// Seed used by tests that need a reproducible generator
pub const TEST_SEED: u64 = 0x5eed;

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}

/// Assert a sample lies on the generator's grid `0.0, 0.1, ..., 9.9`
pub fn assert_generated_sample(v: f64) {
    assert!((0.0..=9.9).contains(&v), "sample {} out of range", v);
    let level = (v * 10.0).round();
    assert_float_eq(level / 10.0, v, 1e-9);
}

/// Plot payloads in emission order
pub fn plot_updates(events: &[PipelineEvent]) -> Vec<Vec<f64>> {
    events
        .iter()
        .filter_map(|e| match e {
            PipelineEvent::PlotDataUpdated(data) => Some(data.clone()),
            _ => None,
        })
        .collect()
}

/// Branch flags in emission order
pub fn branch_flags(events: &[PipelineEvent]) -> Vec<bool> {
    events
        .iter()
        .filter_map(|e| match e {
            PipelineEvent::BranchTaken(taken) => Some(*taken),
            _ => None,
        })
        .collect()
}
