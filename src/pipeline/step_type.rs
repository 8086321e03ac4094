//! Step type enumeration for dynamic step creation.
//!
//! This module defines the built-in step types that the factory registers
//! and that callers address by name.

/// Types of steps that can be instantiated by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepType {
    // Source
    /// Pseudo-random sample generator.
    GenerateData,

    // Transforms
    /// Doubles each sample.
    Transform,
    /// Exponential smoothing filter.
    LowPassFilter,

    // Passthrough steps with side state
    /// Records whether the latest sample exceeded a threshold.
    Branch,
    /// Windowed frequency transform.
    Fft,

    // Sink
    /// Accumulates every sample it sees.
    Plot,
}

impl StepType {
    /// Registry name of this step type. Also the `name` of every instance.
    pub fn name(&self) -> &'static str {
        match self {
            StepType::GenerateData => "GenerateData",
            StepType::Transform => "Transform",
            StepType::Branch => "Branch",
            StepType::Plot => "Plot",
            StepType::Fft => "FFT",
            StepType::LowPassFilter => "LowPassFilter",
        }
    }

    /// Get all available step types.
    pub fn all() -> &'static [StepType] {
        &[
            StepType::GenerateData,
            StepType::Transform,
            StepType::Branch,
            StepType::Plot,
            StepType::Fft,
            StepType::LowPassFilter,
        ]
    }

    /// Look up a step type by its exact registry name.
    pub fn from_name(name: &str) -> Option<StepType> {
        Self::all().iter().copied().find(|t| t.name() == name)
    }

    /// Check if this step type is a data source.
    pub fn is_source(&self) -> bool {
        matches!(self, StepType::GenerateData)
    }

    /// Check if this step type is a sink.
    pub fn is_sink(&self) -> bool {
        matches!(self, StepType::Plot)
    }

    /// Get a detailed description of what this step does.
    pub fn description(&self) -> &'static str {
        match self {
            StepType::GenerateData =>
                "Generates pseudo-random samples in [0, 10).\n\
                 Ignores its input entirely.\n\
                 Single mode yields one sample, batch mode batch_size.",

            StepType::Transform =>
                "Doubles every sample.",

            StepType::Branch =>
                "Passes samples through unchanged.\n\
                 Records whether the latest one exceeded the threshold.",

            StepType::Plot =>
                "Passes samples through unchanged.\n\
                 Appends every sample to an ever-growing log.",

            StepType::Fft =>
                "Passes samples through unchanged.\n\
                 Buffers a fixed window and computes its magnitude spectrum\n\
                 each time the window fills.",

            StepType::LowPassFilter =>
                "Exponential moving average.\n\
                 y = alpha * x + (1 - alpha) * y_prev.",
        }
    }
}

impl std::fmt::Display for StepType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
