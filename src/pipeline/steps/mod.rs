//! Built-in pipeline step implementations.

pub mod branch;
pub mod fft;
pub mod generate_data;
pub mod low_pass_filter;
pub mod plot;
pub mod transform;

pub use branch::BranchStep;
pub use fft::FftStep;
pub use generate_data::GenerateDataStep;
pub use low_pass_filter::LowPassFilterStep;
pub use plot::PlotStep;
pub use transform::TransformStep;
