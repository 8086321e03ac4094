//! Analysis module for signal processing
//!
//! This module provides the frequency-domain tools used by the windowed
//! transform step:
//! - Direct DFT magnitude spectrum
//! - `rustfft` reference spectrum
//! - Window functions

pub mod fft;

pub use fft::{dft_magnitudes, fft_magnitudes, Spectrum, WindowFunction};
