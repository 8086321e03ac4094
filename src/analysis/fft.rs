//! Discrete Fourier transform helpers for the windowed frequency step
//!
//! Provides:
//! - Window functions applied to a buffered window before the transform
//! - Direct O(N²) DFT magnitude spectrum (the one the pipeline uses)
//! - A `rustfft` reference spectrum for cross-checking and benchmarks
//!
//! Both spectra keep only bins `[0, N/2)`; the mirrored upper half of a
//! real-valued input carries no extra information.

use rustfft::{num_complex::Complex, FftPlanner};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Window function type for DFT preprocessing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowFunction {
    /// Rectangular window (no windowing)
    #[default]
    Rectangular,
    /// Hann window (good general purpose)
    Hann,
    /// Hamming window (reduced side lobes)
    Hamming,
    /// Blackman window (very low side lobes)
    Blackman,
}

impl WindowFunction {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WindowFunction::Rectangular => "Rectangular",
            WindowFunction::Hann => "Hann",
            WindowFunction::Hamming => "Hamming",
            WindowFunction::Blackman => "Blackman",
        }
    }

    /// Get all window functions
    pub fn all() -> &'static [WindowFunction] {
        &[
            WindowFunction::Rectangular,
            WindowFunction::Hann,
            WindowFunction::Hamming,
            WindowFunction::Blackman,
        ]
    }

    /// Compute window coefficient at position i out of n samples
    pub fn coefficient(&self, i: usize, n: usize) -> f64 {
        let n_f = n as f64;
        let i_f = i as f64;

        match self {
            WindowFunction::Rectangular => 1.0,
            WindowFunction::Hann => 0.5 * (1.0 - (2.0 * PI * i_f / n_f).cos()),
            WindowFunction::Hamming => 0.54 - 0.46 * (2.0 * PI * i_f / n_f).cos(),
            WindowFunction::Blackman => {
                // The formula is exactly 0 at the endpoints; rounding can yield -ε.
                (0.42 - 0.5 * (2.0 * PI * i_f / n_f).cos() + 0.08 * (4.0 * PI * i_f / n_f).cos())
                    .max(0.0)
            }
        }
    }

    /// Generate window coefficients for n samples
    pub fn generate(&self, n: usize) -> Vec<f64> {
        (0..n).map(|i| self.coefficient(i, n)).collect()
    }

    /// Multiply `samples` by this window, returning a new buffer.
    pub fn apply(&self, samples: &[f64]) -> Vec<f64> {
        if *self == WindowFunction::Rectangular {
            return samples.to_vec();
        }
        let n = samples.len();
        samples
            .iter()
            .enumerate()
            .map(|(i, &s)| s * self.coefficient(i, n))
            .collect()
    }
}

/// Magnitude spectrum of one completed window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    /// Linear magnitudes of bins `[0, N/2)`.
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    /// Number of retained bins.
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Index and magnitude of the strongest bin.
    pub fn peak_bin(&self) -> Option<(usize, f64)> {
        self.magnitudes
            .iter()
            .copied()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Get the DC component (bin 0 magnitude)
    pub fn dc_component(&self) -> f64 {
        self.magnitudes.first().copied().unwrap_or(0.0)
    }
}

/// Direct discrete Fourier transform magnitudes.
///
/// `X[k] = Σ x[n]·e^(-2πi·k·n/N)` for every `k` in `[0, N/2)`. The upper half is
/// never computed since it is discarded anyway. Returns an empty vector for
/// empty input.
pub fn dft_magnitudes(samples: &[f64]) -> Vec<f64> {
    let n = samples.len();
    let n_f = n as f64;

    (0..n / 2)
        .map(|k| {
            let sum: Complex<f64> = samples
                .iter()
                .enumerate()
                .map(|(idx, &x)| {
                    let angle = -2.0 * PI * (k * idx) as f64 / n_f;
                    Complex::from_polar(x, angle)
                })
                .sum();
            sum.norm()
        })
        .collect()
}

/// Reference magnitudes computed with `rustfft`, same bin layout and scale as
/// [`dft_magnitudes`].
pub fn fft_magnitudes(samples: &[f64]) -> Vec<f64> {
    let n = samples.len();
    if n == 0 {
        return Vec::new();
    }

    let mut buffer: Vec<Complex<f64>> = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    buffer.iter().take(n / 2).map(|c| c.norm()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_functions() {
        let n = 100;
        for window in WindowFunction::all() {
            let coeffs = window.generate(n);
            assert_eq!(coeffs.len(), n);

            for &c in &coeffs {
                assert!(
                    (0.0..=1.0 + 1e-12).contains(&c),
                    "Window {} coefficient {} out of range",
                    window.display_name(),
                    c
                );
            }
        }
    }

    #[test]
    fn test_rectangular_apply_is_identity() {
        let samples = [1.0, -2.0, 3.5];
        assert_eq!(WindowFunction::Rectangular.apply(&samples), samples.to_vec());
    }

    #[test]
    fn test_dft_constant_signal() {
        // A DC signal puts all energy in bin 0: |X[0]| = N * value.
        let samples = vec![2.0; 32];
        let mags = dft_magnitudes(&samples);
        assert_eq!(mags.len(), 16);
        assert!((mags[0] - 64.0).abs() < 1e-9);
        for &m in &mags[1..] {
            assert!(m < 1e-9, "leakage {} in non-DC bin", m);
        }
    }

    #[test]
    fn test_dft_sine_peak() {
        let n = 32;
        let samples: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * 4.0 * i as f64 / n as f64).sin())
            .collect();

        let spectrum = Spectrum {
            magnitudes: dft_magnitudes(&samples),
        };
        let (bin, mag) = spectrum.peak_bin().expect("Should find peak");
        assert_eq!(bin, 4);
        assert!((mag - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_dft_matches_fft_reference() {
        let samples: Vec<f64> = (0..32).map(|i| ((i * 7) % 11) as f64 / 10.0).collect();
        let direct = dft_magnitudes(&samples);
        let reference = fft_magnitudes(&samples);
        assert_eq!(direct.len(), reference.len());
        for (a, b) in direct.iter().zip(reference.iter()) {
            assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(dft_magnitudes(&[]).is_empty());
        assert!(fft_magnitudes(&[]).is_empty());
        assert_eq!(Spectrum::default().dc_component(), 0.0);
        assert!(Spectrum::default().peak_bin().is_none());
    }
}
