//! Discrete Fourier transform backends
//!
//! The detector only needs an unnormalized forward transform, so the
//! backend is a single-method trait. [`RustFftTransform`] is the default;
//! [`NaiveDft`] is a direct O(N²) evaluation useful for cross-checking.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;
use std::f64::consts::PI;

/// Forward, unnormalized discrete Fourier transform
///
/// Implementations must return exactly `input.len()` bins, where bin `k` is
/// `sum(x[n] * exp(-2πi·k·n/N))`.
pub trait SpectrumTransform: Send + Sync {
    /// Transform a time-domain sequence into frequency bins
    fn transform(&self, input: &[Complex<f64>]) -> Vec<Complex<f64>>;
}

/// FFT backend using rustfft
#[derive(Debug, Clone, Copy, Default)]
pub struct RustFftTransform;

impl RustFftTransform {
    /// Create a new rustfft backend
    pub fn new() -> Self {
        Self
    }
}

impl SpectrumTransform for RustFftTransform {
    fn transform(&self, input: &[Complex<f64>]) -> Vec<Complex<f64>> {
        let mut buffer = input.to_vec();
        if buffer.is_empty() {
            return buffer;
        }

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(buffer.len());
        fft.process(&mut buffer);

        buffer
    }
}

/// Direct DFT evaluation (slow but simple)
///
/// Works for any length; intended for tests and for checking FFT backends.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveDft;

impl SpectrumTransform for NaiveDft {
    fn transform(&self, input: &[Complex<f64>]) -> Vec<Complex<f64>> {
        let n = input.len();

        (0..n)
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .map(|(i, &x)| {
                        // Reduce k*i mod n first to keep the angle small
                        let angle = -2.0 * PI * ((k * i) % n) as f64 / n as f64;
                        x * Complex::from_polar(1.0, angle)
                    })
                    .sum()
            })
            .collect()
    }
}
