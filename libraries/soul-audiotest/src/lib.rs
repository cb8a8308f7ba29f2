//! Test-signal fixtures for Soul Player audio paths
//!
//! This crate provides:
//! - Composite sine-wave generation into PCM16 buffers
//! - FFT-based tone detection that recovers the generated waves
//! - Assertion helpers for tests that check an audio path preserves tones
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ [Wave]      │ ──► │  gen_signal  │ ──► │ PCM16 buffer  │
//! └─────────────┘     └──────────────┘     └───────────────┘
//!                                                  │
//!                                         audio path under test
//!                                                  ▼
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ [Wave]      │ ◄── │ find_signal  │ ◄── │ PCM16 buffer  │
//! └─────────────┘     └──────────────┘     └───────────────┘
//! ```
//!
//! Frequencies are tied to the buffer length: a wave with index `k`
//! completes `2^k` periods over the buffer, so detection needs no sample
//! rate and works on any buffer length with enough resolution.
//!
//! # Example
//!
//! ```rust
//! use soul_audiotest::{find_signal, gen_signal, Wave};
//!
//! let waves = [Wave::new(1, 10), Wave::new(3, 5)];
//! let mut buffer = vec![0i16; 256];
//! gen_signal(&mut buffer, &waves);
//!
//! let detected = find_signal(&buffer);
//! assert_eq!(detected[0].ind, 1);
//! assert_eq!(detected[1].ind, 3);
//! ```

#![deny(unsafe_code)]

mod detector;
mod error;
mod generator;
mod transform;
mod verify;
mod wave;

pub use detector::{find_signal, DetectorConfig, SignalDetector};
pub use error::{Result, ToneError};
pub use generator::{gen_signal, generate_signal};
pub use transform::{NaiveDft, RustFftTransform, SpectrumTransform};
pub use verify::{check_waves, fits_pcm16, peak_sum, verify_signal};
pub use wave::Wave;

/// Complex sample type used by [`SpectrumTransform`]
pub use rustfft::num_complex::Complex;
