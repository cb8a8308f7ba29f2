//! Tone detection via FFT peak picking
//!
//! Recovers the [`Wave`]s that [`gen_signal`](crate::gen_signal) put into a
//! buffer. The buffer is transformed once, the lower half of the spectrum is
//! scanned for bins above the noise floor, and each surviving bin is mapped
//! back to a frequency index and an amplitude.

use crate::transform::{RustFftTransform, SpectrumTransform};
use crate::wave::Wave;
use rustfft::num_complex::Complex;
use std::cmp::Reverse;
use tracing::{debug, trace};

/// Detection tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    /// Minimum normalized amplitude for a bin to count as a tone
    pub noise_floor: f64,
    /// Added before rounding to compensate for the generator's truncation
    pub amplitude_bias: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            noise_floor: 1.0,
            amplitude_bias: 0.5,
        }
    }
}

impl DetectorConfig {
    /// Report every non-zero bin (no noise floor)
    pub fn sensitive() -> Self {
        Self {
            noise_floor: f64::MIN_POSITIVE,
            ..Self::default()
        }
    }
}

/// Reusable tone detector over a pluggable transform backend
#[derive(Debug, Clone, Default)]
pub struct SignalDetector<T = RustFftTransform> {
    transform: T,
    config: DetectorConfig,
}

impl SignalDetector<RustFftTransform> {
    /// Create a detector with the rustfft backend and default settings
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: SpectrumTransform> SignalDetector<T> {
    /// Create a detector over a specific transform backend
    pub fn with_transform(transform: T) -> Self {
        Self {
            transform,
            config: DetectorConfig::default(),
        }
    }

    /// Replace the detection settings
    pub fn with_config(mut self, config: DetectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Current detection settings
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detect tones in `src`
    ///
    /// Returns the detected waves, loudest first. Waves of equal amplitude
    /// keep ascending frequency order. Buffers shorter than two samples have
    /// no usable bins and yield an empty list.
    pub fn detect(&self, src: &[i16]) -> Vec<Wave> {
        let n = src.len();
        if n < 2 {
            debug!("Buffer too short for tone detection ({} samples)", n);
            return Vec::new();
        }

        let input: Vec<Complex<f64>> = src
            .iter()
            .map(|&s| Complex::new(f64::from(s), 0.0))
            .collect();
        let spectrum = self.transform.transform(&input);

        // The upper half mirrors the lower one for real input; bin 0 is DC.
        let half = (n / 2).min(spectrum.len());
        let mut waves = Vec::new();
        for (bin, value) in spectrum.iter().enumerate().take(half).skip(1) {
            // 1/N normalizes the transform, 2x restores the dropped mirror half
            let amplitude = 2.0 * value.norm() / n as f64;
            if amplitude < self.config.noise_floor {
                continue;
            }

            let Some(ind) = Wave::index_for_bin(bin) else {
                continue;
            };
            let amp = (amplitude + self.config.amplitude_bias).round() as i32;
            trace!("Bin {} -> ind={} amp={} (raw {:.3})", bin, ind, amp, amplitude);
            waves.push(Wave::new(ind, amp));
        }

        // Loudest first
        waves.sort_by_key(|w| Reverse(w.amp));

        debug!("Detected {} tone(s) in {} samples", waves.len(), n);
        waves
    }
}

/// Detect tones previously generated by [`gen_signal`](crate::gen_signal)
///
/// Uses the rustfft backend with [`DetectorConfig::default`].
pub fn find_signal(src: &[i16]) -> Vec<Wave> {
    SignalDetector::new().detect(src)
}
