//! Composite sine-wave generation
//!
//! Fills a PCM16 buffer with the sum of the given [`Wave`]s. Every wave is
//! locked to the buffer length (index 0 fits one full period into the
//! buffer), so the detector can recover it from an FFT of the same length.

use crate::wave::Wave;
use std::f64::consts::PI;

/// Generate a composite sine signal into `dst` (in-place)
///
/// Every sample is overwritten with the sum of all waves, truncated toward
/// zero. The sum is not clamped: keep the total amplitude within the PCM16
/// range (see [`fits_pcm16`](crate::fits_pcm16)), otherwise samples wrap.
///
/// An empty `waves` slice produces silence; an empty `dst` is a no-op.
pub fn gen_signal(dst: &mut [i16], waves: &[Wave]) {
    let len = dst.len() as f64;

    for (i, sample) in dst.iter_mut().enumerate() {
        let t = i as f64 / len;
        let value: f64 = waves
            .iter()
            .map(|w| f64::from(w.amp) * (t * 2.0 * PI * w.periods()).sin())
            .sum();
        *sample = quantize(value);
    }
}

/// Allocate a buffer of `len` samples and fill it with [`gen_signal`]
pub fn generate_signal(len: usize, waves: &[Wave]) -> Vec<i16> {
    let mut samples = vec![0i16; len];
    gen_signal(&mut samples, waves);
    samples
}

/// Truncate toward zero, then wrap into 16 bits
fn quantize(value: f64) -> i16 {
    value as i64 as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_is_noop() {
        let mut buffer: [i16; 0] = [];
        gen_signal(&mut buffer, &[Wave::new(1, 100)]);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_no_waves_writes_silence() {
        let mut buffer = vec![123i16; 64];
        gen_signal(&mut buffer, &[]);
        assert!(buffer.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_single_period_shape() {
        // Index 0 = one period over the buffer: quarter points hit the peaks
        let buffer = generate_signal(8, &[Wave::new(0, 1000)]);

        assert_eq!(buffer[0], 0);
        assert_eq!(buffer[2], 1000);
        assert_eq!(buffer[4], 0);
        assert_eq!(buffer[6], -1000);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // sin(pi/4) * 10 = 7.07 -> 7, and -7.07 -> -7 (not -8)
        let buffer = generate_signal(8, &[Wave::new(0, 10)]);

        assert_eq!(buffer[1], 7);
        assert_eq!(buffer[5], -7);
    }

    #[test]
    fn test_waves_are_summed() {
        let a = generate_signal(256, &[Wave::new(1, 100)]);
        let b = generate_signal(256, &[Wave::new(4, 50)]);
        let sum = generate_signal(256, &[Wave::new(1, 100), Wave::new(4, 50)]);

        for i in 0..256 {
            let diff = i32::from(sum[i]) - i32::from(a[i]) - i32::from(b[i]);
            // Each buffer truncates independently
            assert!(diff.abs() <= 1, "sample {i}: sum {} vs {} + {}", sum[i], a[i], b[i]);
        }
    }

    #[test]
    fn test_overflow_wraps() {
        // Peak of 40000 does not fit in i16 and is not clamped
        let buffer = generate_signal(4, &[Wave::new(0, 40000)]);
        assert_eq!(buffer[1], (40000i64 as i16));
        assert!(buffer[1] < 0);
    }

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(0.99), 0);
        assert_eq!(quantize(-0.99), 0);
        assert_eq!(quantize(32767.9), 32767);
        assert_eq!(quantize(32768.0), i16::MIN);
    }
}
