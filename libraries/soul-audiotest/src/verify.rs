//! Assertions for tests that push generated tones through an audio path
//!
//! Typical use: generate a fixture with [`generate_signal`](crate::generate_signal),
//! send it through the pipeline under test, then call [`verify_signal`] on
//! what comes out.

use crate::detector::find_signal;
use crate::error::{Result, ToneError};
use crate::wave::Wave;
use tracing::debug;

/// Check that every expected wave is present in `detected`
///
/// A wave matches when a detection has the same frequency index and an
/// amplitude within `tolerance`. Extra detections are allowed. The first
/// failing expectation (in `expected` order) is reported.
pub fn check_waves(detected: &[Wave], expected: &[Wave], tolerance: i32) -> Result<()> {
    for want in expected {
        let Some(found) = detected.iter().find(|w| w.ind == want.ind) else {
            return Err(ToneError::Missing { wave: *want });
        };

        if (found.amp - want.amp).abs() > tolerance {
            return Err(ToneError::AmplitudeMismatch {
                expected: *want,
                found: *found,
                tolerance,
            });
        }
    }

    Ok(())
}

/// Detect tones in `src` and check them against `expected`
///
/// Returns the full detection list on success.
pub fn verify_signal(src: &[i16], expected: &[Wave], tolerance: i32) -> Result<Vec<Wave>> {
    let detected = find_signal(src);
    check_waves(&detected, expected, tolerance)?;

    debug!(
        "Verified {} expected tone(s) ({} detected)",
        expected.len(),
        detected.len()
    );
    Ok(detected)
}

/// Worst-case peak of the summed waves (sum of absolute amplitudes)
pub fn peak_sum(waves: &[Wave]) -> i64 {
    waves.iter().map(|w| i64::from(w.amp).abs()).sum()
}

/// Whether the summed waves are guaranteed to stay within the PCM16 range
///
/// The generator does not clamp, so fixtures should check this up front.
pub fn fits_pcm16(waves: &[Wave]) -> bool {
    peak_sum(waves) <= i64::from(i16::MAX)
}
