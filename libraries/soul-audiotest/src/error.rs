//! Error types for tone verification

use crate::wave::Wave;
use thiserror::Error;

/// Result type alias using `ToneError`
pub type Result<T> = std::result::Result<T, ToneError>;

/// Errors reported when detected tones do not match the expected ones
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToneError {
    /// No tone was detected at the expected frequency index
    #[error("Tone not detected: {wave}")]
    Missing {
        /// The expected wave
        wave: Wave,
    },

    /// A tone was detected at the right index but with the wrong amplitude
    #[error("Amplitude mismatch: expected {expected}, found {found} (tolerance {tolerance})")]
    AmplitudeMismatch {
        /// The expected wave
        expected: Wave,
        /// The detected wave at the same index
        found: Wave,
        /// Allowed amplitude difference
        tolerance: i32,
    },
}
