//! Tone description shared by the generator and the detector
//!
//! A [`Wave`] is a sine tone locked to the buffer length: frequency index `k`
//! completes exactly `2^k` periods across the whole buffer, regardless of how
//! long the buffer is. Both directions of that mapping live here so the
//! generator and the detector cannot drift apart.

use std::fmt;

/// A single sine tone in a composite test signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wave {
    /// Frequency index: the tone completes `2^ind` periods over the buffer
    pub ind: u32,
    /// Peak amplitude in PCM16 sample units
    pub amp: i32,
}

impl Wave {
    /// Create a new wave
    pub const fn new(ind: u32, amp: i32) -> Self {
        Self { ind, amp }
    }

    /// Number of full sine periods this wave completes over one buffer (`2^ind`)
    ///
    /// Computed in floating point so that oversized indices alias instead of
    /// overflowing an integer shift.
    pub fn periods(&self) -> f64 {
        f64::from(self.ind).exp2()
    }

    /// Frequency index for an FFT bin, `floor(log2(bin))`
    ///
    /// Inverse of [`Wave::periods`] for power-of-two bins. Returns `None` for
    /// bin 0, which carries the DC offset and has no index.
    pub fn index_for_bin(bin: usize) -> Option<u32> {
        if bin == 0 {
            None
        } else {
            Some(bin.ilog2())
        }
    }
}

impl fmt::Display for Wave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ind={} amp={}", self.ind, self.amp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_are_powers_of_two() {
        assert_eq!(Wave::new(0, 1).periods(), 1.0);
        assert_eq!(Wave::new(1, 1).periods(), 2.0);
        assert_eq!(Wave::new(5, 1).periods(), 32.0);
        // Well past any integer shift width
        assert_eq!(Wave::new(70, 1).periods(), 2.0f64.powi(70));
    }

    #[test]
    fn test_index_for_bin() {
        assert_eq!(Wave::index_for_bin(0), None);
        assert_eq!(Wave::index_for_bin(1), Some(0));
        assert_eq!(Wave::index_for_bin(2), Some(1));
        assert_eq!(Wave::index_for_bin(3), Some(1));
        assert_eq!(Wave::index_for_bin(8), Some(3));
        assert_eq!(Wave::index_for_bin(1023), Some(9));
    }

    #[test]
    fn test_index_inverts_periods() {
        for ind in 0..16 {
            let bin = Wave::new(ind, 1).periods() as usize;
            assert_eq!(Wave::index_for_bin(bin), Some(ind));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Wave::new(3, 42).to_string(), "ind=3 amp=42");
    }
}
