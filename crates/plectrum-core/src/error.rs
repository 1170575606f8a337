//! Error taxonomy shared by every plectrum crate.
//!
//! Lookups in fixed tables (note labels, guitar strings, chords) and
//! precondition checks (sample rate, frequency, FFT length) all report
//! through [`Error`]. Nothing in the library aborts the process: the caller
//! decides whether a failed lookup is fatal.

use thiserror::Error;

/// Errors produced by plectrum operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A synthesis or processing parameter is outside its valid domain.
    #[error("invalid configuration for '{param}': {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        param: &'static str,
        /// Description of why the value is rejected.
        reason: String,
    },

    /// A duration is negative or not finite.
    #[error("invalid duration: {0} s")]
    InvalidDuration(f64),

    /// A note label is not one of the twelve chromatic labels.
    #[error("unknown note label: {0}")]
    UnknownNoteLabel(String),

    /// A guitar string number is outside 1..=6.
    #[error("unknown guitar string number: {0}")]
    UnknownStringNumber(i64),

    /// A chord name is not in the chord book.
    #[error("unknown chord: {0}")]
    UnknownChord(String),

    /// The recursive radix-2 FFT was given a length that is not a power of two.
    #[error("FFT length {0} is not a power of two")]
    NonPowerOfTwoLength(usize),
}

impl Error {
    /// Create an invalid configuration error.
    pub fn invalid_config(param: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            param,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout plectrum.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_display() {
        let err = Error::invalid_config("sample_rate", "must be positive");
        assert_eq!(
            err.to_string(),
            "invalid configuration for 'sample_rate': must be positive"
        );
    }

    #[test]
    fn lookup_errors_display() {
        assert_eq!(
            Error::UnknownNoteLabel("Ut".to_string()).to_string(),
            "unknown note label: Ut"
        );
        assert_eq!(
            Error::UnknownStringNumber(7).to_string(),
            "unknown guitar string number: 7"
        );
        assert_eq!(
            Error::UnknownChord("Si7".to_string()).to_string(),
            "unknown chord: Si7"
        );
    }

    #[test]
    fn fft_length_display() {
        let msg = Error::NonPowerOfTwoLength(10).to_string();
        assert!(msg.contains("10"), "got: {msg}");
        assert!(msg.contains("power of two"), "got: {msg}");
    }
}
