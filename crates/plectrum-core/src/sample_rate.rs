//! Sample-rate defaults, validation, and buffer sizing.
//!
//! Every generator produces `floor(duration * sample_rate)` samples. The
//! helpers here centralize that arithmetic so that all synthesizers and
//! buffer utilities agree on lengths to the sample.

use crate::error::{Error, Result};

/// Sample rate used when a caller does not provide one (CD quality).
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Resolve an optional sample rate, falling back to [`DEFAULT_SAMPLE_RATE`].
///
/// `None` and `Some(0)` both resolve to the default. This is the lenient
/// path used by the one-call signal helpers; validated code should prefer
/// [`validate_sample_rate`].
///
/// ```rust
/// use plectrum_core::{resolve_sample_rate, DEFAULT_SAMPLE_RATE};
///
/// assert_eq!(resolve_sample_rate(None), DEFAULT_SAMPLE_RATE);
/// assert_eq!(resolve_sample_rate(Some(0)), DEFAULT_SAMPLE_RATE);
/// assert_eq!(resolve_sample_rate(Some(8000)), 8000);
/// ```
pub fn resolve_sample_rate(rate: Option<u32>) -> u32 {
    match rate {
        Some(r) if r > 0 => r,
        _ => DEFAULT_SAMPLE_RATE,
    }
}

/// Reject a zero sample rate.
pub fn validate_sample_rate(rate: u32) -> Result<u32> {
    if rate == 0 {
        return Err(Error::invalid_config(
            "sample_rate",
            "must be greater than zero",
        ));
    }
    Ok(rate)
}

/// Reject a frequency that is not strictly positive and finite.
pub fn validate_frequency(param: &'static str, frequency: f64) -> Result<f64> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(Error::invalid_config(
            param,
            format!("must be a positive finite frequency, got {frequency}"),
        ));
    }
    Ok(frequency)
}

/// Reject a negative or non-finite duration.
pub fn validate_duration(duration: f64) -> Result<f64> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(Error::InvalidDuration(duration));
    }
    Ok(duration)
}

/// Number of samples covering `duration` seconds: `floor(duration * rate)`.
///
/// Negative and NaN durations produce an empty length.
#[inline]
pub fn buffer_len(duration: f64, sample_rate: u32) -> usize {
    // `as` saturates: negatives and NaN become 0
    (duration * f64::from(sample_rate)) as usize
}

/// Duration in seconds of `len` samples at `sample_rate`.
#[inline]
pub fn duration_of(len: usize, sample_rate: u32) -> f64 {
    len as f64 / f64::from(sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_len_floors() {
        assert_eq!(buffer_len(2.0, 44_100), 88_200);
        assert_eq!(buffer_len(0.5, 3), 1);
        assert_eq!(buffer_len(0.0, 44_100), 0);
    }

    #[test]
    fn buffer_len_rejects_negative_and_nan() {
        assert_eq!(buffer_len(-1.0, 44_100), 0);
        assert_eq!(buffer_len(f64::NAN, 44_100), 0);
    }

    #[test]
    fn validation() {
        assert!(validate_sample_rate(0).is_err());
        assert_eq!(validate_sample_rate(48_000), Ok(48_000));
        assert!(validate_frequency("frequency", 0.0).is_err());
        assert!(validate_frequency("frequency", f64::INFINITY).is_err());
        assert!(validate_frequency("frequency", 440.0).is_ok());
        assert_eq!(validate_duration(-0.1), Err(Error::InvalidDuration(-0.1)));
    }

    #[test]
    fn duration_roundtrip() {
        let len = buffer_len(1.5, 48_000);
        assert!((duration_of(len, 48_000) - 1.5).abs() < 1e-12);
    }
}
