//! Preset validation.
//!
//! Every check runs; failures are collected so a preset with several bad
//! parameters reports all of them at once.
//!
//! # Example
//!
//! ```rust
//! use plectrum_config::{SynthPreset, ValidationError, WaveformConfig};
//!
//! let preset = SynthPreset::new("Broken", WaveformConfig::Pwm { frequency: -1.0, duty_cycle: 2.0 })
//!     .with_sample_rate(0);
//! match preset.validate() {
//!     Err(ValidationError::Multiple(errors)) => assert_eq!(errors.len(), 3),
//!     other => panic!("expected several errors, got {other:?}"),
//! }
//! ```

use thiserror::Error;

use crate::preset::{SynthPreset, WaveformConfig};

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The preset has no name.
    #[error("preset name is empty")]
    EmptyName,

    /// Sample rate of zero.
    #[error("sample rate must be positive")]
    InvalidSampleRate,

    /// A frequency that is not positive and finite.
    #[error("'{param}' must be a positive frequency, got {value}")]
    InvalidFrequency {
        /// Name of the parameter.
        param: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        param: &'static str,
        /// The value that was out of range.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// A value that must be finite is NaN or infinite.
    #[error("parameter '{param}' must be finite, got {value}")]
    NotFinite {
        /// Name of the parameter.
        param: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[derive(Default)]
struct Collector {
    errors: Vec<ValidationError>,
}

impl Collector {
    fn frequency(&mut self, param: &'static str, value: f64) {
        if !(value.is_finite() && value > 0.0) {
            self.errors
                .push(ValidationError::InvalidFrequency { param, value });
        }
    }

    fn unit(&mut self, param: &'static str, value: f64) {
        self.range(param, value, 0.0, 1.0);
    }

    fn range(&mut self, param: &'static str, value: f64, min: f64, max: f64) {
        if !(min..=max).contains(&value) {
            self.errors.push(ValidationError::OutOfRange {
                param,
                value,
                min,
                max,
            });
        }
    }

    fn finite(&mut self, param: &'static str, value: f64) {
        if !value.is_finite() {
            self.errors.push(ValidationError::NotFinite { param, value });
        }
    }

    fn finish(mut self) -> ValidationResult<()> {
        match self.errors.len() {
            0 => Ok(()),
            1 => Err(self.errors.remove(0)),
            _ => Err(ValidationError::Multiple(self.errors)),
        }
    }
}

/// Validate a single waveform configuration.
pub fn validate_waveform(waveform: &WaveformConfig) -> ValidationResult<()> {
    let mut collector = Collector::default();
    check_waveform(&mut collector, waveform);
    collector.finish()
}

/// Validate a whole preset: name, sample rate, amplitude, and waveform.
pub fn validate_preset(preset: &SynthPreset) -> ValidationResult<()> {
    let mut collector = Collector::default();
    if preset.name.trim().is_empty() {
        collector.errors.push(ValidationError::EmptyName);
    }
    if preset.sample_rate == 0 {
        collector.errors.push(ValidationError::InvalidSampleRate);
    }
    collector.finite("amplitude", preset.amplitude);
    check_waveform(&mut collector, &preset.waveform);
    collector.finish()
}

fn check_waveform(c: &mut Collector, waveform: &WaveformConfig) {
    match *waveform {
        WaveformConfig::Sine { frequency }
        | WaveformConfig::Square { frequency }
        | WaveformConfig::Sawtooth { frequency } => c.frequency("frequency", frequency),
        WaveformConfig::Pwm {
            frequency,
            duty_cycle,
        } => {
            c.frequency("frequency", frequency);
            c.unit("duty_cycle", duty_cycle);
        }
        WaveformConfig::Triangle {
            frequency,
            rising_rate,
        } => {
            c.frequency("frequency", frequency);
            c.unit("rising_rate", rising_rate);
        }
        WaveformConfig::KarplusStrong {
            frequency, level, ..
        } => {
            c.frequency("frequency", frequency);
            c.unit("level", level);
        }
        WaveformConfig::Sweep { start, end, .. } => {
            c.frequency("start", start);
            c.frequency("end", end);
        }
        WaveformConfig::Am {
            frequency,
            mod_frequency,
            mod_depth,
        } => {
            c.frequency("frequency", frequency);
            c.frequency("mod_frequency", mod_frequency);
            c.finite("mod_depth", mod_depth);
        }
        WaveformConfig::Fm {
            frequency,
            mod_frequency,
            deviation,
            ..
        } => {
            c.frequency("frequency", frequency);
            c.frequency("mod_frequency", mod_frequency);
            c.finite("deviation", deviation);
        }
    }
}
