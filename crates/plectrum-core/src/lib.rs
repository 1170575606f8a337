//! Plectrum Core - shared primitives for synthesis and analysis
//!
//! This crate holds the pieces every other plectrum crate builds on:
//!
//! - [`Error`] / [`Result`] - the error taxonomy (invalid configuration,
//!   unknown note/string/chord labels, FFT length violations)
//! - [`note`] - equal-tempered [`Note`] and [`Interval`] arithmetic anchored at La3 = 440 Hz
//! - [`buffer`] - in-place and copying transforms over sample buffers
//!   (noise, reversal, decimation, rescaling, sigmoid boundary smoothing)
//! - [`sample_rate`] - default rate, validation, and `floor(duration * rate)` sizing
//!
//! # Sample buffers
//!
//! A sample buffer is a plain `Vec<f64>` of uniformly spaced samples at a
//! sample rate the caller keeps track of. Values are nominally within
//! `[-amplitude, amplitude]` but are never clipped by this crate.
//!
//! # Example
//!
//! ```rust
//! use plectrum_core::{buffer, Note};
//!
//! let note = Note::from_label(2, "Mi").unwrap();
//! let freq = note.frequency();
//!
//! let rate = 8000;
//! let mut samples: Vec<f64> = (0..rate)
//!     .map(|i| (2.0 * std::f64::consts::PI * freq * f64::from(i) / f64::from(rate)).sin())
//!     .collect();
//! buffer::smooth_boundaries(&mut samples, rate, 0.05);
//! assert!(samples[0].abs() < 1e-9);
//! ```

pub mod buffer;
pub mod error;
pub mod note;
pub mod sample_rate;

pub use buffer::{
    BufferStats, RescaleCoefficients, add_noise, apply_gain, concat, decimate, min_max, mix,
    normalize, rescale, reverse, reversed, sigmoid, silence, smooth_boundaries,
};
pub use error::{Error, Result};
pub use note::{
    HALF_TONES_PER_OCTAVE, Interval, LA3, NOTE_LABELS, Note, REFERENCE_FREQUENCY, label_to_index,
};
pub use sample_rate::{
    DEFAULT_SAMPLE_RATE, buffer_len, duration_of, resolve_sample_rate, validate_duration,
    validate_frequency, validate_sample_rate,
};
