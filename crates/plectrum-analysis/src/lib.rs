//! Plectrum Analysis - spectra of synthesized signals
//!
//! - [`fft()`] - recursive radix-2 FFT (power-of-two lengths only)
//! - [`fft_any_len`] - any length, falling back to a planned `rustfft` transform
//! - [`fftfreq`] - bin frequencies in FFT order
//! - [`spectrum()`] - one-sided amplitude [`Spectrum`] with peak search
//!
//! # Example
//!
//! ```rust
//! use plectrum_analysis::spectrum;
//! use plectrum_synth::signal::sine_wave_signal;
//!
//! let samples = sine_wave_signal(100.0, 1.0, 2.0, Some(44100));
//! let spec = spectrum(&samples, 44100).unwrap();
//! let peak = spec.peak().unwrap();
//! assert!((peak.frequency - 100.0).abs() <= 1.0);
//! ```

pub mod fft;
pub mod spectrum;

pub use fft::{fft, fft_any_len, fftfreq, one_sided_len};
pub use rustfft::num_complex::Complex64;
pub use spectrum::{Peak, Spectrum, spectrum};
