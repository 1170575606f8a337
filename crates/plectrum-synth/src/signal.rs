//! One-call signal builders.
//!
//! Each helper builds a generator, synthesizes `duration` seconds, and drops
//! the generator. The sample rate is optional: `None` (or `Some(0)`) falls
//! back to [`DEFAULT_SAMPLE_RATE`](plectrum_core::DEFAULT_SAMPLE_RATE).
//!
//! ```rust
//! use plectrum_synth::signal::sine_wave_signal;
//!
//! let samples = sine_wave_signal(440.0, 1.0, 0.5, None);
//! assert_eq!(samples.len(), 22050);
//! ```

use plectrum_core::{resolve_sample_rate, reverse};

use crate::{KarplusStrong, PwmWave, SineWave, SweepFrequency, Synthesizer, TriangleWave};

/// Sine wave samples.
pub fn sine_wave_signal(
    frequency: f64,
    amplitude: f64,
    duration: f64,
    rate: Option<u32>,
) -> Vec<f64> {
    SineWave::new(frequency, amplitude, resolve_sample_rate(rate)).synthesize(duration)
}

/// Square wave samples.
pub fn square_wave_signal(
    frequency: f64,
    amplitude: f64,
    duration: f64,
    rate: Option<u32>,
) -> Vec<f64> {
    PwmWave::square(frequency, amplitude, resolve_sample_rate(rate)).synthesize(duration)
}

/// Pulse-width modulated samples.
pub fn pwm_wave_signal(
    frequency: f64,
    amplitude: f64,
    duration: f64,
    duty_cycle: f64,
    rate: Option<u32>,
) -> Vec<f64> {
    PwmWave::new(frequency, amplitude, duty_cycle, resolve_sample_rate(rate)).synthesize(duration)
}

/// Triangle wave samples.
pub fn triangle_wave_signal(
    frequency: f64,
    amplitude: f64,
    duration: f64,
    rising_rate: f64,
    rate: Option<u32>,
) -> Vec<f64> {
    TriangleWave::new(frequency, amplitude, rising_rate, resolve_sample_rate(rate))
        .synthesize(duration)
}

/// Sawtooth wave samples.
pub fn sawtooth_wave_signal(
    frequency: f64,
    amplitude: f64,
    duration: f64,
    rate: Option<u32>,
) -> Vec<f64> {
    TriangleWave::sawtooth(frequency, amplitude, resolve_sample_rate(rate)).synthesize(duration)
}

/// A single Karplus-Strong pluck with the default level.
pub fn karplus_strong_signal(
    frequency: f64,
    amplitude: f64,
    duration: f64,
    rate: Option<u32>,
) -> Vec<f64> {
    KarplusStrong::new(frequency, amplitude, resolve_sample_rate(rate)).synthesize(duration)
}

/// Linear sweep between `min` and `max` Hz.
///
/// With `reversed` the buffer is flipped, so the sweep descends from `max` to
/// `min` and ends at phase zero.
pub fn sweep_frequency_signal(
    min: f64,
    max: f64,
    amplitude: f64,
    duration: f64,
    rate: Option<u32>,
    reversed: bool,
) -> Vec<f64> {
    let mut samples =
        SweepFrequency::new(min, max, amplitude, resolve_sample_rate(rate)).synthesize(duration);
    if reversed {
        reverse(&mut samples);
    }
    samples
}
