//! Linear frequency sweep.

use core::f64::consts::TAU;

use plectrum_core::{Result, buffer_len, validate_frequency, validate_sample_rate};

use crate::synthesizer::Synthesizer;

/// Sine whose frequency moves linearly from `start` to `end` Hz across the buffer.
///
/// Sample `i` of `n` plays at `start + (end - start)·i/n`. The phase is
/// accumulated (`φ += 2π·f_i/r`) so the pitch glides without the warble
/// that recomputing `φ = 2π·f_i·i/r` produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepFrequency {
    sample_rate: u32,
    start: f64,
    end: f64,
    amplitude: f64,
}

impl SweepFrequency {
    /// Create a sweep from `start` to `end` Hz.
    pub fn new(start: f64, end: f64, amplitude: f64, sample_rate: u32) -> Self {
        Self {
            sample_rate,
            start,
            end,
            amplitude,
        }
    }

    /// Starting frequency in Hz.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Final frequency in Hz.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Set the peak amplitude.
    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = amplitude;
    }
}

impl Synthesizer for SweepFrequency {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn synthesize(&mut self, duration: f64) -> Vec<f64> {
        let len = buffer_len(duration, self.sample_rate);
        let rate = f64::from(self.sample_rate);
        let span = self.end - self.start;
        let mut angle = 0.0_f64;
        let mut samples = Vec::with_capacity(len);
        for i in 0..len {
            samples.push(self.amplitude * angle.sin());
            let frequency = self.start + span * i as f64 / len as f64;
            angle += TAU * frequency / rate;
        }
        samples
    }

    fn validate(&self) -> Result<()> {
        validate_sample_rate(self.sample_rate)?;
        validate_frequency("start", self.start)?;
        validate_frequency("end", self.end)?;
        Ok(())
    }
}
