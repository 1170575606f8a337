//! Amplitude and frequency modulation of a sine carrier.

use core::f64::consts::TAU;

use plectrum_core::{Result, buffer_len, validate_frequency};

use crate::synthesizer::{Synthesizer, impl_harmonic, validate_harmonic};

/// Amplitude modulation: `(a + depth·sin(ψ))·sin(φ)`.
///
/// Both phases are accumulated; the envelope value used for sample `i` is
/// the one computed after sample `i - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeModulation {
    sample_rate: u32,
    frequency: f64,
    amplitude: f64,
    mod_frequency: f64,
    mod_depth: f64,
}

impl AmplitudeModulation {
    /// Carrier at `frequency`, envelope oscillating at `mod_frequency` by ±`mod_depth`.
    pub fn new(
        frequency: f64,
        amplitude: f64,
        mod_frequency: f64,
        mod_depth: f64,
        sample_rate: u32,
    ) -> Self {
        Self {
            sample_rate,
            frequency,
            amplitude,
            mod_frequency,
            mod_depth,
        }
    }

    /// Envelope oscillation frequency in Hz.
    pub fn mod_frequency(&self) -> f64 {
        self.mod_frequency
    }

    /// Envelope swing around the base amplitude.
    pub fn mod_depth(&self) -> f64 {
        self.mod_depth
    }
}

impl Synthesizer for AmplitudeModulation {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn synthesize(&mut self, duration: f64) -> Vec<f64> {
        let len = buffer_len(duration, self.sample_rate);
        let rate = f64::from(self.sample_rate);
        let carrier_step = TAU * self.frequency / rate;
        let envelope_step = TAU * self.mod_frequency / rate;

        let mut carrier = 0.0_f64;
        let mut envelope = 0.0_f64;
        let mut amplitude = self.amplitude;
        let mut samples = Vec::with_capacity(len);
        for _ in 0..len {
            samples.push(amplitude * carrier.sin());
            carrier += carrier_step;
            envelope += envelope_step;
            amplitude = self.amplitude + self.mod_depth * envelope.sin();
        }
        samples
    }

    fn validate(&self) -> Result<()> {
        validate_harmonic(self.sample_rate, self.frequency)?;
        validate_frequency("mod_frequency", self.mod_frequency)?;
        Ok(())
    }
}

impl_harmonic!(AmplitudeModulation);

/// How [`FrequencyModulation`] turns the instantaneous frequency into a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseMode {
    /// `φ += 2π·f_i/r`: a smooth vibrato.
    #[default]
    Accumulated,
    /// `φ = 2π·f_i·i/r`: the phase jumps whenever `f_i` moves, and the jump
    /// grows with `i`. Produces a "laser" chirp instead of a vibrato; kept
    /// as a sound effect.
    Direct,
}

/// Frequency modulation: carrier frequency `f + deviation·sin(ψ)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyModulation {
    sample_rate: u32,
    frequency: f64,
    amplitude: f64,
    mod_frequency: f64,
    deviation: f64,
    phase_mode: PhaseMode,
}

impl FrequencyModulation {
    /// Carrier at `frequency` swinging ±`deviation` Hz at `mod_frequency`.
    pub fn new(
        frequency: f64,
        amplitude: f64,
        mod_frequency: f64,
        deviation: f64,
        sample_rate: u32,
    ) -> Self {
        Self {
            sample_rate,
            frequency,
            amplitude,
            mod_frequency,
            deviation,
            phase_mode: PhaseMode::Accumulated,
        }
    }

    /// Select the phase computation.
    pub fn with_phase_mode(mut self, phase_mode: PhaseMode) -> Self {
        self.phase_mode = phase_mode;
        self
    }

    /// Current phase computation.
    pub fn phase_mode(&self) -> PhaseMode {
        self.phase_mode
    }

    /// Modulator frequency in Hz.
    pub fn mod_frequency(&self) -> f64 {
        self.mod_frequency
    }

    /// Peak frequency deviation in Hz.
    pub fn deviation(&self) -> f64 {
        self.deviation
    }

    fn accumulated(&self, len: usize) -> Vec<f64> {
        let rate = f64::from(self.sample_rate);
        let mod_step = TAU * self.mod_frequency / rate;
        let mut carrier = 0.0_f64;
        let mut modulator = 0.0_f64;
        let mut samples = Vec::with_capacity(len);
        for _ in 0..len {
            samples.push(self.amplitude * carrier.sin());
            modulator += mod_step;
            let frequency = self.frequency + self.deviation * modulator.sin();
            carrier += TAU * frequency / rate;
        }
        samples
    }

    fn direct(&self, len: usize) -> Vec<f64> {
        let rate = f64::from(self.sample_rate);
        (0..len)
            .map(|i| {
                let t = i as f64 / rate;
                let frequency = self.frequency + self.deviation * (TAU * self.mod_frequency * t).sin();
                self.amplitude * (TAU * frequency * t).sin()
            })
            .collect()
    }
}

impl Synthesizer for FrequencyModulation {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn synthesize(&mut self, duration: f64) -> Vec<f64> {
        let len = buffer_len(duration, self.sample_rate);
        match self.phase_mode {
            PhaseMode::Accumulated => self.accumulated(len),
            PhaseMode::Direct => self.direct(len),
        }
    }

    fn validate(&self) -> Result<()> {
        validate_harmonic(self.sample_rate, self.frequency)?;
        validate_frequency("mod_frequency", self.mod_frequency)?;
        Ok(())
    }
}

impl_harmonic!(FrequencyModulation);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn am_envelope_bounds() {
        let mut am = AmplitudeModulation::new(440.0, 0.5, 2.0, 0.25, 44100);
        let samples = am.synthesize(1.0);
        assert_eq!(samples.len(), 44100);
        assert!(samples.iter().all(|v| v.abs() <= 0.75 + 1e-12));
        let peak = samples.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        assert!(peak > 0.7, "peak = {peak}");
    }

    #[test]
    fn am_without_depth_is_a_sine() {
        let mut am = AmplitudeModulation::new(220.0, 1.0, 5.0, 0.0, 44100);
        let mut sine = crate::SineWave::new(220.0, 1.0, 44100);
        assert_eq!(am.synthesize(0.1), sine.synthesize(0.1));
    }

    #[test]
    fn fm_without_deviation_is_a_sine() {
        let mut fm = FrequencyModulation::new(220.0, 1.0, 5.0, 0.0, 44100);
        let mut sine = crate::SineWave::new(220.0, 1.0, 44100);
        let a = fm.synthesize(0.1);
        let b = sine.synthesize(0.1);
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).abs() < 1e-9);
        }
    }

    #[test]
    fn fm_accumulated_keeps_mean_pitch() {
        // whole number of modulator cycles
        let mut fm = FrequencyModulation::new(400.0, 1.0, 4.0, 50.0, 48000);
        let samples = fm.synthesize(1.0);
        let crossings = samples.windows(2).filter(|w| w[0] <= 0.0 && w[1] > 0.0).count() as i64;
        assert!((crossings - 400).abs() <= 3, "crossings = {crossings}");
    }

    #[test]
    fn direct_mode_differs_from_accumulated() {
        let mut smooth = FrequencyModulation::new(400.0, 1.0, 4.0, 50.0, 48000);
        let mut laser = smooth.clone().with_phase_mode(PhaseMode::Direct);
        assert_eq!(laser.phase_mode(), PhaseMode::Direct);
        let a = smooth.synthesize(0.5);
        let b = laser.synthesize(0.5);
        assert_eq!(a.len(), b.len());
        assert_eq!(b[0], 0.0);
        assert!(a.iter().zip(&b).any(|(x, y)| (x - y).abs() > 0.1));
        assert!(b.iter().all(|v| v.abs() <= 1.0));
    }
}
