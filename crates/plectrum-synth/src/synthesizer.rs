//! The synthesizer trait family.
//!
//! Every generator turns a duration into a complete, fixed-length buffer of
//! `floor(duration * sample_rate)` samples. Synthesis is batch only: each
//! call starts from phase zero and keeps nothing from the previous call.
//!
//! Generators with a pitch also implement [`HarmonicSynthesizer`], whose
//! frequency and amplitude setters let one instance play a sequence of
//! notes (a guitar reuses a single Karplus-Strong string this way).
//!
//! # Preconditions
//!
//! [`Synthesizer::synthesize`] does not check its inputs: a zero sample rate
//! or a non-positive frequency propagates as NaN/∞ into the buffer, exactly
//! like the arithmetic it performs. [`Synthesizer::try_synthesize`] runs
//! [`Synthesizer::validate`] first and reports
//! [`Error::InvalidConfiguration`](plectrum_core::Error::InvalidConfiguration).

use plectrum_core::{Result, validate_duration, validate_frequency, validate_sample_rate};

/// A generator producing a complete sample buffer for a duration.
pub trait Synthesizer {
    /// Sample rate of the produced buffers, in Hz.
    fn sample_rate(&self) -> u32;

    /// Produce `floor(duration * sample_rate)` samples.
    ///
    /// Only reads the generator's configuration; phase always restarts at 0.
    fn synthesize(&mut self, duration: f64) -> Vec<f64>;

    /// Check the configuration against the generator's preconditions.
    ///
    /// The default only checks the sample rate.
    fn validate(&self) -> Result<()> {
        validate_sample_rate(self.sample_rate())?;
        Ok(())
    }

    /// Validate the configuration and the duration, then synthesize.
    fn try_synthesize(&mut self, duration: f64) -> Result<Vec<f64>> {
        self.validate()?;
        validate_duration(duration)?;
        Ok(self.synthesize(duration))
    }
}

/// A synthesizer with a fundamental frequency and a peak amplitude.
pub trait HarmonicSynthesizer: Synthesizer {
    /// Fundamental frequency in Hz.
    fn frequency(&self) -> f64;

    /// Change the frequency used by the next [`Synthesizer::synthesize`] call.
    fn set_frequency(&mut self, frequency: f64);

    /// Peak amplitude (1.0 is nominal).
    fn amplitude(&self) -> f64;

    /// Change the amplitude used by the next [`Synthesizer::synthesize`] call.
    fn set_amplitude(&mut self, amplitude: f64);
}

/// Validation shared by pitched generators: sample rate and frequency.
pub(crate) fn validate_harmonic(sample_rate: u32, frequency: f64) -> Result<()> {
    validate_sample_rate(sample_rate)?;
    validate_frequency("frequency", frequency)?;
    Ok(())
}

/// Implements [`HarmonicSynthesizer`] for a struct with `frequency` and
/// `amplitude` fields.
macro_rules! impl_harmonic {
    ($ty:ty) => {
        impl $crate::synthesizer::HarmonicSynthesizer for $ty {
            fn frequency(&self) -> f64 {
                self.frequency
            }

            fn set_frequency(&mut self, frequency: f64) {
                self.frequency = frequency;
            }

            fn amplitude(&self) -> f64 {
                self.amplitude
            }

            fn set_amplitude(&mut self, amplitude: f64) {
                self.amplitude = amplitude;
            }
        }
    };
}

pub(crate) use impl_harmonic;
