//! Periodic waveform generators: sine, PWM/square, and triangle/sawtooth.
//!
//! All three accumulate their phase sample by sample rather than recomputing
//! it from the sample index, so they stay continuous when their frequency is
//! later modulated or swept.

use core::f64::consts::TAU;

use plectrum_core::{Error, Result, buffer_len};

use crate::synthesizer::{Synthesizer, impl_harmonic, validate_harmonic};

/// Sine wave: `a * sin(φ)`, with `φ += 2π·f/r` each sample.
///
/// # Example
///
/// ```rust
/// use plectrum_synth::{SineWave, Synthesizer};
///
/// let mut sine = SineWave::new(440.0, 1.0, 44100);
/// let samples = sine.synthesize(0.5);
/// assert_eq!(samples.len(), 22050);
/// assert_eq!(samples[0], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SineWave {
    sample_rate: u32,
    frequency: f64,
    amplitude: f64,
}

impl SineWave {
    /// Create a sine generator.
    pub fn new(frequency: f64, amplitude: f64, sample_rate: u32) -> Self {
        Self {
            sample_rate,
            frequency,
            amplitude,
        }
    }
}

impl Synthesizer for SineWave {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn synthesize(&mut self, duration: f64) -> Vec<f64> {
        let len = buffer_len(duration, self.sample_rate);
        let step = TAU * self.frequency / f64::from(self.sample_rate);
        let mut angle = 0.0_f64;
        let mut samples = Vec::with_capacity(len);
        for _ in 0..len {
            samples.push(self.amplitude * angle.sin());
            angle += step;
        }
        samples
    }

    fn validate(&self) -> Result<()> {
        validate_harmonic(self.sample_rate, self.frequency)
    }
}

impl_harmonic!(SineWave);

/// Pulse-width modulated square wave.
///
/// Within each period of `r/f` samples, the first `duty_cycle` fraction is
/// `+amplitude` and the rest `-amplitude`. A duty cycle of 0.5 is a plain
/// square wave (see [`PwmWave::square`]).
#[derive(Debug, Clone, PartialEq)]
pub struct PwmWave {
    sample_rate: u32,
    frequency: f64,
    amplitude: f64,
    duty_cycle: f64,
}

impl PwmWave {
    /// Create a PWM generator with the given duty cycle in `[0, 1]`.
    pub fn new(frequency: f64, amplitude: f64, duty_cycle: f64, sample_rate: u32) -> Self {
        Self {
            sample_rate,
            frequency,
            amplitude,
            duty_cycle,
        }
    }

    /// Square wave: PWM with a 50% duty cycle.
    pub fn square(frequency: f64, amplitude: f64, sample_rate: u32) -> Self {
        Self::new(frequency, amplitude, 0.5, sample_rate)
    }

    /// Fraction of each period spent high.
    pub fn duty_cycle(&self) -> f64 {
        self.duty_cycle
    }

    /// Set the fraction of each period spent high.
    pub fn set_duty_cycle(&mut self, duty_cycle: f64) {
        self.duty_cycle = duty_cycle;
    }
}

impl Synthesizer for PwmWave {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn synthesize(&mut self, duration: f64) -> Vec<f64> {
        let len = buffer_len(duration, self.sample_rate);
        // phase in cycles, [0, 1)
        let step = self.frequency / f64::from(self.sample_rate);
        let mut phase = 0.0_f64;
        let mut samples = Vec::with_capacity(len);
        for _ in 0..len {
            let value = if phase < self.duty_cycle {
                self.amplitude
            } else {
                -self.amplitude
            };
            samples.push(value);
            phase = (phase + step).fract();
        }
        samples
    }

    fn validate(&self) -> Result<()> {
        validate_harmonic(self.sample_rate, self.frequency)?;
        if !(0.0..=1.0).contains(&self.duty_cycle) {
            return Err(Error::invalid_config(
                "duty_cycle",
                format!("{} is outside [0, 1]", self.duty_cycle),
            ));
        }
        Ok(())
    }
}

impl_harmonic!(PwmWave);

/// Triangle wave ramping linearly between `-amplitude` and `+amplitude`.
///
/// `rising_rate` is the fraction of each period spent rising; a rising rate
/// of 1 gives a sawtooth (see [`TriangleWave::sawtooth`]).
///
/// # Degenerate rising rates
///
/// The rise segment is clamped to at least one sample and at most
/// `period - 1` samples, so both slopes stay finite. The slope direction
/// flips on whichever comes first: the accumulated value reaching
/// ±amplitude, or the sample index crossing the rise/fall boundary. This
/// keeps the output inside `[-amplitude, amplitude]` without jumps.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleWave {
    sample_rate: u32,
    frequency: f64,
    amplitude: f64,
    rising_rate: f64,
}

impl TriangleWave {
    /// Create a triangle generator with the given rising rate in `[0, 1]`.
    pub fn new(frequency: f64, amplitude: f64, rising_rate: f64, sample_rate: u32) -> Self {
        Self {
            sample_rate,
            frequency,
            amplitude,
            rising_rate,
        }
    }

    /// Sawtooth: a triangle that spends the whole period rising.
    pub fn sawtooth(frequency: f64, amplitude: f64, sample_rate: u32) -> Self {
        Self::new(frequency, amplitude, 1.0, sample_rate)
    }

    /// Fraction of each period spent rising.
    pub fn rising_rate(&self) -> f64 {
        self.rising_rate
    }

    /// Set the fraction of each period spent rising.
    pub fn set_rising_rate(&mut self, rising_rate: f64) {
        self.rising_rate = rising_rate;
    }

    /// Rise and fall segment lengths, in samples, for a period of `period` samples.
    fn segments(&self, period: f64) -> (f64, f64) {
        let max_rise = (period - 1.0).max(1.0);
        let wanted = self.rising_rate * period;
        let rise = wanted.clamp(1.0, max_rise);
        if rise != wanted {
            tracing::debug!(wanted, rise, period, "triangle: rise segment clamped");
        }
        let fall = (period - rise).max(1.0);
        (rise, fall)
    }
}

impl Synthesizer for TriangleWave {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn synthesize(&mut self, duration: f64) -> Vec<f64> {
        let len = buffer_len(duration, self.sample_rate);
        let a = self.amplitude;
        let period = f64::from(self.sample_rate) / self.frequency;
        let (rise, fall) = self.segments(period);
        let up = 2.0 * a / rise;
        let down = 2.0 * a / fall;

        let mut samples = Vec::with_capacity(len);
        let mut value = -a;
        let mut rising = true;
        let mut index_rising = true;
        for i in 0..len {
            samples.push(value);

            let position = i as f64 % period;
            let now_rising = position < rise;
            if now_rising != index_rising {
                // boundary crossing forces the segment's direction
                rising = now_rising;
                index_rising = now_rising;
            }

            if rising {
                value += up;
                if value >= a {
                    value = a;
                    rising = false;
                }
            } else {
                value -= down;
                if value <= -a {
                    value = -a;
                    rising = true;
                }
            }
        }
        samples
    }

    fn validate(&self) -> Result<()> {
        validate_harmonic(self.sample_rate, self.frequency)?;
        if !(0.0..=1.0).contains(&self.rising_rate) {
            return Err(Error::invalid_config(
                "rising_rate",
                format!("{} is outside [0, 1]", self.rising_rate),
            ));
        }
        Ok(())
    }
}

impl_harmonic!(TriangleWave);
