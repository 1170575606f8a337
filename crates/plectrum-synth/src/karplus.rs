//! Karplus-Strong plucked string.
//!
//! A burst of filtered white noise, one period long, circulates through a
//! damped feedback delay line. Every call to
//! [`synthesize`](crate::Synthesizer::synthesize) is a fresh pluck with new
//! noise; nothing carries over from the previous note.
//!
//! # Signal chain
//!
//! ```text
//! noise[N] ─► pick-direction lowpass ─► pick-position comb ─► samples[0..N]
//!
//! samples[n] = c·(damp(n) - samples[n-1]) + damp(n-1)        for n ≥ N
//! damp(n)    = 0.996·((1-s)·samples[n-N] + s·samples[n-1-N])
//!
//! out = level^(4/3)·samples + (1-level)·lowpass(samples, w = π·f/r)
//! ```
//!
//! with `N = round(r/f)`, `p = 0.9`, `b = 0.1`, `s = 0.5`, `c = 0.1`. Delay
//! line reads before index 0 return 0. The order of operations in the
//! recurrence is fixed: reordering changes the decay character.
//!
//! # Reference
//!
//! - Jaffe & Smith, "Extensions of the Karplus-Strong Plucked-String
//!   Algorithm", Computer Music Journal 7(2), 1983

use core::f64::consts::PI;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use plectrum_core::{Error, Result, buffer_len};

use crate::synthesizer::{Synthesizer, impl_harmonic, validate_harmonic};

/// Pick-direction lowpass coefficient.
const PICK_DIRECTION: f64 = 0.9;
/// Pick position as a fraction of the string length.
const PICK_POSITION: f64 = 0.1;
/// String damping mix between the two delayed taps.
const STRING_DAMPING: f64 = 0.5;
/// Loop gain of the damping filter.
const LOOP_GAIN: f64 = 0.996;
/// First-order allpass tuning coefficient.
const TUNING_ALLPASS: f64 = 0.1;

/// Default dynamic level: half bright, half lowpassed.
pub const DEFAULT_LEVEL: f64 = 0.5;

/// Plucked-string generator.
///
/// Holds its own PRNG for the excitation noise. [`KarplusStrong::new`] seeds
/// it from the thread RNG; [`KarplusStrong::with_seed`] makes plucks
/// reproducible.
///
/// # Example
///
/// ```rust
/// use plectrum_synth::{KarplusStrong, Synthesizer};
///
/// let mut string = KarplusStrong::new(196.0, 1.0, 44100).with_seed(42);
/// let pluck = string.synthesize(1.0);
/// assert_eq!(pluck.len(), 44100);
/// assert!(pluck.iter().all(|v| v.is_finite()));
/// ```
#[derive(Debug, Clone)]
pub struct KarplusStrong {
    sample_rate: u32,
    frequency: f64,
    amplitude: f64,
    level: f64,
    rng: Pcg32,
}

impl KarplusStrong {
    /// Create a string at `frequency` with [`DEFAULT_LEVEL`].
    pub fn new(frequency: f64, amplitude: f64, sample_rate: u32) -> Self {
        Self {
            sample_rate,
            frequency,
            amplitude,
            level: DEFAULT_LEVEL,
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    /// Reseed the excitation noise deterministically.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Pcg32::seed_from_u64(seed);
        self
    }

    /// Set the dynamic level, builder style.
    pub fn with_level(mut self, level: f64) -> Self {
        self.level = level;
        self
    }

    /// Dynamic level in `[0, 1]`: 1 is bright, 0 fully lowpassed.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Set the dynamic level.
    pub fn set_level(&mut self, level: f64) {
        self.level = level;
    }

    /// Delay-line length in samples for the current frequency.
    pub fn delay_length(&self) -> usize {
        (f64::from(self.sample_rate) / self.frequency).round().max(1.0) as usize
    }

    /// The first `len` samples of one `period` of filtered noise.
    ///
    /// Both filters are causal, so samples past `len` never influence the
    /// ones kept; the comb offset still follows the full period.
    fn excitation(&mut self, period: usize, len: usize) -> Vec<f64> {
        let noise: Vec<f64> = (0..period.min(len))
            .map(|_| self.amplitude * (self.rng.random::<f64>() * 2.0 - 1.0))
            .collect();
        pick_position_comb(&pick_direction_lowpass(&noise), period)
    }
}

impl Synthesizer for KarplusStrong {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn synthesize(&mut self, duration: f64) -> Vec<f64> {
        let len = buffer_len(duration, self.sample_rate);
        if self.frequency.is_nan() || self.frequency <= 0.0 {
            tracing::warn!(
                frequency = self.frequency,
                "karplus-strong: non-positive frequency, rendering silence"
            );
            return vec![0.0; len];
        }

        let delay = self.delay_length();
        if delay < 2 {
            tracing::warn!(
                frequency = self.frequency,
                sample_rate = self.sample_rate,
                delay,
                "karplus-strong: delay line shorter than 2 samples"
            );
        }
        tracing::debug!(delay, len, "karplus-strong pluck");

        let excitation = self.excitation(delay, len);
        let mut samples = vec![0.0; len];
        samples[..excitation.len()].copy_from_slice(&excitation);

        for n in delay..len {
            samples[n] = string_tuning_allpass(&samples, n, delay);
        }

        let w = PI * self.frequency / f64::from(self.sample_rate);
        dynamic_level_lowpass(&mut samples, w, self.level);
        samples
    }

    fn validate(&self) -> Result<()> {
        validate_harmonic(self.sample_rate, self.frequency)?;
        if !(0.0..=1.0).contains(&self.level) {
            return Err(Error::invalid_config(
                "level",
                format!("{} is outside [0, 1]", self.level),
            ));
        }
        Ok(())
    }
}

impl_harmonic!(KarplusStrong);

/// `y[i] = (1-p)·x[i] + p·y[i-1]`
fn pick_direction_lowpass(noise: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(noise.len());
    let mut prev = 0.0;
    for &x in noise {
        prev = (1.0 - PICK_DIRECTION) * x + PICK_DIRECTION * prev;
        out.push(prev);
    }
    out
}

/// `y[i] = x[i] - x[i - pick]`, with `pick = round(b·N)` for a period of
/// `N` samples (or `N` when that rounds to 0).
fn pick_position_comb(noise: &[f64], period: usize) -> Vec<f64> {
    let pick = match (PICK_POSITION * period as f64).round() as usize {
        0 => period,
        pick => pick,
    };
    noise
        .iter()
        .enumerate()
        .map(|(i, &x)| match i.checked_sub(pick) {
            Some(j) => x - noise[j],
            None => x,
        })
        .collect()
}

#[inline]
fn delayed(samples: &[f64], n: usize, delay: usize) -> f64 {
    n.checked_sub(delay).map_or(0.0, |i| samples[i])
}

#[inline]
fn string_damping(samples: &[f64], n: usize, delay: usize) -> f64 {
    let previous = n.checked_sub(1).map_or(0.0, |m| delayed(samples, m, delay));
    LOOP_GAIN * ((1.0 - STRING_DAMPING) * delayed(samples, n, delay) + STRING_DAMPING * previous)
}

#[inline]
fn string_tuning_allpass(samples: &[f64], n: usize, delay: usize) -> f64 {
    TUNING_ALLPASS * (string_damping(samples, n, delay) - samples[n - 1])
        + string_damping(samples, n - 1, delay)
}

/// Blend the buffer with a lowpassed copy of itself, in place.
fn dynamic_level_lowpass(samples: &mut [f64], w: f64, level: f64) {
    let Some(&first) = samples.first() else {
        return;
    };
    let gain = w / (1.0 + w);
    let feedback = (1.0 - w) / (1.0 + w);

    let mut lowpassed = Vec::with_capacity(samples.len());
    lowpassed.push(gain * first);
    for i in 1..samples.len() {
        let y = gain * (samples[i] + samples[i - 1]) + feedback * lowpassed[i - 1];
        lowpassed.push(y);
    }

    let bright = level.powf(4.0 / 3.0);
    for (sample, lp) in samples.iter_mut().zip(lowpassed) {
        *sample = bright * *sample + (1.0 - level) * lp;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HarmonicSynthesizer;

    #[test]
    fn length_is_exact_even_when_shorter_than_delay() {
        let mut string = KarplusStrong::new(82.41, 1.0, 44100).with_seed(1);
        assert_eq!(string.synthesize(2.0).len(), 88200);
        // 535-sample delay line, 100-sample buffer
        assert_eq!(string.synthesize(100.0 / 44100.0).len(), 100);
        assert!(string.synthesize(0.0).is_empty());
    }

    #[test]
    fn delay_length_rounds() {
        let string = KarplusStrong::new(440.0, 1.0, 44100);
        // 100.227 -> 100
        assert_eq!(string.delay_length(), 100);
        let string = KarplusStrong::new(82.41, 1.0, 44100);
        // 535.13 -> 535
        assert_eq!(string.delay_length(), 535);
    }

    #[test]
    fn seeded_plucks_are_reproducible() {
        let a = KarplusStrong::new(220.0, 1.0, 44100).with_seed(9).synthesize(0.2);
        let b = KarplusStrong::new(220.0, 1.0, 44100).with_seed(9).synthesize(0.2);
        assert_eq!(a, b);
    }

    #[test]
    fn each_call_is_a_fresh_pluck() {
        let mut string = KarplusStrong::new(220.0, 1.0, 44100).with_seed(9);
        let first = string.synthesize(0.2);
        let second = string.synthesize(0.2);
        assert_ne!(first, second);
    }

    #[test]
    fn decays() {
        let mut string = KarplusStrong::new(196.0, 1.0, 44100).with_seed(3);
        let samples = string.synthesize(3.0);
        let rms = |s: &[f64]| (s.iter().map(|v| v * v).sum::<f64>() / s.len() as f64).sqrt();
        let head = rms(&samples[..4410]);
        let tail = rms(&samples[samples.len() - 4410..]);
        assert!(tail < head * 0.5, "head {head}, tail {tail}");
    }

    #[test]
    fn sub_audio_pluck_renders_only_the_buffer() {
        // 4.41e10-sample period, 441-sample buffer
        let mut string = KarplusStrong::new(1e-6, 1.0, 44100).with_seed(1);
        assert!(string.validate().is_ok());
        let samples = string.try_synthesize(0.01).unwrap();
        assert_eq!(samples.len(), 441);
        assert!(samples.iter().all(|v| v.is_finite()));
        assert!(samples.iter().any(|&v| v != 0.0));
    }

    #[test]
    fn truncated_excitation_matches_full_period_prefix() {
        let mut short = KarplusStrong::new(82.41, 1.0, 44100).with_seed(4);
        let mut full = short.clone();
        let head = short.excitation(535, 100);
        let whole = full.excitation(535, 10_000);
        assert_eq!(head.len(), 100);
        assert_eq!(whole.len(), 535);
        assert_eq!(head, whole[..100]);
    }

    #[test]
    fn zero_frequency_is_silence() {
        let mut string = KarplusStrong::new(0.0, 1.0, 44100);
        let samples = string.synthesize(0.1);
        assert_eq!(samples.len(), 4410);
        assert!(samples.iter().all(|&v| v == 0.0));
        assert!(string.validate().is_err());
    }

    #[test]
    fn frequency_can_change_between_plucks() {
        let mut string = KarplusStrong::new(110.0, 1.0, 44100).with_seed(5);
        string.set_frequency(440.0);
        assert_eq!(string.delay_length(), 100);
        assert_eq!(string.synthesize(0.5).len(), 22050);
    }

    #[test]
    fn lowpass_filter_is_first_order() {
        let out = pick_direction_lowpass(&[1.0, 0.0, 0.0]);
        assert!((out[0] - 0.1).abs() < 1e-12);
        assert!((out[1] - 0.09).abs() < 1e-12);
        assert!((out[2] - 0.081).abs() < 1e-12);
    }

    #[test]
    fn comb_subtracts_delayed_copy() {
        let noise: Vec<f64> = (0..20).map(f64::from).collect();
        // pick = round(2.0) = 2
        let out = pick_position_comb(&noise, 20);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[1], 1.0);
        assert!(out[2..].iter().all(|&v| v == 2.0));
        // tiny periods fall back to pick = N, i.e. no subtraction
        assert_eq!(pick_position_comb(&[1.0, 2.0], 2), vec![1.0, 2.0]);
        // a truncated period keeps the full-period offset: pick = 5
        let out = pick_position_comb(&noise[..8], 50);
        assert_eq!(&out[..5], &noise[..5]);
        assert!(out[5..].iter().all(|&v| v == 5.0));
    }

    #[test]
    fn level_validation() {
        let string = KarplusStrong::new(110.0, 1.0, 44100).with_level(1.5);
        assert!(string.validate().is_err());
        assert_eq!(KarplusStrong::new(110.0, 1.0, 44100).level(), DEFAULT_LEVEL);
    }
}
