//! Sample buffer transforms.
//!
//! Pure functions over `[f64]` sample buffers. Functions taking `&mut [f64]`
//! work in place; the others allocate a new buffer. None of them clip: values
//! beyond ±1 are left for the playback sink to deal with.
//!
//! # Boundary smoothing
//!
//! [`smooth_boundaries`] multiplies the buffer by a rising logistic window at
//! the start and a falling one at the end. Each window is parametrized by its
//! 10%-to-90% transition time `τ`:
//!
//! ```text
//! λ = 2·ln(9) / τ
//! sigmoid(t) = 1 / (1 + exp(-λ·(t - origin)))
//! ```
//!
//! A negative `τ` flips the window so that it falls instead of rising.
//!
//! # Example
//!
//! ```rust
//! use plectrum_core::buffer::{min_max, normalize};
//!
//! let mut samples = vec![0.5, 2.5, 1.5];
//! normalize(&mut samples);
//! let stats = min_max(&samples);
//! assert!((stats.min + 1.0).abs() < 1e-12);
//! assert!((stats.max - 1.0).abs() < 1e-12);
//! ```

use rand::Rng;

use crate::sample_rate::buffer_len;

/// Single-pass summary of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BufferStats {
    /// Smallest sample value.
    pub min: f64,
    /// Largest sample value.
    pub max: f64,
    /// Arithmetic mean of all samples.
    pub mean: f64,
}

/// Coefficients of the affine map `v' = scale * v + offset` applied by [`rescale`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RescaleCoefficients {
    /// Multiplicative coefficient `a`.
    pub scale: f64,
    /// Additive coefficient `b`.
    pub offset: f64,
}

impl RescaleCoefficients {
    /// Apply the affine map to one value.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        self.scale * value + self.offset
    }
}

/// Add uniform noise in `[-amplitude, amplitude)` to every sample, in place.
pub fn add_noise<R: Rng + ?Sized>(samples: &mut [f64], amplitude: f64, rng: &mut R) {
    for sample in samples.iter_mut() {
        *sample += amplitude * (rng.random::<f64>() * 2.0 - 1.0);
    }
}

/// Reverse the buffer in place.
pub fn reverse(samples: &mut [f64]) {
    samples.reverse();
}

/// Reversed copy of the buffer.
pub fn reversed(samples: &[f64]) -> Vec<f64> {
    samples.iter().rev().copied().collect()
}

/// Keep every `step`-th sample, starting with the first.
///
/// The output holds `floor(len / step)` samples and represents the signal at
/// `sample_rate / step`; the caller tracks the derived rate. A `step` of 0 is
/// treated as 1.
pub fn decimate(samples: &[f64], step: usize) -> Vec<f64> {
    let step = step.max(1);
    samples
        .iter()
        .step_by(step)
        .take(samples.len() / step)
        .copied()
        .collect()
}

/// Minimum, maximum, and mean in a single pass.
///
/// An empty buffer yields all-zero statistics.
pub fn min_max(samples: &[f64]) -> BufferStats {
    if samples.is_empty() {
        return BufferStats::default();
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &v in samples {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }
    BufferStats {
        min,
        max,
        mean: sum / samples.len() as f64,
    }
}

/// Affinely map `[in_min, in_max]` onto `[out_min, out_max]`, in place.
///
/// ```text
/// a = (out_max - out_min) / (in_max - in_min)
/// b = (in_max * out_min - in_min * out_max) / (in_max - in_min)
/// ```
///
/// A flat input range (`in_max == in_min`) maps every sample to the middle
/// of the output range.
pub fn rescale(
    samples: &mut [f64],
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
) -> RescaleCoefficients {
    let span = in_max - in_min;
    let coeffs = if span == 0.0 {
        tracing::warn!(in_min, "rescale: flat input range, mapping to output midpoint");
        RescaleCoefficients {
            scale: 0.0,
            offset: 0.5 * (out_min + out_max),
        }
    } else {
        RescaleCoefficients {
            scale: (out_max - out_min) / span,
            offset: (in_max * out_min - in_min * out_max) / span,
        }
    };
    for sample in samples.iter_mut() {
        *sample = coeffs.apply(*sample);
    }
    coeffs
}

/// Rescale the buffer from its own range onto `[-1, 1]`, in place.
pub fn normalize(samples: &mut [f64]) -> RescaleCoefficients {
    let stats = min_max(samples);
    rescale(samples, stats.min, stats.max, -1.0, 1.0)
}

/// Multiply every sample by `gain`, in place.
pub fn apply_gain(samples: &mut [f64], gain: f64) {
    for sample in samples.iter_mut() {
        *sample *= gain;
    }
}

/// Logistic window whose 10%-to-90% transition lasts `rising_time` seconds.
///
/// Centered on `origin`; a negative `rising_time` gives a falling window.
#[inline]
pub fn sigmoid(t: f64, origin: f64, rising_time: f64) -> f64 {
    let lambda = 9f64.ln() * 2.0 / rising_time;
    1.0 / (1.0 + (-lambda * (t - origin)).exp())
}

/// Fade the buffer in and out with sigmoid windows, in place.
///
/// The fade-in window is centered at `smooth_time`, the fade-out window at
/// `duration - smooth_time`, both with a 10%-to-90% transition of
/// `smooth_time` seconds. Removes clicks at the buffer boundaries before
/// playback. A non-positive `smooth_time` leaves the buffer untouched.
pub fn smooth_boundaries(samples: &mut [f64], sample_rate: u32, smooth_time: f64) {
    if smooth_time <= 0.0 || samples.is_empty() {
        return;
    }
    let rate = f64::from(sample_rate);
    let duration = samples.len() as f64 / rate;
    let fade_out_origin = duration - smooth_time;
    for (i, sample) in samples.iter_mut().enumerate() {
        let t = i as f64 / rate;
        let window =
            sigmoid(t, smooth_time, smooth_time) * sigmoid(t, fade_out_origin, -smooth_time);
        *sample *= window;
    }
}

/// Buffer of `floor(duration * sample_rate)` zeros.
pub fn silence(duration: f64, sample_rate: u32) -> Vec<f64> {
    vec![0.0; buffer_len(duration, sample_rate)]
}

/// Play buffers one after another.
pub fn concat<B: AsRef<[f64]>>(buffers: &[B]) -> Vec<f64> {
    let total = buffers.iter().map(|b| b.as_ref().len()).sum();
    let mut out = Vec::with_capacity(total);
    for buffer in buffers {
        out.extend_from_slice(buffer.as_ref());
    }
    out
}

/// Sum buffers into a new buffer of `len` samples.
///
/// Each part is added starting at its sample offset; anything extending past
/// `len` is dropped.
pub fn mix<B: AsRef<[f64]>>(len: usize, parts: &[(usize, B)]) -> Vec<f64> {
    let mut out = vec![0.0; len];
    for (offset, part) in parts {
        if *offset >= len {
            continue;
        }
        for (dst, &src) in out[*offset..].iter_mut().zip(part.as_ref()) {
            *dst += src;
        }
    }
    out
}
