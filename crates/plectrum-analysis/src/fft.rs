//! Fast Fourier transforms and bin frequencies
//!
//! [`fft`] is a recursive radix-2 decimation-in-time transform. It requires a
//! power-of-two length and reports [`Error::NonPowerOfTwoLength`] otherwise.
//! [`fft_any_len`] accepts any length, taking the radix-2 path when it can and
//! a planned `rustfft` transform when it cannot.

use core::f64::consts::TAU;

use rustfft::FftPlanner;
use rustfft::num_complex::Complex64;

use plectrum_core::{Error, Result};

/// Forward FFT of a real signal whose length is a power of two.
///
/// ```rust
/// use plectrum_analysis::fft;
///
/// let coeffs = fft(&[1.0, 0.0, 0.0, 0.0]).unwrap();
/// assert!(coeffs.iter().all(|c| (c.re - 1.0).abs() < 1e-12 && c.im.abs() < 1e-12));
/// assert!(fft(&[1.0, 2.0, 3.0]).is_err());
/// ```
pub fn fft(samples: &[f64]) -> Result<Vec<Complex64>> {
    if !samples.len().is_power_of_two() {
        return Err(Error::NonPowerOfTwoLength(samples.len()));
    }
    let input: Vec<Complex64> = samples.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    Ok(radix2(&input))
}

/// Forward FFT of a real signal of any length.
pub fn fft_any_len(samples: &[f64]) -> Vec<Complex64> {
    let n = samples.len();
    if n.is_power_of_two() {
        tracing::debug!(n, "fft: radix-2");
        let input: Vec<Complex64> = samples.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        return radix2(&input);
    }

    tracing::debug!(n, "fft: planned, length is not a power of two");
    let mut buffer: Vec<Complex64> = samples.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    if n > 0 {
        let mut planner = FftPlanner::<f64>::new();
        planner.plan_fft_forward(n).process(&mut buffer);
    }
    buffer
}

fn radix2(input: &[Complex64]) -> Vec<Complex64> {
    let n = input.len();
    if n <= 1 {
        return input.to_vec();
    }

    let even: Vec<Complex64> = input.iter().step_by(2).copied().collect();
    let odd: Vec<Complex64> = input.iter().skip(1).step_by(2).copied().collect();
    let even = radix2(&even);
    let odd = radix2(&odd);

    let half = n / 2;
    let mut out = vec![Complex64::new(0.0, 0.0); n];
    for k in 0..half {
        let twiddle = Complex64::from_polar(1.0, -TAU * k as f64 / n as f64) * odd[k];
        out[k] = even[k] + twiddle;
        out[k + half] = even[k] - twiddle;
    }
    out
}

/// Number of non-negative frequency bins for an `n`-point transform.
///
/// `n/2` for even `n`, `(n+1)/2` for odd `n`.
#[inline]
pub fn one_sided_len(n: usize) -> usize {
    n.div_ceil(2)
}

/// Sample frequencies of the bins of an `n`-point transform with sample spacing `d`.
///
/// Bins `0..=limit` are non-negative (`i / (n·d)`), the rest negative
/// (`-(n - i) / (n·d)`), with `limit = n/2 - 1` for even `n` and
/// `(n - 1)/2` for odd `n`.
///
/// ```rust
/// use plectrum_analysis::fftfreq;
///
/// let bins = fftfreq(10, 1.0 / 100.0);
/// assert_eq!(bins, vec![0.0, 10.0, 20.0, 30.0, 40.0, -50.0, -40.0, -30.0, -20.0, -10.0]);
/// ```
pub fn fftfreq(n: usize, d: f64) -> Vec<f64> {
    let scale = 1.0 / (n as f64 * d);
    let positive = one_sided_len(n);
    (0..n)
        .map(|i| {
            if i < positive {
                i as f64 * scale
            } else {
                -((n - i) as f64) * scale
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_dft(samples: &[f64]) -> Vec<Complex64> {
        let n = samples.len();
        (0..n)
            .map(|k| {
                samples
                    .iter()
                    .enumerate()
                    .map(|(t, &x)| Complex64::from_polar(x, -TAU * (k * t) as f64 / n as f64))
                    .sum()
            })
            .collect()
    }

    fn test_signal(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (i as f64 * 0.37).sin() + 0.5 * (i as f64 * 1.9).cos())
            .collect()
    }

    #[test]
    fn fftfreq_even() {
        assert_eq!(
            fftfreq(10, 0.01),
            vec![0.0, 10.0, 20.0, 30.0, 40.0, -50.0, -40.0, -30.0, -20.0, -10.0]
        );
    }

    #[test]
    fn fftfreq_odd() {
        let bins = fftfreq(5, 0.1);
        let expected = [0.0, 2.0, 4.0, -4.0, -2.0];
        for (got, want) in bins.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "{got} vs {want}");
        }
    }

    #[test]
    fn one_sided_lengths() {
        assert_eq!(one_sided_len(0), 0);
        assert_eq!(one_sided_len(1), 1);
        assert_eq!(one_sided_len(10), 5);
        assert_eq!(one_sided_len(11), 6);
    }

    #[test]
    fn radix2_matches_naive_dft() {
        let samples = test_signal(64);
        let fast = fft(&samples).unwrap();
        let slow = naive_dft(&samples);
        for (a, b) in fast.iter().zip(&slow) {
            assert!((a - b).norm() < 1e-9, "{a} vs {b}");
        }
    }

    #[test]
    fn planned_path_matches_naive_dft() {
        let samples = test_signal(45);
        let fast = fft_any_len(&samples);
        let slow = naive_dft(&samples);
        for (a, b) in fast.iter().zip(&slow) {
            assert!((a - b).norm() < 1e-9, "{a} vs {b}");
        }
    }

    #[test]
    fn rejects_non_power_of_two() {
        assert_eq!(fft(&[0.0; 12]), Err(Error::NonPowerOfTwoLength(12)));
        assert_eq!(fft(&[]), Err(Error::NonPowerOfTwoLength(0)));
        assert_eq!(fft(&[3.0]).unwrap(), vec![Complex64::new(3.0, 0.0)]);
    }

    #[test]
    fn any_len_handles_empty() {
        assert!(fft_any_len(&[]).is_empty());
    }
}
