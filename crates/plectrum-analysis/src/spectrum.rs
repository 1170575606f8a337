//! One-sided amplitude spectrum of a real signal

use plectrum_core::{Result, validate_sample_rate};

use crate::fft::{fft_any_len, fftfreq, one_sided_len};

/// A spectral peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Bin index.
    pub bin: usize,
    /// Bin frequency in Hz.
    pub frequency: f64,
    /// Amplitude at the bin.
    pub amplitude: f64,
}

/// Non-negative frequency bins of a real signal's FFT.
///
/// `frequencies` ascends from 0 Hz in steps of [`Spectrum::resolution`];
/// both vectors hold `ceil(N/2)` values for an `N`-sample input. No window is
/// applied, so a sine that does not fall exactly on a bin leaks into its
/// neighbours.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Spectrum {
    /// Bin frequencies in Hz.
    pub frequencies: Vec<f64>,
    /// `2/N · |X[k]|` for each bin.
    pub amplitudes: Vec<f64>,
    /// Bin spacing in Hz (`sample_rate / N`).
    pub resolution: f64,
}

impl Spectrum {
    /// Number of bins.
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// True for the spectrum of an empty signal.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// The strongest bin.
    pub fn peak(&self) -> Option<Peak> {
        self.amplitudes
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(bin, _)| self.peak_at(bin))
    }

    /// Up to `count` local maxima, strongest first.
    ///
    /// A local maximum is a bin strictly above its lower neighbour and not
    /// below its upper one, so leakage around a strong partial does not
    /// crowd out weaker partials.
    pub fn peaks(&self, count: usize) -> Vec<Peak> {
        let a = &self.amplitudes;
        let mut maxima: Vec<Peak> = (0..a.len())
            .filter(|&i| {
                let above_lower = i == 0 || a[i] > a[i - 1];
                let above_upper = i + 1 == a.len() || a[i] >= a[i + 1];
                above_lower && above_upper
            })
            .map(|bin| self.peak_at(bin))
            .collect();
        maxima.sort_by(|x, y| y.amplitude.total_cmp(&x.amplitude));
        maxima.truncate(count);
        maxima
    }

    /// Iterate `(frequency, amplitude)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.amplitudes.iter().copied())
    }

    fn peak_at(&self, bin: usize) -> Peak {
        Peak {
            bin,
            frequency: self.frequencies[bin],
            amplitude: self.amplitudes[bin],
        }
    }
}

/// Compute the one-sided amplitude spectrum of `samples` taken at `sample_rate`.
///
/// Power-of-two lengths use the recursive radix-2 FFT; other lengths a
/// planned general-length FFT. An empty input gives an empty spectrum.
///
/// ```rust
/// use plectrum_analysis::spectrum;
///
/// let rate = 1024;
/// let samples: Vec<f64> = (0..1024)
///     .map(|i| 0.5 * (std::f64::consts::TAU * 64.0 * f64::from(i) / f64::from(rate)).sin())
///     .collect();
/// let spec = spectrum(&samples, rate).unwrap();
/// let peak = spec.peak().unwrap();
/// assert_eq!(peak.frequency, 64.0);
/// assert!((peak.amplitude - 0.5).abs() < 1e-9);
/// ```
pub fn spectrum(samples: &[f64], sample_rate: u32) -> Result<Spectrum> {
    let rate = f64::from(validate_sample_rate(sample_rate)?);
    let n = samples.len();
    if n == 0 {
        return Ok(Spectrum::default());
    }

    let coeffs = fft_any_len(samples);
    let keep = one_sided_len(n);
    let scale = 2.0 / n as f64;

    let mut frequencies = fftfreq(n, 1.0 / rate);
    frequencies.truncate(keep);
    let amplitudes = coeffs[..keep].iter().map(|c| scale * c.norm()).collect();

    Ok(Spectrum {
        frequencies,
        amplitudes,
        resolution: rate / n as f64,
    })
}
