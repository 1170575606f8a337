//! Integration tests for plectrum-analysis
//!
//! Spectra of signals rendered by plectrum-synth.

use plectrum_analysis::{fft, fft_any_len, fftfreq, spectrum};
use plectrum_core::decimate;
use plectrum_synth::signal::{sine_wave_signal, square_wave_signal};
use plectrum_synth::{FretNote, Guitar, GuitarString};

#[test]
fn sine_peak_within_one_hertz() {
    // 88200 samples, not a power of two
    let samples = sine_wave_signal(100.0, 1.0, 2.0, Some(44100));
    let spec = spectrum(&samples, 44100).unwrap();
    assert_eq!(spec.len(), 44100);
    let peak = spec.peak().unwrap();
    assert!(
        (peak.frequency - 100.0).abs() <= 1.0,
        "peak at {} Hz",
        peak.frequency
    );
    assert!((peak.amplitude - 1.0).abs() < 1e-3, "amplitude {}", peak.amplitude);
}

#[test]
fn power_of_two_and_planned_paths_agree() {
    let samples = sine_wave_signal(440.0, 0.7, 4096.0 / 44100.0, Some(44100));
    assert_eq!(samples.len(), 4096);
    let radix2 = fft(&samples).unwrap();
    let planned = fft_any_len(&samples);
    for (a, b) in radix2.iter().zip(&planned) {
        assert!((a - b).norm() < 1e-8);
    }
}

#[test]
fn fftfreq_matches_reference_bins() {
    assert_eq!(
        fftfreq(10, 1.0 / 100.0),
        vec![0.0, 10.0, 20.0, 30.0, 40.0, -50.0, -40.0, -30.0, -20.0, -10.0]
    );
}

#[test]
fn square_wave_has_odd_harmonics() {
    // 32 samples per period, 256 periods
    let samples = square_wave_signal(250.0, 1.0, 8192.0 / 8000.0, Some(8000));
    let spec = spectrum(&samples, 8000).unwrap();
    let peaks = spec.peaks(3);
    let freqs: Vec<f64> = peaks.iter().map(|p| p.frequency.round()).collect();
    assert_eq!(freqs, vec![250.0, 750.0, 1250.0]);
    // 4/π fundamental, 1/3 and 1/5 for the next harmonics
    let ratio = peaks[1].amplitude / peaks[0].amplitude;
    assert!((ratio - 1.0 / 3.0).abs() < 0.02, "ratio {ratio}");
}

#[test]
fn decimated_signal_keeps_its_peak() {
    let samples = sine_wave_signal(300.0, 1.0, 2.0, Some(48000));
    let low = decimate(&samples, 4);
    let spec = spectrum(&low, 12000).unwrap();
    let peak = spec.peak().unwrap();
    assert!((peak.frequency - 300.0).abs() <= 1.0);
}

#[test]
fn plucked_string_is_harmonic() {
    let mut guitar = Guitar::new(44100).with_seed(13);
    let note = FretNote::new(GuitarString::La1, 0);
    let samples = guitar.pluck(note, 1.0);
    let spec = spectrum(&samples, 44100).unwrap();
    let peak = spec.peak().unwrap();
    // the loop delay is 401 samples plus a fraction from the damping and allpass filters
    let harmonic = (peak.frequency / 110.0).round();
    assert!((1.0..=10.0).contains(&harmonic), "peak at {} Hz", peak.frequency);
    let fundamental = peak.frequency / harmonic;
    assert!(
        (108.5..=110.5).contains(&fundamental),
        "peak at {} Hz is not a harmonic of ~110 Hz",
        peak.frequency
    );
}
