//! Integration tests for plectrum-synth
//!
//! Exercise generators, the guitar, and buffer transforms together through
//! the public API.

use plectrum_core::{Note, decimate, min_max, normalize, smooth_boundaries};
use plectrum_synth::signal::{karplus_strong_signal, sine_wave_signal};
use plectrum_synth::{
    AmplitudeModulation, FretNote, FrequencyModulation, Guitar, GuitarString,
    HarmonicSynthesizer, KarplusStrong, PhaseMode, PwmWave, STANDARD_CHORD_NAMES, SineWave,
    SweepFrequency, Synthesizer, TriangleWave, standard_chord,
};

fn all_generators(rate: u32) -> Vec<Box<dyn Synthesizer>> {
    vec![
        Box::new(SineWave::new(440.0, 1.0, rate)),
        Box::new(PwmWave::square(440.0, 1.0, rate)),
        Box::new(PwmWave::new(440.0, 1.0, 0.2, rate)),
        Box::new(TriangleWave::new(440.0, 1.0, 0.5, rate)),
        Box::new(TriangleWave::sawtooth(440.0, 1.0, rate)),
        Box::new(KarplusStrong::new(440.0, 1.0, rate).with_seed(11)),
        Box::new(SweepFrequency::new(100.0, 1000.0, 1.0, rate)),
        Box::new(AmplitudeModulation::new(440.0, 0.5, 3.0, 0.5, rate)),
        Box::new(FrequencyModulation::new(440.0, 1.0, 3.0, 30.0, rate)),
        Box::new(
            FrequencyModulation::new(440.0, 1.0, 3.0, 30.0, rate).with_phase_mode(PhaseMode::Direct),
        ),
    ]
}

#[test]
fn every_generator_sizes_its_buffer_exactly() {
    for rate in [8000, 22050, 44100, 48000] {
        for mut generator in all_generators(rate) {
            for duration in [0.0, 0.013, 0.5, 1.25] {
                let expected = (duration * f64::from(rate)).floor() as usize;
                assert_eq!(generator.synthesize(duration).len(), expected);
            }
        }
    }
}

#[test]
fn every_generator_validates_and_synthesizes() {
    for mut generator in all_generators(44100) {
        let samples = generator.try_synthesize(0.1).unwrap();
        assert_eq!(samples.len(), 4410);
        assert!(samples.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn sine_starts_at_zero_and_respects_amplitude() {
    for amplitude in [0.1, 1.0, 3.0] {
        let samples = SineWave::new(261.63, amplitude, 44100).synthesize(1.0);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|v| v.abs() <= amplitude));
    }
}

#[test]
fn decimate_matches_sine_at_lower_rate() {
    let (f, a, d, r, step) = (120.0, 1.0, 4.0, 44100_u32, 10_usize);
    let decimated = decimate(&sine_wave_signal(f, a, d, Some(r)), step);
    let expected = sine_wave_signal(f, a, d, Some(r / step as u32));
    assert_eq!(decimated.len(), expected.len());
    for (x, y) in decimated.iter().zip(&expected) {
        assert!((x - y).abs() < 1e-6);
    }
}

#[test]
fn karplus_strong_stays_bounded_for_ten_seconds() {
    for frequency in [82.41, 196.0, 659.26, 2000.0] {
        let mut string = KarplusStrong::new(frequency, 1.0, 44100).with_seed(21);
        let samples = string.synthesize(10.0);
        assert_eq!(samples.len(), 441_000);

        let stats = min_max(&samples);
        assert!(stats.max.is_finite() && stats.min.is_finite());
        assert!(
            stats.max.abs() <= 2.0 && stats.min.abs() <= 2.0,
            "{frequency} Hz grew to [{}, {}]",
            stats.min,
            stats.max
        );

        let head = samples[..44100].iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        let tail = samples[samples.len() - 44100..]
            .iter()
            .fold(0.0_f64, |m, v| m.max(v.abs()));
        assert!(tail < head, "{frequency} Hz: tail {tail} >= head {head}");
    }
}

#[test]
fn karplus_helper_uses_default_rate() {
    assert_eq!(karplus_strong_signal(110.0, 1.0, 0.5, None).len(), 22050);
}

#[test]
fn harmonic_setters_retune_a_reused_instance() {
    let mut string = KarplusStrong::new(0.0, 1.0, 44100).with_seed(3);
    for fret in 0..5 {
        let note = FretNote::new(GuitarString::La1, fret);
        string.set_frequency(note.frequency());
        assert_eq!(string.frequency(), note.frequency());
        assert_eq!(string.synthesize(0.2).len(), 8820);
    }
}

#[test]
fn guitar_frequencies_follow_note_model() {
    for string in GuitarString::ALL {
        for fret in 0..=12u8 {
            let position = FretNote::new(string, fret);
            let note = string
                .open_note()
                .derived(plectrum_core::Interval(i32::from(fret)));
            assert_eq!(position.frequency(), note.frequency());
        }
    }
    let high_e = Note::from_label(3, "Mi").unwrap();
    assert_eq!(
        FretNote::new(GuitarString::Mi3, 0).frequency(),
        high_e.frequency()
    );
}

#[test]
fn strummed_chords_have_exact_length() {
    let mut guitar = Guitar::new(22050).with_seed(8);
    for name in STANDARD_CHORD_NAMES {
        let chord = standard_chord(name).unwrap();
        let down = guitar.chord(&chord, 1.5, 0.03);
        let up = guitar.chord(&chord.reversed(), 1.5, 0.03);
        assert_eq!(down.len(), 33075, "{name}");
        assert_eq!(up.len(), 33075, "{name}");
        assert!(down.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn smoothing_then_normalizing_a_pluck() {
    let mut guitar = Guitar::new(44100).with_seed(5);
    let mut samples = guitar.pluck(FretNote::new(GuitarString::Re2, 0), 1.0);
    smooth_boundaries(&mut samples, 44100, 0.01);
    normalize(&mut samples);
    let stats = min_max(&samples);
    assert!((stats.min + 1.0).abs() < 1e-3);
    assert!((stats.max - 1.0).abs() < 1e-3);
}
