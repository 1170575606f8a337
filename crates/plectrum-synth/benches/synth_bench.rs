//! Criterion benchmarks for plectrum-synth generators
//!
//! Run with: cargo bench -p plectrum-synth

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use plectrum_synth::{
    FrequencyModulation, Guitar, KarplusStrong, PhaseMode, PwmWave, SineWave, SweepFrequency,
    Synthesizer, TriangleWave, standard_chord,
};

const SAMPLE_RATE: u32 = 44100;
const DURATIONS: &[f64] = &[0.1, 1.0];

// ============================================================================
// Periodic waveforms
// ============================================================================

fn bench_waveforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("Waveform");

    let mut generators: Vec<(&str, Box<dyn Synthesizer>)> = vec![
        ("Sine", Box::new(SineWave::new(440.0, 1.0, SAMPLE_RATE))),
        ("Square", Box::new(PwmWave::square(440.0, 1.0, SAMPLE_RATE))),
        ("Triangle", Box::new(TriangleWave::new(440.0, 1.0, 0.5, SAMPLE_RATE))),
        ("Sawtooth", Box::new(TriangleWave::sawtooth(440.0, 1.0, SAMPLE_RATE))),
        ("Sweep", Box::new(SweepFrequency::new(100.0, 2000.0, 1.0, SAMPLE_RATE))),
        (
            "FM",
            Box::new(
                FrequencyModulation::new(440.0, 1.0, 5.0, 20.0, SAMPLE_RATE)
                    .with_phase_mode(PhaseMode::Accumulated),
            ),
        ),
    ];

    for (name, generator) in &mut generators {
        for &duration in DURATIONS {
            group.bench_with_input(
                BenchmarkId::new(*name, duration),
                &duration,
                |b, &d| b.iter(|| black_box(generator.synthesize(d))),
            );
        }
    }

    group.finish();
}

// ============================================================================
// Karplus-Strong
// ============================================================================

fn bench_karplus_strong(c: &mut Criterion) {
    let mut group = c.benchmark_group("KarplusStrong");

    for &frequency in &[82.41, 329.63] {
        let mut string = KarplusStrong::new(frequency, 1.0, SAMPLE_RATE).with_seed(1);
        group.bench_with_input(
            BenchmarkId::new("pluck_1s", frequency),
            &frequency,
            |b, _| b.iter(|| black_box(string.synthesize(1.0))),
        );
    }

    group.finish();
}

fn bench_guitar_chord(c: &mut Criterion) {
    let mut guitar = Guitar::new(SAMPLE_RATE).with_seed(1);
    let chord = standard_chord("Sol").expect("chord book contains Sol");

    c.bench_function("Guitar/chord_2s", |b| {
        b.iter(|| black_box(guitar.chord(&chord, 2.0, 0.04)))
    });
}

criterion_group!(benches, bench_waveforms, bench_karplus_strong, bench_guitar_chord);
criterion_main!(benches);
