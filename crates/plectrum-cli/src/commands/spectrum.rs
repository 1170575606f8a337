//! Spectrum command: sum sine partials (or render a preset) and list peaks.

use std::str::FromStr;

use anyhow::Context;
use clap::Args;
use plectrum_analysis::spectrum;
use plectrum_config::resolve_preset;
use plectrum_core::{buffer_len, mix};
use plectrum_synth::signal::sine_wave_signal;

#[derive(Args)]
pub struct SpectrumArgs {
    /// Sine partial as FREQ[:AMPLITUDE], repeatable
    #[arg(short, long = "partial", value_name = "FREQ[:AMP]", default_value = "440")]
    partials: Vec<Partial>,

    /// Analyse a preset instead of sine partials
    #[arg(long)]
    preset: Option<String>,

    /// Duration in seconds
    #[arg(short, long, default_value = "1.0")]
    duration: f64,

    /// Sample rate (ignored with --preset)
    #[arg(long, default_value = "44100")]
    sample_rate: u32,

    /// Number of peaks to print
    #[arg(short = 'n', long, default_value = "5")]
    top: usize,
}

/// A sine component of the analysed signal.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Partial {
    frequency: f64,
    amplitude: f64,
}

impl FromStr for Partial {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (freq, amp) = s.split_once(':').unwrap_or((s, "1.0"));
        let frequency = freq
            .trim()
            .parse()
            .map_err(|_| format!("invalid frequency '{}'", freq))?;
        let amplitude = amp
            .trim()
            .parse()
            .map_err(|_| format!("invalid amplitude '{}'", amp))?;
        Ok(Self {
            frequency,
            amplitude,
        })
    }
}

pub fn run(args: SpectrumArgs) -> anyhow::Result<()> {
    let (samples, rate) = match &args.preset {
        Some(name) => {
            let preset = resolve_preset(name)?;
            let samples = preset
                .render(args.duration)
                .with_context(|| format!("failed to render '{}'", preset.name))?;
            (samples, preset.sample_rate)
        }
        None => {
            let rate = args.sample_rate;
            let len = buffer_len(args.duration, rate);
            let parts: Vec<(usize, Vec<f64>)> = args
                .partials
                .iter()
                .map(|p| {
                    (
                        0,
                        sine_wave_signal(p.frequency, p.amplitude, args.duration, Some(rate)),
                    )
                })
                .collect();
            (mix(len, &parts), rate)
        }
    };

    let spec = spectrum(&samples, rate)?;
    tracing::info!(
        samples = samples.len(),
        bins = spec.len(),
        resolution = spec.resolution,
        "spectrum computed"
    );

    println!(
        "Spectrum: {} samples at {} Hz ({:.3} Hz/bin)",
        samples.len(),
        rate,
        spec.resolution
    );
    println!("  {:>4}  {:>12}  {:>10}", "#", "Freq (Hz)", "Amplitude");
    for (rank, peak) in spec.peaks(args.top).iter().enumerate() {
        println!(
            "  {:>4}  {:>12.2}  {:>10.4}",
            rank + 1,
            peak.frequency,
            peak.amplitude
        );
    }
    Ok(())
}
