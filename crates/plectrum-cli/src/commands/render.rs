//! Render command: synthesize one waveform and post-process the buffer.

use anyhow::Context;
use clap::{Args, ValueEnum};
use plectrum_config::{FmPhase, SynthPreset, WaveformConfig, resolve_preset};
use plectrum_core::{add_noise, decimate, normalize, reverse, smooth_boundaries};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::report::print_summary;

#[derive(Args)]
pub struct RenderArgs {
    /// Waveform shape (ignored with --preset)
    #[arg(short, long, value_enum, default_value = "sine")]
    waveform: Waveform,

    /// Factory preset name, user preset name, or preset file path
    #[arg(short, long)]
    preset: Option<String>,

    /// Frequency in Hz (sweep start frequency)
    #[arg(short, long, default_value = "440.0")]
    freq: f64,

    /// Sweep end frequency in Hz
    #[arg(long, default_value = "880.0")]
    end_freq: f64,

    /// Duty cycle (pwm) or rising rate (triangle), 0-1
    #[arg(long, default_value = "0.5")]
    duty: f64,

    /// Modulator frequency in Hz (am, fm)
    #[arg(long, default_value = "5.0")]
    mod_freq: f64,

    /// Amplitude modulation depth (am) or frequency deviation in Hz (fm)
    #[arg(long, default_value = "0.5")]
    depth: f64,

    /// Use the direct phase formula for fm
    #[arg(long)]
    direct_phase: bool,

    /// Pluck level, 0-1 (pluck)
    #[arg(long, default_value = "0.5")]
    level: f64,

    /// Duration in seconds
    #[arg(short, long, default_value = "1.0")]
    duration: f64,

    /// Sample rate (defaults to the preset's rate, or 44100)
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Peak amplitude
    #[arg(short, long, default_value = "1.0")]
    amplitude: f64,

    /// Reverse the buffer
    #[arg(long)]
    reverse: bool,

    /// Sigmoid fade time in seconds at both ends
    #[arg(long)]
    smooth: Option<f64>,

    /// Add uniform noise of this amplitude
    #[arg(long)]
    noise: Option<f64>,

    /// Seed for the pluck excitation and the added noise
    #[arg(long)]
    seed: Option<u64>,

    /// Rescale the buffer to [-1, 1]
    #[arg(long)]
    normalize: bool,

    /// Keep every n-th sample
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    decimate: u32,
}

#[derive(Clone, Copy, ValueEnum)]
enum Waveform {
    Sine,
    Square,
    Pwm,
    Triangle,
    Sawtooth,
    Pluck,
    Sweep,
    Am,
    Fm,
}

impl RenderArgs {
    fn waveform_config(&self) -> WaveformConfig {
        let frequency = self.freq;
        match self.waveform {
            Waveform::Sine => WaveformConfig::Sine { frequency },
            Waveform::Square => WaveformConfig::Square { frequency },
            Waveform::Pwm => WaveformConfig::Pwm {
                frequency,
                duty_cycle: self.duty,
            },
            Waveform::Triangle => WaveformConfig::Triangle {
                frequency,
                rising_rate: self.duty,
            },
            Waveform::Sawtooth => WaveformConfig::Sawtooth { frequency },
            Waveform::Pluck => WaveformConfig::KarplusStrong {
                frequency,
                level: self.level,
                seed: self.seed,
            },
            Waveform::Sweep => WaveformConfig::Sweep {
                start: frequency,
                end: self.end_freq,
                reverse: false,
            },
            Waveform::Am => WaveformConfig::Am {
                frequency,
                mod_frequency: self.mod_freq,
                mod_depth: self.depth,
            },
            Waveform::Fm => WaveformConfig::Fm {
                frequency,
                mod_frequency: self.mod_freq,
                deviation: self.depth,
                phase: if self.direct_phase {
                    FmPhase::Direct
                } else {
                    FmPhase::Accumulated
                },
            },
        }
    }
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let mut preset = match &args.preset {
        Some(name) => resolve_preset(name)?,
        None => {
            let waveform = args.waveform_config();
            SynthPreset::new(waveform.kind(), waveform).with_amplitude(args.amplitude)
        }
    };
    if let Some(rate) = args.sample_rate {
        preset.sample_rate = rate;
    }

    tracing::info!(
        name = %preset.name,
        kind = preset.waveform.kind(),
        sample_rate = preset.sample_rate,
        duration = args.duration,
        "rendering"
    );

    let mut samples = preset
        .render(args.duration)
        .with_context(|| format!("failed to render '{}'", preset.name))?;
    let rate = preset.sample_rate;

    if args.reverse {
        reverse(&mut samples);
    }
    if let Some(smooth) = args.smooth {
        smooth_boundaries(&mut samples, rate, smooth);
    }
    if let Some(amount) = args.noise {
        let mut rng = match args.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_rng(&mut rand::rng()),
        };
        add_noise(&mut samples, amount, &mut rng);
    }
    if args.normalize {
        normalize(&mut samples);
    }
    let step = args.decimate as usize;
    if step > 1 {
        samples = decimate(&samples, step);
    }

    println!("Rendered {} ({})", preset.name, preset.waveform.kind());
    print_summary(&samples, f64::from(rate) / step as f64);
    Ok(())
}
