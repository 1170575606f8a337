//! Chord commands: list the chord book and strum chords.

use clap::{Args, Subcommand};
use plectrum_core::{DEFAULT_SAMPLE_RATE, smooth_boundaries, validate_sample_rate};
use plectrum_synth::{DEFAULT_LEVEL, Guitar, STANDARD_CHORD_NAMES, standard_chord};

use crate::report::print_summary;

#[derive(Args)]
pub struct ChordArgs {
    #[command(subcommand)]
    command: ChordCommand,
}

#[derive(Subcommand)]
enum ChordCommand {
    /// List the standard chords and their notes
    List,

    /// Strum a chord on the plucked-string guitar
    Strum {
        /// Chord name (Do, Re, Mi, Mim, Fa, Sol, La, Lam)
        name: String,

        /// Total duration in seconds
        #[arg(short, long, default_value = "2.0")]
        duration: f64,

        /// Delay between successive strings in seconds
        #[arg(long, default_value = "0.05")]
        delay: f64,

        /// Strum upwards (highest string first)
        #[arg(long)]
        up: bool,

        /// Peak amplitude of each string
        #[arg(short, long, default_value = "0.3")]
        amplitude: f64,

        /// Pluck level, 0-1
        #[arg(long, default_value_t = DEFAULT_LEVEL)]
        level: f64,

        /// Sample rate
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,

        /// Seed for the pluck excitation
        #[arg(long)]
        seed: Option<u64>,

        /// Sigmoid fade time in seconds at both ends
        #[arg(long)]
        smooth: Option<f64>,
    },
}

pub fn run(args: ChordArgs) -> anyhow::Result<()> {
    match args.command {
        ChordCommand::List => {
            println!("Chord book:");
            for name in STANDARD_CHORD_NAMES {
                let chord = standard_chord(name)?;
                println!("  {:<4} {}", name, chord.names().join(" "));
            }
        }

        ChordCommand::Strum {
            name,
            duration,
            delay,
            up,
            amplitude,
            level,
            sample_rate,
            seed,
            smooth,
        } => {
            let mut chord = standard_chord(&name)?;
            if up {
                chord = chord.reversed();
            }
            let sample_rate = validate_sample_rate(sample_rate)?;

            let mut guitar = Guitar::new(sample_rate).with_level(level);
            if let Some(seed) = seed {
                guitar = guitar.with_seed(seed);
            }
            guitar.set_amplitude(amplitude);

            tracing::info!(chord = %name, notes = chord.len(), duration, delay, "strumming");
            let mut samples = guitar.chord(&chord, duration, delay);
            if let Some(smooth) = smooth {
                smooth_boundaries(&mut samples, sample_rate, smooth);
            }

            println!("Strummed {} ({})", name, chord.names().join(" "));
            print_summary(&samples, f64::from(sample_rate));
        }
    }

    Ok(())
}
