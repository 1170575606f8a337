//! Plectrum CLI - render, analyse and inspect synthesized signals.

mod commands;
mod report;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plectrum")]
#[command(author, version, about = "Plectrum synthesis toolkit CLI", long_about = None)]
struct Cli {
    /// Log synthesis decisions (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a waveform or preset and summarize the buffer
    Render(commands::render::RenderArgs),

    /// Print the strongest peaks of a synthesized signal's spectrum
    Spectrum(commands::spectrum::SpectrumArgs),

    /// Print the guitar neck (string x fret note names)
    Neck(commands::neck::NeckArgs),

    /// List the chord book or strum a chord
    Chord(commands::chord::ChordArgs),

    /// List, show and copy synthesizer presets
    Presets(commands::presets::PresetsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Spectrum(args) => commands::spectrum::run(args),
        Commands::Neck(args) => commands::neck::run(args),
        Commands::Chord(args) => commands::chord::run(args),
        Commands::Presets(args) => commands::presets::run(args),
    }
}
