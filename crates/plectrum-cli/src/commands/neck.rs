//! Neck command: print note names along the fretboard.

use clap::Args;
use plectrum_synth::neck_table;

#[derive(Args)]
pub struct NeckArgs {
    /// Number of frets to show, open string included
    #[arg(long, default_value = "12")]
    frets: u8,
}

pub fn run(args: NeckArgs) -> anyhow::Result<()> {
    print!("{}", neck_table(args.frets));
    Ok(())
}
