//! Preset commands: list, show and copy synthesizer presets.

use clap::{Args, Subcommand};
use plectrum_config::{
    SynthPreset, ensure_user_presets_dir, factory_presets, get_factory_preset, list_user_presets,
    preset_name_from_path, resolve_preset, user_presets_dir,
};

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List available presets (factory and user)
    List {
        /// Show only factory presets
        #[arg(long)]
        factory: bool,

        /// Show only user presets
        #[arg(long)]
        user: bool,
    },

    /// Show a preset as TOML
    Show {
        /// Preset name or path
        name: String,
    },

    /// Copy a factory preset to user presets for customization
    Copy {
        /// Factory preset name
        source: String,

        /// New preset name (uses the source name if not given)
        #[arg(short, long)]
        name: Option<String>,

        /// Overwrite an existing user preset
        #[arg(long)]
        force: bool,
    },

    /// Show the user preset directory
    Paths,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List { factory, user } => {
            let show_factory = factory || !user;
            let show_user = user || !factory;

            if show_factory {
                println!("Factory presets:");
                for preset in factory_presets() {
                    print_entry(&preset);
                }
            }

            if show_user {
                if show_factory {
                    println!();
                }
                println!("User presets:");
                let paths = list_user_presets();
                if paths.is_empty() {
                    println!("  (none in {})", user_presets_dir().display());
                }
                for path in paths {
                    match SynthPreset::load(&path) {
                        Ok(preset) => print_entry(&preset),
                        Err(e) => {
                            let name = preset_name_from_path(&path).unwrap_or_default();
                            tracing::warn!(path = %path.display(), error = %e, "skipping preset");
                            println!("  {:<16} (unreadable)", name);
                        }
                    }
                }
            }
        }

        PresetsCommand::Show { name } => {
            let preset = resolve_preset(&name)?;
            print!("{}", preset.to_toml()?);
        }

        PresetsCommand::Copy {
            source,
            name,
            force,
        } => {
            let Some(mut preset) = get_factory_preset(&source) else {
                anyhow::bail!("unknown factory preset: {}", source);
            };
            let file_stem = name
                .clone()
                .unwrap_or_else(|| source.to_lowercase().replace(' ', "_"));
            if let Some(name) = name {
                preset.name = name;
            }

            let path = ensure_user_presets_dir()?.join(format!("{}.toml", file_stem));
            if path.exists() && !force {
                anyhow::bail!(
                    "preset already exists: {} (use --force to overwrite)",
                    path.display()
                );
            }
            preset.save(&path)?;
            println!("Copied '{}' to {}", source, path.display());
        }

        PresetsCommand::Paths => {
            println!("User presets: {}", user_presets_dir().display());
        }
    }

    Ok(())
}

fn print_entry(preset: &SynthPreset) {
    println!(
        "  {:<16} {:<15} {}",
        preset.name,
        preset.waveform.kind(),
        preset.description.as_deref().unwrap_or("")
    );
}
