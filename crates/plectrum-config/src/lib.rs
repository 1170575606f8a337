//! Synthesizer presets for plectrum.
//!
//! # Features
//!
//! - **Presets**: [`SynthPreset`] loads and saves TOML files describing one generator
//! - **Validation**: all parameter problems of a preset reported together
//! - **Factory Presets**: one built-in preset per waveform kind
//! - **Paths**: platform-specific user preset directory
//!
//! # Example
//!
//! ```rust,no_run
//! use plectrum_config::{SynthPreset, WaveformConfig, user_presets_dir};
//!
//! let preset = SynthPreset::new("Pluck", WaveformConfig::KarplusStrong {
//!     frequency: 196.0,
//!     level: 0.4,
//!     seed: None,
//! })
//! .with_description("Sol2 string");
//!
//! let samples = preset.render(2.0).unwrap();
//! assert_eq!(samples.len(), 88200);
//!
//! preset.save(user_presets_dir().join("pluck.toml")).unwrap();
//! ```

mod error;
mod preset;

/// Platform-specific paths for presets.
pub mod paths;

/// Preset validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::{ConfigError, IoAction};
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_presets, get_factory_preset, is_factory_preset,
};
pub use paths::{
    ensure_user_presets_dir, find_preset, list_user_presets, preset_name_from_path,
    resolve_preset, user_presets_dir,
};
pub use plectrum_core::{DEFAULT_SAMPLE_RATE, resolve_sample_rate};
pub use preset::{FmPhase, SynthPreset, WaveformConfig};
pub use validation::{ValidationError, ValidationResult, validate_preset, validate_waveform};
