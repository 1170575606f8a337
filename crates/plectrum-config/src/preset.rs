//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use plectrum_core::{DEFAULT_SAMPLE_RATE, reverse};
use plectrum_synth::{
    AmplitudeModulation, DEFAULT_LEVEL, FrequencyModulation, KarplusStrong, PhaseMode, PwmWave,
    SineWave, SweepFrequency, Synthesizer, TriangleWave,
};

use crate::error::{ConfigError, IoAction};
use crate::validation::{ValidationResult, validate_preset};

/// Phase computation for the `fm` waveform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FmPhase {
    /// Accumulated phase (smooth vibrato).
    #[default]
    Accumulated,
    /// Direct phase (laser chirp).
    Direct,
}

impl From<FmPhase> for PhaseMode {
    fn from(phase: FmPhase) -> Self {
        match phase {
            FmPhase::Accumulated => PhaseMode::Accumulated,
            FmPhase::Direct => PhaseMode::Direct,
        }
    }
}

/// Waveform shape and its parameters, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WaveformConfig {
    /// Sine wave.
    Sine {
        /// Frequency in Hz.
        frequency: f64,
    },
    /// Square wave (50% duty cycle).
    Square {
        /// Frequency in Hz.
        frequency: f64,
    },
    /// Pulse-width modulated square.
    Pwm {
        /// Frequency in Hz.
        frequency: f64,
        /// Fraction of each period spent high, in `[0, 1]`.
        duty_cycle: f64,
    },
    /// Triangle wave.
    Triangle {
        /// Frequency in Hz.
        frequency: f64,
        /// Fraction of each period spent rising, in `[0, 1]`.
        #[serde(default = "default_rising_rate")]
        rising_rate: f64,
    },
    /// Sawtooth wave.
    Sawtooth {
        /// Frequency in Hz.
        frequency: f64,
    },
    /// Karplus-Strong plucked string.
    KarplusStrong {
        /// Frequency in Hz.
        frequency: f64,
        /// Dynamic level in `[0, 1]`.
        #[serde(default = "default_level")]
        level: f64,
        /// Fixed noise seed for reproducible plucks.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
    /// Linear frequency sweep.
    Sweep {
        /// Starting frequency in Hz.
        start: f64,
        /// Final frequency in Hz.
        end: f64,
        /// Play the rendered buffer backwards.
        #[serde(default)]
        reverse: bool,
    },
    /// Amplitude modulated sine.
    Am {
        /// Carrier frequency in Hz.
        frequency: f64,
        /// Envelope frequency in Hz.
        mod_frequency: f64,
        /// Envelope swing around the base amplitude.
        mod_depth: f64,
    },
    /// Frequency modulated sine.
    Fm {
        /// Carrier frequency in Hz.
        frequency: f64,
        /// Modulator frequency in Hz.
        mod_frequency: f64,
        /// Peak deviation in Hz.
        deviation: f64,
        /// Phase computation.
        #[serde(default)]
        phase: FmPhase,
    },
}

fn default_rising_rate() -> f64 {
    0.5
}

fn default_level() -> f64 {
    DEFAULT_LEVEL
}

impl WaveformConfig {
    /// The `kind` tag as written in TOML.
    pub fn kind(&self) -> &'static str {
        match self {
            WaveformConfig::Sine { .. } => "sine",
            WaveformConfig::Square { .. } => "square",
            WaveformConfig::Pwm { .. } => "pwm",
            WaveformConfig::Triangle { .. } => "triangle",
            WaveformConfig::Sawtooth { .. } => "sawtooth",
            WaveformConfig::KarplusStrong { .. } => "karplus_strong",
            WaveformConfig::Sweep { .. } => "sweep",
            WaveformConfig::Am { .. } => "am",
            WaveformConfig::Fm { .. } => "fm",
        }
    }

    /// The fundamental frequency, if the shape has a single one.
    pub fn frequency(&self) -> Option<f64> {
        match *self {
            WaveformConfig::Sine { frequency }
            | WaveformConfig::Square { frequency }
            | WaveformConfig::Pwm { frequency, .. }
            | WaveformConfig::Triangle { frequency, .. }
            | WaveformConfig::Sawtooth { frequency }
            | WaveformConfig::KarplusStrong { frequency, .. }
            | WaveformConfig::Am { frequency, .. }
            | WaveformConfig::Fm { frequency, .. } => Some(frequency),
            WaveformConfig::Sweep { .. } => None,
        }
    }
}

/// A synthesizer preset.
///
/// # TOML Format
///
/// ```toml
/// name = "Nylon Pluck"
/// description = "Soft plucked string"
/// sample_rate = 44100
/// amplitude = 0.8
///
/// [waveform]
/// kind = "karplus_strong"
/// frequency = 196.0
/// level = 0.3
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SynthPreset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate of the rendered buffer (defaults to 44100).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Peak amplitude (defaults to 1.0).
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,

    /// Waveform shape and its parameters.
    pub waveform: WaveformConfig,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_amplitude() -> f64 {
    1.0
}

impl SynthPreset {
    /// Create a preset with default sample rate and amplitude.
    pub fn new(name: impl Into<String>, waveform: WaveformConfig) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: DEFAULT_SAMPLE_RATE,
            amplitude: 1.0,
            waveform,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the peak amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::io(IoAction::Read, path, e))?;
        let preset = Self::from_toml(&content)?;
        tracing::debug!(name = %preset.name, path = %path.display(), "loaded preset");
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::io(IoAction::CreateDir, parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::io(IoAction::Write, path, e))?;
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every parameter, collecting all failures.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_preset(self)
    }

    /// Instantiate the generator described by this preset.
    ///
    /// Does not validate; see [`SynthPreset::render`].
    pub fn build(&self) -> Box<dyn Synthesizer> {
        let (a, r) = (self.amplitude, self.sample_rate);
        match self.waveform {
            WaveformConfig::Sine { frequency } => Box::new(SineWave::new(frequency, a, r)),
            WaveformConfig::Square { frequency } => Box::new(PwmWave::square(frequency, a, r)),
            WaveformConfig::Pwm {
                frequency,
                duty_cycle,
            } => Box::new(PwmWave::new(frequency, a, duty_cycle, r)),
            WaveformConfig::Triangle {
                frequency,
                rising_rate,
            } => Box::new(TriangleWave::new(frequency, a, rising_rate, r)),
            WaveformConfig::Sawtooth { frequency } => {
                Box::new(TriangleWave::sawtooth(frequency, a, r))
            }
            WaveformConfig::KarplusStrong {
                frequency,
                level,
                seed,
            } => {
                let string = KarplusStrong::new(frequency, a, r).with_level(level);
                match seed {
                    Some(seed) => Box::new(string.with_seed(seed)),
                    None => Box::new(string),
                }
            }
            WaveformConfig::Sweep { start, end, .. } => {
                Box::new(SweepFrequency::new(start, end, a, r))
            }
            WaveformConfig::Am {
                frequency,
                mod_frequency,
                mod_depth,
            } => Box::new(AmplitudeModulation::new(
                frequency,
                a,
                mod_frequency,
                mod_depth,
                r,
            )),
            WaveformConfig::Fm {
                frequency,
                mod_frequency,
                deviation,
                phase,
            } => Box::new(
                FrequencyModulation::new(frequency, a, mod_frequency, deviation, r)
                    .with_phase_mode(phase.into()),
            ),
        }
    }

    /// Validate, build, and synthesize `duration` seconds.
    ///
    /// A reversed sweep is flipped after synthesis.
    pub fn render(&self, duration: f64) -> Result<Vec<f64>, ConfigError> {
        self.validate()?;
        let mut synth = self.build();
        let mut samples = synth.try_synthesize(duration)?;
        if let WaveformConfig::Sweep { reverse: true, .. } = self.waveform {
            reverse(&mut samples);
        }
        tracing::debug!(
            name = %self.name,
            kind = self.waveform.kind(),
            len = samples.len(),
            "rendered preset"
        );
        Ok(samples)
    }
}
