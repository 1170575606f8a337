//! Built-in presets, stored as TOML text inside the library.
//!
//! Every waveform kind has at least one; fm has two, one per phase mode.

use crate::SynthPreset;

/// Lookup keys of the factory presets.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "init",
    "square_bass",
    "hollow_pwm",
    "soft_triangle",
    "saw_lead",
    "nylon_pluck",
    "siren",
    "tremolo",
    "vibrato",
    "laser",
];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("init", INIT_PRESET),
    ("square_bass", SQUARE_BASS_PRESET),
    ("hollow_pwm", HOLLOW_PWM_PRESET),
    ("soft_triangle", SOFT_TRIANGLE_PRESET),
    ("saw_lead", SAW_LEAD_PRESET),
    ("nylon_pluck", NYLON_PLUCK_PRESET),
    ("siren", SIREN_PRESET),
    ("tremolo", TREMOLO_PRESET),
    ("vibrato", VIBRATO_PRESET),
    ("laser", LASER_PRESET),
];

/// Reference tone - La3 sine.
const INIT_PRESET: &str = r#"
name = "Init"
description = "Reference La3 sine at 440 Hz"

[waveform]
kind = "sine"
frequency = 440.0
"#;

const SQUARE_BASS_PRESET: &str = r#"
name = "Square Bass"
description = "Low square wave on La1"
amplitude = 0.6

[waveform]
kind = "square"
frequency = 110.0
"#;

const HOLLOW_PWM_PRESET: &str = r#"
name = "Hollow PWM"
description = "Narrow pulse, nasal and thin"
amplitude = 0.5

[waveform]
kind = "pwm"
frequency = 220.0
duty_cycle = 0.2
"#;

const SOFT_TRIANGLE_PRESET: &str = r#"
name = "Soft Triangle"
description = "Symmetric triangle, flute-like"
amplitude = 0.8

[waveform]
kind = "triangle"
frequency = 329.63
rising_rate = 0.5
"#;

const SAW_LEAD_PRESET: &str = r#"
name = "Saw Lead"
description = "Bright sawtooth on Mi3"
amplitude = 0.5

[waveform]
kind = "sawtooth"
frequency = 329.63
"#;

const NYLON_PLUCK_PRESET: &str = r#"
name = "Nylon Pluck"
description = "Karplus-Strong string on Sol2, darker than default"
amplitude = 0.9

[waveform]
kind = "karplus_strong"
frequency = 196.0
level = 0.3
"#;

const SIREN_PRESET: &str = r#"
name = "Siren"
description = "Rising sweep from 200 Hz to 1200 Hz"
amplitude = 0.7

[waveform]
kind = "sweep"
start = 200.0
end = 1200.0
"#;

const TREMOLO_PRESET: &str = r#"
name = "Tremolo"
description = "Amplitude modulated sine, 5 Hz throb"
amplitude = 0.6

[waveform]
kind = "am"
frequency = 440.0
mod_frequency = 5.0
mod_depth = 0.3
"#;

const VIBRATO_PRESET: &str = r#"
name = "Vibrato"
description = "Frequency modulated sine with accumulated phase"
amplitude = 0.8

[waveform]
kind = "fm"
frequency = 440.0
mod_frequency = 6.0
deviation = 8.0
phase = "accumulated"
"#;

const LASER_PRESET: &str = r#"
name = "Laser"
description = "Direct-phase FM: the pitch runs away as time grows"
amplitude = 0.8

[waveform]
kind = "fm"
frequency = 440.0
mod_frequency = 1.0
deviation = 20.0
phase = "direct"
"#;

/// Every factory preset, in [`FACTORY_PRESET_NAMES`] order.
///
/// ```rust
/// use plectrum_config::factory_presets;
///
/// for preset in factory_presets() {
///     println!("{:<14} {}", preset.name, preset.waveform.kind());
/// }
/// ```
pub fn factory_presets() -> Vec<SynthPreset> {
    FACTORY_PRESETS_TOML.iter().filter_map(|&(_, text)| parse(text)).collect()
}

/// A factory preset by key (`"nylon_pluck"`) or display name (`"Nylon Pluck"`).
///
/// Matching ignores case.
///
/// ```rust
/// use plectrum_config::get_factory_preset;
///
/// let preset = get_factory_preset("Nylon Pluck").unwrap();
/// assert_eq!(preset.waveform.kind(), "karplus_strong");
/// assert!(get_factory_preset("nonexistent").is_none());
/// ```
pub fn get_factory_preset(name: &str) -> Option<SynthPreset> {
    if let Some(&(_, text)) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
    {
        return parse(text);
    }
    factory_presets()
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// True if [`get_factory_preset`] knows `name`.
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}

fn parse(text: &str) -> Option<SynthPreset> {
    match SynthPreset::from_toml(text) {
        Ok(preset) => Some(preset),
        Err(e) => {
            tracing::error!(error = %e, "factory preset failed to parse");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_parses_and_validates() {
        for (key, text) in FACTORY_PRESETS_TOML {
            let preset = SynthPreset::from_toml(text)
                .unwrap_or_else(|e| panic!("factory preset '{key}' does not parse: {e}"));
            assert!(preset.description.is_some(), "'{key}' has no description");
            assert_eq!(preset.validate(), Ok(()), "'{key}' does not validate");
        }
    }

    #[test]
    fn names_match_table() {
        let table: Vec<&str> = FACTORY_PRESETS_TOML.iter().map(|(n, _)| *n).collect();
        assert_eq!(table, FACTORY_PRESET_NAMES);
        assert_eq!(factory_presets().len(), FACTORY_PRESET_NAMES.len());
    }

    #[test]
    fn every_kind_is_covered() {
        let mut kinds: Vec<&str> = factory_presets().iter().map(|p| p.waveform.kind()).collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), 9);
    }

    #[test]
    fn lookup_by_key_or_display_name() {
        assert_eq!(get_factory_preset("siren").unwrap().name, "Siren");
        assert_eq!(get_factory_preset("SQUARE BASS").unwrap().name, "Square Bass");
        assert!(is_factory_preset("Laser"));
        assert!(!is_factory_preset("my_custom_preset"));
    }
}
