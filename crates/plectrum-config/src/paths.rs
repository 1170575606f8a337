//! Where user presets live, and how a preset name is resolved.
//!
//! User presets are `*.toml` files in `<config dir>/plectrum/presets/`, with
//! `<config dir>` taken from [`dirs::config_dir`] (`$XDG_CONFIG_HOME` or
//! `~/.config` on Linux, `~/Library/Application Support` on macOS,
//! `%APPDATA%` on Windows).

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, IoAction};
use crate::factory_presets::get_factory_preset;
use crate::preset::SynthPreset;

const APP_NAME: &str = "plectrum";

const PRESETS_SUBDIR: &str = "presets";

/// The user preset directory (not created).
///
/// Relative to the working directory when no config directory is known.
pub fn user_presets_dir() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_NAME).join(PRESETS_SUBDIR)
}

/// The user preset directory, created if missing.
pub fn ensure_user_presets_dir() -> Result<PathBuf, ConfigError> {
    let dir = user_presets_dir();
    if !dir.is_dir() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| ConfigError::io(IoAction::CreateDir, &dir, e))?;
        tracing::info!(dir = %dir.display(), "created user preset directory");
    }
    Ok(dir)
}

/// Path of a preset file given either a path or a user preset name.
///
/// `name` is first taken as a path; failing that, `<name>.toml` (or `name`
/// if it already ends in `.toml`) is looked up in [`user_presets_dir`].
pub fn find_preset(name: &str) -> Option<PathBuf> {
    find_preset_in(name, &user_presets_dir())
}

fn find_preset_in(name: &str, dir: &Path) -> Option<PathBuf> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Some(direct.to_path_buf());
    }

    let mut candidate = dir.join(name);
    if candidate.extension().is_none_or(|ext| ext != "toml") {
        candidate = dir.join(format!("{name}.toml"));
    }
    candidate.is_file().then_some(candidate)
}

/// Load a preset by factory name, user preset name, or file path, in that order.
///
/// ```rust
/// use plectrum_config::{ConfigError, resolve_preset};
///
/// assert_eq!(resolve_preset("Laser").unwrap().waveform.kind(), "fm");
/// assert!(matches!(
///     resolve_preset("no such preset"),
///     Err(ConfigError::PresetNotFound(_))
/// ));
/// ```
pub fn resolve_preset(name: &str) -> Result<SynthPreset, ConfigError> {
    resolve_preset_in(name, &user_presets_dir())
}

fn resolve_preset_in(name: &str, dir: &Path) -> Result<SynthPreset, ConfigError> {
    if let Some(preset) = get_factory_preset(name) {
        return Ok(preset);
    }
    match find_preset_in(name, dir) {
        Some(path) => SynthPreset::load(path),
        None => Err(ConfigError::PresetNotFound(name.to_string())),
    }
}

/// Preset files in the user preset directory, sorted by path.
///
/// A missing or unreadable directory yields no presets.
pub fn list_user_presets() -> Vec<PathBuf> {
    list_presets_in_dir(&user_presets_dir())
}

fn list_presets_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        tracing::debug!(dir = %dir.display(), "no preset directory");
        return Vec::new();
    };

    let mut found: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    found.sort();
    found
}

/// The preset name a file is listed under: its file stem.
///
/// ```rust
/// use plectrum_config::paths::preset_name_from_path;
/// use std::path::Path;
///
/// let name = preset_name_from_path(Path::new("/path/to/nylon_pluck.toml"));
/// assert_eq!(name.as_deref(), Some("nylon_pluck"));
/// ```
pub fn preset_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()?.to_str().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PWM_TOML: &str = "name = \"Reed\"\n\n[waveform]\nkind = \"pwm\"\nfrequency = 220.0\nduty_cycle = 0.3\n";

    #[test]
    fn user_dir_ends_in_app_subdir() {
        assert!(user_presets_dir().ends_with("plectrum/presets"));
    }

    #[test]
    fn find_by_path_or_name() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("reed.toml");
        fs::write(&file, PWM_TOML).unwrap();

        let as_path = file.to_str().unwrap();
        assert_eq!(find_preset_in(as_path, Path::new("/unused")), Some(file.clone()));
        assert_eq!(find_preset_in("reed", dir.path()), Some(file.clone()));
        assert_eq!(find_preset_in("reed.toml", dir.path()), Some(file));
        assert_eq!(find_preset_in("flute", dir.path()), None);
    }

    #[test]
    fn resolve_prefers_factory_then_user_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("siren.toml"), PWM_TOML).unwrap();
        fs::write(dir.path().join("reed.toml"), PWM_TOML).unwrap();

        // factory "siren" shadows the user file of the same name
        let siren = resolve_preset_in("siren", dir.path()).unwrap();
        assert_eq!(siren.waveform.kind(), "sweep");

        let reed = resolve_preset_in("reed", dir.path()).unwrap();
        assert_eq!(reed.name, "Reed");

        assert!(matches!(
            resolve_preset_in("flute", dir.path()),
            Err(ConfigError::PresetNotFound(name)) if name == "flute"
        ));
    }

    #[test]
    fn resolve_reports_broken_user_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.toml"), "name = ").unwrap();
        assert!(matches!(
            resolve_preset_in("broken", dir.path()),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn listing_keeps_only_toml_sorted() {
        let dir = TempDir::new().unwrap();
        for file in ["b.toml", "a.toml", "notes.txt"] {
            fs::write(dir.path().join(file), "").unwrap();
        }

        let names: Vec<String> = list_presets_in_dir(dir.path())
            .iter()
            .filter_map(|p| preset_name_from_path(p))
            .collect();
        assert_eq!(names, ["a", "b"]);
        assert!(list_presets_in_dir(Path::new("/nonexistent/plectrum/dir")).is_empty());
    }
}
