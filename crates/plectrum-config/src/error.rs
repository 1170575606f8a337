//! Error types for preset operations.

use core::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::validation::ValidationError;

/// Filesystem operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoAction {
    /// Reading a preset file.
    Read,
    /// Writing a preset file.
    Write,
    /// Creating a preset directory.
    CreateDir,
}

impl fmt::Display for IoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IoAction::Read => "read",
            IoAction::Write => "write",
            IoAction::CreateDir => "create directory",
        })
    }
}

/// Errors from loading, saving, resolving, or rendering presets.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem access failed; carries the path involved.
    #[error("cannot {action} '{}': {source}", path.display())]
    Io {
        /// What was being attempted.
        action: IoAction,
        /// File or directory involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Preset text is not valid TOML or does not match the preset schema.
    #[error("invalid preset TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Preset could not be written as TOML.
    #[error("cannot serialize preset: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// No factory preset, user preset, or file has this name.
    #[error("no preset named '{0}'")]
    PresetNotFound(String),

    /// One or more preset parameters are invalid.
    #[error("invalid preset: {0}")]
    Validation(#[from] ValidationError),

    /// Synthesis rejected the configuration.
    #[error(transparent)]
    Synth(#[from] plectrum_core::Error),
}

impl ConfigError {
    pub(crate) fn io(action: IoAction, path: &Path, source: std::io::Error) -> Self {
        ConfigError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn not_found() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone")
    }

    #[test]
    fn io_message_names_action_and_path() {
        let err = ConfigError::io(IoAction::CreateDir, Path::new("/a/b"), not_found());
        assert_eq!(err.to_string(), "cannot create directory '/a/b': gone");
        assert!(err.source().is_some());
        assert!(matches!(
            err,
            ConfigError::Io {
                action: IoAction::CreateDir,
                ..
            }
        ));
    }

    #[test]
    fn preset_not_found_has_no_source() {
        let err = ConfigError::PresetNotFound("Harp".to_string());
        assert_eq!(err.to_string(), "no preset named 'Harp'");
        assert!(err.source().is_none());
    }

    #[test]
    fn synth_error_is_transparent() {
        let err = ConfigError::from(plectrum_core::Error::InvalidDuration(-1.0));
        assert_eq!(
            err.to_string(),
            plectrum_core::Error::InvalidDuration(-1.0).to_string()
        );
    }
}
