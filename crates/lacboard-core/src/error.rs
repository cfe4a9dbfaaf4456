//! Error types for lacboard-core
//!
//! Core computations are total; errors only surface at the edges
//! (CLI argument validation, preferences on disk).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lacboard operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Filter Errors
    // ===================
    #[error("Unknown genre '{value}' (expected one of: {expected})")]
    UnknownGenre { value: String, expected: String },

    #[error("Unknown venue '{value}' (expected one of: {expected})")]
    UnknownVenue { value: String, expected: String },

    // ===================
    // Preferences Errors
    // ===================
    #[error("Failed to read preferences: {path}")]
    PreferencesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write preferences: {path}")]
    PreferencesWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preferences in {path}")]
    PreferencesParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize preferences for {path}")]
    PreferencesSerialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Config directory could not be determined")]
    ConfigDirNotFound,
}

impl CoreError {
    /// Actionable hint shown next to the error in CLI output
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::UnknownGenre { .. } | CoreError::UnknownVenue { .. } => {
                Some("Values are case-insensitive; pass an empty string to disable the filter".to_string())
            }
            CoreError::PreferencesParse { path, .. } => Some(format!(
                "Validate JSON syntax or delete the file: rm {}",
                path.display()
            )),
            CoreError::PreferencesWrite { path, .. } => Some(format!(
                "Check permissions on {}",
                path.parent().unwrap_or(path).display()
            )),
            CoreError::ConfigDirNotFound => {
                Some("Pass --config-dir or set LACBOARD_CONFIG_DIR".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_genre_message_lists_options() {
        let err = CoreError::UnknownGenre {
            value: "jazz".to_string(),
            expected: "Opera, Teatro".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown genre 'jazz' (expected one of: Opera, Teatro)"
        );
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_invalid_config_has_no_suggestion() {
        let err = CoreError::InvalidConfig {
            message: "seed".to_string(),
        };
        assert!(err.suggestion().is_none());
    }

    #[test]
    fn test_serialize_error_does_not_suggest_deleting() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let err = CoreError::PreferencesSerialize {
            path: PathBuf::from("/tmp/lacboard/preferences.json"),
            source,
        };
        assert!(err.to_string().starts_with("Failed to serialize preferences"));
        assert!(err.suggestion().is_none());
    }

    #[test]
    fn test_config_dir_not_found_points_to_flag() {
        let hint = CoreError::ConfigDirNotFound.suggestion().unwrap();
        assert!(hint.contains("--config-dir"));
        assert!(hint.contains("LACBOARD_CONFIG_DIR"));
    }
}
