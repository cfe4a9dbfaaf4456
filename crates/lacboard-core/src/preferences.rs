//! User preferences persistence for lacboard
//!
//! Stores UI preferences (theme, heatmap seed) in
//! `<config_dir>/preferences.json`, where `config_dir` defaults to
//! `~/.config/lacboard`.

use crate::error::CoreError;
use crate::heatmap::DEFAULT_HEATMAP_SEED;
use crate::models::ColorScheme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

const PREFERENCES_FILE: &str = "preferences.json";

/// Default configuration directory (`~/.config/lacboard` on Linux)
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("lacboard"))
}

/// lacboard-specific user preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Color scheme (dark / light)
    pub color_scheme: ColorScheme,
    /// Seed of the heatmap sample generator
    pub heatmap_seed: u64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Dark,
            heatmap_seed: DEFAULT_HEATMAP_SEED,
        }
    }
}

impl Preferences {
    pub fn path(config_dir: &Path) -> PathBuf {
        config_dir.join(PREFERENCES_FILE)
    }

    /// Load preferences, propagating I/O and parse errors.
    /// A missing file yields defaults.
    pub fn try_load(config_dir: &Path) -> Result<Self, CoreError> {
        let path = Self::path(config_dir);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(CoreError::PreferencesRead { path, source }),
        };
        serde_json::from_str(&content).map_err(|source| CoreError::PreferencesParse { path, source })
    }

    /// Load preferences, falling back to defaults on any error
    pub fn load(config_dir: &Path) -> Self {
        Self::try_load(config_dir).unwrap_or_else(|e| {
            warn!(error = %e, "Using default preferences");
            Self::default()
        })
    }

    /// Persist preferences to `<config_dir>/preferences.json`
    pub fn save(&self, config_dir: &Path) -> Result<(), CoreError> {
        std::fs::create_dir_all(config_dir).map_err(|source| CoreError::PreferencesWrite {
            path: config_dir.to_path_buf(),
            source,
        })?;
        let path = Self::path(config_dir);
        let content = serde_json::to_string_pretty(self).map_err(|source| {
            CoreError::PreferencesSerialize {
                path: path.clone(),
                source,
            }
        })?;
        std::fs::write(&path, content).map_err(|source| CoreError::PreferencesWrite { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences::try_load(dir.path()).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("lacboard");
        let prefs = Preferences {
            color_scheme: ColorScheme::Light,
            heatmap_seed: 42,
        };
        prefs.save(&nested).unwrap();
        assert_eq!(Preferences::load(&nested), prefs);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            Preferences::path(dir.path()),
            r#"{ "color_scheme": "light" }"#,
        )
        .unwrap();
        let prefs = Preferences::try_load(dir.path()).unwrap();
        assert_eq!(prefs.color_scheme, ColorScheme::Light);
        assert_eq!(prefs.heatmap_seed, DEFAULT_HEATMAP_SEED);
    }

    #[test]
    fn test_invalid_json_errors_but_load_falls_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(Preferences::path(dir.path()), "{ not json").unwrap();
        assert!(matches!(
            Preferences::try_load(dir.path()),
            Err(CoreError::PreferencesParse { .. })
        ));
        assert_eq!(Preferences::load(dir.path()), Preferences::default());
    }

    #[test]
    fn test_save_failure_reports_write_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("lacboard");
        std::fs::write(&blocker, "").unwrap();
        let err = Preferences::default().save(&blocker).unwrap_err();
        assert!(matches!(err, CoreError::PreferencesWrite { .. }));
        assert!(!err.suggestion().unwrap().contains("rm "));
    }
}
