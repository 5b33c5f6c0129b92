/// Application settings
///
/// Settings are layered: built-in defaults, then an optional JSON file in the
/// user's config directory, then environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://pixabay.com/api/";
pub const ENV_API_KEY: &str = "PIXABAY_API_KEY";
pub const ENV_ENDPOINT: &str = "IMAGE_FINDER_ENDPOINT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Key sent with every search request
    pub api_key: Option<String>,
    /// Search endpoint URL
    pub endpoint: String,
    /// Longest side of a gallery thumbnail in pixels
    pub thumbnail_size: u32,
    /// How long a notification stays on screen
    pub toast_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            thumbnail_size: 256,
            toast_timeout_secs: 3,
        }
    }
}

impl Settings {
    /// Load settings from the default location and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Self::from_file(&Self::default_path())?;
        settings.apply_env(|name| std::env::var(name).ok());
        Ok(settings)
    }

    /// Get the path where the settings file is expected
    ///
    /// - Linux: ~/.config/image-finder/settings.json
    /// - macOS: ~/Library/Application Support/image-finder/settings.json
    /// - Windows: %APPDATA%\image-finder\settings.json
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_default();

        path.push("image-finder");
        path.push("settings.json");
        path
    }

    /// Read settings from a JSON file; a missing file yields the defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override fields from environment variables looked up through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(ENV_API_KEY).filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key.trim().to_string());
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::from_file(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"api_key": "from-file", "thumbnail_size": 128}"#).unwrap();

        let settings = Settings::from_file(&path).unwrap();

        assert_eq!(settings.api_key.as_deref(), Some("from-file"));
        assert_eq!(settings.thumbnail_size, 128);
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.toast_timeout_secs, 3);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Settings::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_env_overrides_file() {
        let env: HashMap<&str, &str> = [
            (ENV_API_KEY, " from-env "),
            (ENV_ENDPOINT, "http://localhost:8080/api/"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings {
            api_key: Some("from-file".into()),
            ..Settings::default()
        };
        settings.apply_env(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(settings.api_key.as_deref(), Some("from-env"));
        assert_eq!(settings.endpoint, "http://localhost:8080/api/");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let mut settings = Settings {
            api_key: Some("from-file".into()),
            ..Settings::default()
        };
        settings.apply_env(|_| Some("   ".to_string()));
        assert_eq!(settings.api_key.as_deref(), Some("from-file"));
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
    }
}
