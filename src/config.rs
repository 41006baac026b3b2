//! Game configuration (JSON)
//!
//! Everything here can also be set from the command line; flags win over
//! the file.

use crate::validator::{DEFAULT_LANGUAGE, OriginalityRule};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Game settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Language passed to the spell checker
    #[serde(default = "default_language")]
    pub language: String,
    /// How repeated words are treated
    #[serde(default)]
    pub originality: OriginalityRule,
    /// Custom root-word list; the embedded list is used when unset
    #[serde(default)]
    pub word_list: Option<PathBuf>,
    /// Custom dictionary; the embedded English dictionary is used when unset
    #[serde(default)]
    pub dictionary: Option<PathBuf>,
    /// Seed for root-word selection, for reproducible games
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            originality: OriginalityRule::default(),
            word_list: None,
            dictionary: None,
            seed: None,
        }
    }
}

/// Failure reading an explicitly requested config file
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Default config location: `$HOME/.config/word_scramble/config.json`
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .map(|home| home.join(".config").join("word_scramble").join("config.json"))
}

/// Parse a config from JSON text
///
/// # Errors
///
/// Returns the JSON error if the text is not a valid config.
pub fn parse_config(json: &str) -> Result<GameConfig, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load the config
///
/// With an explicit `path`, read and parse errors are returned. Without one,
/// the default location is tried and any problem there falls back to the
/// defaults.
///
/// # Errors
///
/// Returns [`ConfigError`] only for an explicit `path`.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig, ConfigError> {
    if let Some(path) = path {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        return parse_config(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        });
    }

    let Some(default_path) = config_path() else {
        return Ok(GameConfig::default());
    };

    match fs::read_to_string(&default_path) {
        Ok(content) => Ok(parse_config(&content).unwrap_or_else(|e| {
            log::warn!("ignoring invalid config {}: {e}", default_path.display());
            GameConfig::default()
        })),
        Err(_) => Ok(GameConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.originality, OriginalityRule::Strict);
        assert!(config.word_list.is_none());
        assert!(config.dictionary.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = GameConfig {
            language: "en".to_string(),
            originality: OriginalityRule::Legacy,
            word_list: Some(PathBuf::from("/tmp/start.txt")),
            dictionary: None,
            seed: Some(11),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed = parse_config(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = parse_config(r#"{"seed": 5}"#).unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.language, "en");
        assert_eq!(config.originality, OriginalityRule::Strict);
    }

    #[test]
    fn test_unknown_rule_is_an_error() {
        assert!(parse_config(r#"{"originality": "lenient"}"#).is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"originality": "legacy", "language": "en"}}"#).unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.originality, OriginalityRule::Legacy);
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_config(Some(dir.path().join("config.json").as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_explicit_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config"));
    }
}
