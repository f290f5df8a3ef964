//! Global sportcal configuration.

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::baseline::BaselineSource;
use crate::error::{SportCalError, SportCalResult};
use crate::store::FileStore;

/// Configuration at ~/.config/sportcal/config.toml
///
/// Every key can be overridden with a `SPORTCAL_`-prefixed environment
/// variable, e.g. `SPORTCAL_DATA_DIR`.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct SportCalConfig {
    /// Persistent store directory (user-added events).
    pub data_dir: Option<PathBuf>,

    /// Transient store directory (selected event, calendar view).
    pub session_dir: Option<PathBuf>,

    /// URL or file path of the baseline `{ "events": [...] }` document.
    pub baseline: Option<String>,
}

impl SportCalConfig {
    pub fn default_config_path() -> SportCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SportCalError::Config("Could not determine config directory".into()))?
            .join("sportcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from `path`, or the default location. A missing default config
    /// file is created with every option commented out.
    pub fn load(path: Option<&Path>) -> SportCalResult<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::default_config_path()?;
                if !path.exists() {
                    Self::create_default_config(&path)?;
                }
                path
            }
        };

        Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(Environment::with_prefix("SPORTCAL").try_parsing(false))
            .build()
            .map_err(|e| SportCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SportCalError::Config(e.to_string()))
    }

    pub fn data_path(&self) -> SportCalResult<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(expand(dir)),
            None => Ok(dirs::data_dir()
                .ok_or_else(|| SportCalError::Config("Could not determine data directory".into()))?
                .join("sportcal")),
        }
    }

    pub fn session_path(&self) -> SportCalResult<PathBuf> {
        match &self.session_dir {
            Some(dir) => Ok(expand(dir)),
            None => Ok(dirs::cache_dir()
                .ok_or_else(|| SportCalError::Config("Could not determine cache directory".into()))?
                .join("sportcal")
                .join("session")),
        }
    }

    pub fn baseline_source(&self) -> Option<BaselineSource> {
        self.baseline
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(BaselineSource::parse)
    }

    /// The persistent store.
    pub fn persistent_store(&self) -> SportCalResult<FileStore> {
        Ok(FileStore::new(self.data_path()?))
    }

    /// The transient (per-session) store.
    pub fn session_store(&self) -> SportCalResult<FileStore> {
        Ok(FileStore::new(self.session_path()?))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> SportCalResult<()> {
        let contents = "\
# sportcal configuration

# Where user-added events are stored:
# data_dir = \"~/.local/share/sportcal\"

# Where the current session (selected event, displayed month) lives:
# session_dir = \"~/.cache/sportcal/session\"

# Baseline events, as a URL or a file path to { \"events\": [...] }:
# baseline = \"https://example.com/events.json\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SportCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SportCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/sportcal-data\"\nbaseline = \"https://example.com/events.json\"\n",
        )
        .unwrap();

        let config = SportCalConfig::load(Some(&path)).unwrap();
        assert_eq!(config.data_path().unwrap(), PathBuf::from("/tmp/sportcal-data"));
        assert!(matches!(config.baseline_source(), Some(BaselineSource::Url(_))));
    }

    #[test]
    fn test_missing_explicit_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = SportCalConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.data_dir, None);
        assert_eq!(config.baseline_source(), None);
    }

    #[test]
    fn test_blank_baseline_is_unset() {
        let config = SportCalConfig {
            baseline: Some("  ".to_string()),
            ..SportCalConfig::default()
        };
        assert_eq!(config.baseline_source(), None);
    }

    #[test]
    fn test_default_config_parses_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sportcal/config.toml");
        SportCalConfig::create_default_config(&path).unwrap();

        let config = SportCalConfig::load(Some(&path)).unwrap();
        assert_eq!(config.session_dir, None);
    }
}
