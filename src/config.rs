use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Config {
    pub indent_spaces: usize,
    pub sort_keys: bool,
    pub copy_to_clipboard: bool,
    pub output_dir: Option<PathBuf>,
    pub trust_all_urls: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_spaces: 2,
            sort_keys: false,
            copy_to_clipboard: false,
            output_dir: None,
            trust_all_urls: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            // First run: persist the defaults so the user has a file to edit.
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let data = fs::read(path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        Ok(fs::write(path, serde_json::to_vec_pretty(self)?)?)
    }

    fn path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("jfmt").join("config.json"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn save_and_load_round_trip_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            indent_spaces: 4,
            sort_keys: true,
            copy_to_clipboard: true,
            output_dir: Some(PathBuf::from("/tmp/out")),
            trust_all_urls: true,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn load_missing_file_writes_defaults_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn load_partial_file_fills_defaults_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"indent_spaces": 8}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config,
            Config {
                indent_spaces: 8,
                ..Config::default()
            }
        );
    }

    #[test]
    fn load_malformed_file_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json at all").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }
}
