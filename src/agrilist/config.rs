use crate::error::{AgrilistError, Result};
use crate::model::Collection;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SCHEMES_FILE: &str = "schemes.json";
const DEFAULT_ARTICLES_FILE: &str = "articles.json";

/// Configuration for agrilist, stored alongside the cached payloads as
/// `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgrilistConfig {
    /// File name of the cached schemes payload
    #[serde(default = "default_schemes_file")]
    pub schemes_file: String,

    /// File name of the cached articles payload
    #[serde(default = "default_articles_file")]
    pub articles_file: String,
}

fn default_schemes_file() -> String {
    DEFAULT_SCHEMES_FILE.to_string()
}

fn default_articles_file() -> String {
    DEFAULT_ARTICLES_FILE.to_string()
}

impl Default for AgrilistConfig {
    fn default() -> Self {
        Self {
            schemes_file: DEFAULT_SCHEMES_FILE.to_string(),
            articles_file: DEFAULT_ARTICLES_FILE.to_string(),
        }
    }
}

impl AgrilistConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AgrilistError::Io)?;
        let config: AgrilistConfig =
            serde_json::from_str(&content).map_err(AgrilistError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AgrilistError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AgrilistError::Serialization)?;
        fs::write(config_path, content).map_err(AgrilistError::Io)?;
        Ok(())
    }

    pub fn payload_file(&self, collection: Collection) -> &str {
        match collection {
            Collection::Schemes => &self.schemes_file,
            Collection::Articles => &self.articles_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AgrilistConfig::default();
        assert_eq!(config.schemes_file, "schemes.json");
        assert_eq!(config.articles_file, "articles.json");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = AgrilistConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, AgrilistConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = AgrilistConfig::default();
        config.schemes_file = "gov-schemes.json".to_string();
        config.save(temp_dir.path()).unwrap();

        let loaded = AgrilistConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.schemes_file, "gov-schemes.json");
        assert_eq!(loaded.payload_file(Collection::Schemes), "gov-schemes.json");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join("config.json"),
            r#"{"schemes_file": "s.json"}"#,
        )
        .unwrap();

        let config = AgrilistConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.schemes_file, "s.json");
        assert_eq!(config.articles_file, "articles.json");
    }
}
