use serde::{Deserialize, Serialize};
use showmark_models::{Platform, WatchStatus};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub defaults: FormDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct StorageConfig {
    /// Directory holding the bookmark slot; the path manager's data dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Values a new bookmark gets when the user does not pick them
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FormDefaults {
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub status: WatchStatus,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            platform: Platform::Netflix,
            status: WatchStatus::ToWatch,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Force JSON (true) or plain (false) logs; detected from the terminal when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: None,
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, or fall back to defaults when it does not exist yet
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.defaults.platform.is_known() {
            return Err(anyhow::anyhow!(
                "Invalid default platform: {}. Use 'Netflix', 'Prime Video', or 'Apple TV+'",
                self.defaults.platform
            ));
        }

        let level = self.logging.level.trim().to_lowercase();
        if level.is_empty() {
            return Err(anyhow::anyhow!("logging.level cannot be empty"));
        }
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(anyhow::anyhow!("Invalid logging.level: {}", self.logging.level));
        }

        Ok(())
    }

    /// Directory for the bookmark slot, honouring the `storage.data_dir` override
    pub fn data_dir(&self, default_dir: &Path) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(|| default_dir.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            storage: StorageConfig {
                data_dir: Some(PathBuf::from("/tmp/showmark-data")),
            },
            defaults: FormDefaults {
                platform: Platform::AppleTvPlus,
                status: WatchStatus::Watching,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
                json: Some(true),
                file: None,
            },
        };

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.storage.data_dir, Some(PathBuf::from("/tmp/showmark-data")));
        assert_eq!(loaded.defaults.platform, Platform::AppleTvPlus);
        assert_eq!(loaded.defaults.status, WatchStatus::Watching);
        assert_eq!(loaded.logging.level, "debug");
        assert_eq!(loaded.logging.json, Some(true));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.defaults, FormDefaults::default());
        assert_eq!(config.logging.level, "info");
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[defaults]\nstatus = \"Watched\"\n").unwrap();
        assert_eq!(config.defaults.platform, Platform::Netflix);
        assert_eq!(config.defaults.status, WatchStatus::Watched);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.defaults.platform = Platform::Other("Hulu".to_string());
        assert!(config.validate().is_err());

        config.defaults.platform = Platform::PrimeVideo;
        config.logging.level = "  ".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        config.logging.level = "WARN".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_data_dir_override() {
        let mut config = Config::default();
        assert_eq!(config.data_dir(Path::new("/default")), PathBuf::from("/default"));
        config.storage.data_dir = Some(PathBuf::from("/custom"));
        assert_eq!(config.data_dir(Path::new("/default")), PathBuf::from("/custom"));
    }
}
