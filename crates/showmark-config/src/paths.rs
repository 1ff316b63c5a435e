use anyhow::Result;
use std::path::{Path, PathBuf};

/// Base directory from `SHOWMARK_BASE_PATH`, if set
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var("SHOWMARK_BASE_PATH")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("showmark");

        Ok(Self::from_base(base_dir))
    }

    /// Config file at the base, data and logs in subdirectories
    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("showmark.log")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = base_path_override() {
            return Self::from_base(base);
        }

        // OS config paths (e.g., ~/.config/showmark on Linux), falling
        // back to the working directory when no home is available
        Self::new().unwrap_or_else(|_| Self::from_base(".showmark"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_layout_from_base() {
        let paths = PathManager::from_base("/srv/showmark");
        assert_eq!(paths.config_file(), PathBuf::from("/srv/showmark/config.toml"));
        assert_eq!(paths.data_dir(), Path::new("/srv/showmark/data"));
        assert_eq!(paths.log_file(), PathBuf::from("/srv/showmark/logs/showmark.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let dir = TempDir::new().unwrap();
        let paths = PathManager::from_base(dir.path().join("base"));
        paths.ensure_directories().unwrap();
        assert!(paths.config_dir().is_dir());
        assert!(paths.data_dir().is_dir());
        assert!(paths.log_dir().is_dir());
    }
}
