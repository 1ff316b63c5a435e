pub mod config;
pub mod paths;

pub use config::{Config, FormDefaults, LoggingConfig, StorageConfig};
pub use paths::{PathManager, base_path_override};
