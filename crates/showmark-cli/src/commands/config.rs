use crate::output::Output;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Table};
use serde_json::json;
use showmark_config::{Config, PathManager};
use std::path::Path;

use crate::ConfigCommands;

pub fn run_config(cmd: ConfigCommands, path_manager: &PathManager, config_file: &Path, config: &Config, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(path_manager, config_file, config, output),
        ConfigCommands::Init { force, log_to_file } => init_config(path_manager, config_file, force, log_to_file, output),
    }
}

fn show_config(path_manager: &PathManager, config_file: &Path, config: &Config, output: &Output) -> Result<()> {
    let data_dir = config.data_dir(path_manager.data_dir());
    let log_file = config
        .logging
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stderr".to_string());

    if !output.is_human() {
        output.json(&json!({
            "config_file": config_file.display().to_string(),
            "config_file_exists": config_file.exists(),
            "data_dir": data_dir.display().to_string(),
            "log_dir": path_manager.log_dir().display().to_string(),
            "defaults": {
                "platform": config.defaults.platform.name(),
                "status": config.defaults.status.label(),
            },
            "logging": {
                "level": config.logging.level,
                "file": log_file,
            },
        }));
        return Ok(());
    }

    if !config_file.exists() {
        output.warn(format!(
            "Configuration file not found at {}, showing defaults. Run 'showmark config init' to create it.",
            config_file.display()
        ));
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Setting").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Config File"), Cell::new(config_file.display())]);
    table.add_row(vec![Cell::new("Data Directory"), Cell::new(data_dir.display())]);
    table.add_row(vec![Cell::new("Log Directory"), Cell::new(path_manager.log_dir().display())]);
    table.add_row(vec![Cell::new("Default Platform"), Cell::new(&config.defaults.platform)]);
    table.add_row(vec![Cell::new("Default Status"), Cell::new(config.defaults.status)]);
    table.add_row(vec![Cell::new("Log Level"), Cell::new(&config.logging.level)]);
    table.add_row(vec![Cell::new("Log File"), Cell::new(log_file)]);

    output.info(table.to_string());
    Ok(())
}

fn init_config(path_manager: &PathManager, config_file: &Path, force: bool, log_to_file: bool, output: &Output) -> Result<()> {
    if config_file.exists() && !force {
        output.warn(format!(
            "Configuration already exists at {}. Re-run with --force to overwrite it.",
            config_file.display()
        ));
        return Ok(());
    }

    path_manager
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create showmark directories: {}", e))?;

    let mut config = Config::default();
    if log_to_file {
        config.logging.file = Some(path_manager.log_file());
    }
    config
        .save_to_file(config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write config to {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use showmark_models::{Platform, WatchStatus};
    use tempfile::TempDir;

    fn quiet() -> Output {
        Output::new(OutputFormat::Human, true)
    }

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let paths = PathManager::from_base(dir.path());
        let config_file = paths.config_file();

        init_config(&paths, &config_file, false, true, &quiet()).unwrap();

        let config = Config::load_from_file(&config_file).unwrap();
        assert_eq!(config.defaults.platform, Platform::Netflix);
        assert_eq!(config.defaults.status, WatchStatus::ToWatch);
        assert_eq!(config.logging.file, Some(paths.log_file()));
        assert!(paths.data_dir().is_dir());
        assert!(paths.log_dir().is_dir());
    }

    #[test]
    fn test_init_keeps_existing_config_without_force() {
        let dir = TempDir::new().unwrap();
        let paths = PathManager::from_base(dir.path());
        let config_file = paths.config_file();
        std::fs::write(&config_file, "[defaults]\nstatus = \"Watched\"\n").unwrap();

        init_config(&paths, &config_file, false, false, &quiet()).unwrap();
        let config = Config::load_from_file(&config_file).unwrap();
        assert_eq!(config.defaults.status, WatchStatus::Watched);

        init_config(&paths, &config_file, true, false, &quiet()).unwrap();
        let config = Config::load_from_file(&config_file).unwrap();
        assert_eq!(config.defaults.status, WatchStatus::ToWatch);
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn test_show_config_without_file() {
        let dir = TempDir::new().unwrap();
        let paths = PathManager::from_base(dir.path());
        show_config(&paths, &paths.config_file(), &Config::default(), &quiet()).unwrap();
    }
}
