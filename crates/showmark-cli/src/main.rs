use clap::{ArgAction, Parser, Subcommand};
use commands::{config, shows, stats};
use showmark_config::{Config, PathManager};
use showmark_core::{BookmarkStore, LoadSource};
use showmark_models::{Platform, WatchStatus};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "showmark")]
#[command(about = "showmark - Keep a lightweight list of the TV shows you want to watch next")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookmarked shows, newest first
    List {
        /// Only show bookmarks with this status ("To Watch", "Watching", "Watched")
        #[arg(long)]
        status: Option<WatchStatus>,
    },
    /// Bookmark a new show
    Add {
        /// Show title
        title: String,

        /// Streaming service: Netflix, "Prime Video" or "Apple TV+" (defaults to config)
        #[arg(long)]
        platform: Option<Platform>,

        /// Initial status (defaults to config)
        #[arg(long)]
        status: Option<WatchStatus>,
    },
    /// Set the status of a show
    Mark {
        id: u64,
        status: WatchStatus,
    },
    /// Mark a show as watched
    Watched {
        id: u64,
    },
    /// Put a watched show back on the to-watch list
    Rewatch {
        id: u64,
    },
    /// Flip a show between Watched and To Watch
    Toggle {
        id: u64,
    },
    /// Remove a show
    Remove {
        id: u64,
    },
    /// Show totals per status
    Stats,
    /// Replace all bookmarks with the example shows
    Reset {
        /// Confirm the reset
        #[arg(long, action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration and paths
    Show,
    /// Write a config.toml with the default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,

        /// Send logs to the log directory instead of stderr
        #[arg(long, action = ArgAction::SetTrue)]
        log_to_file: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let path_manager = PathManager::default();
    let config_file = cli.config.clone().unwrap_or_else(|| path_manager.config_file());
    let config = Config::load_or_default(&config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("Configuration validation failed: {}", e))?;

    logging::init_logging(cli.verbose, cli.quiet, &config.logging).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    // Config commands never open the bookmark slot
    if let Commands::Config { cmd } = cli.command {
        let cmd = cmd.unwrap_or(ConfigCommands::Show);
        return config::run_config(cmd, &path_manager, &config_file, &config, &output);
    }

    let data_dir = config.data_dir(path_manager.data_dir());
    tracing::debug!("Using data directory {:?}", data_dir);
    let mut store = BookmarkStore::open_in(&data_dir)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to open bookmarks in {}: {}", data_dir.display(), e))?;

    match store.load_source() {
        LoadSource::Repaired { normalized, dropped } => output.warn(format!(
            "Stored bookmarks needed repair: {} with an unknown status shown as To Watch, {} unreadable skipped. \
             They are saved in repaired form on the next change.",
            normalized, dropped
        )),
        LoadSource::Unusable => output.warn(
            "Stored bookmarks could not be read, showing the example shows. \
             The stored data is replaced on the next change.",
        ),
        LoadSource::Missing | LoadSource::Stored => {}
    }

    match cli.command {
        Commands::List { status } => shows::run_list(&store, status, &output),
        Commands::Add { title, platform, status } => {
            shows::run_add(&mut store, title, platform, status, &config.defaults, &output)
        }
        Commands::Mark { id, status } => shows::run_mark(&mut store, id, status, &output),
        Commands::Watched { id } => shows::run_mark(&mut store, id, WatchStatus::Watched, &output),
        Commands::Rewatch { id } => shows::run_mark(&mut store, id, WatchStatus::ToWatch, &output),
        Commands::Toggle { id } => shows::run_toggle(&mut store, id, &output),
        Commands::Remove { id } => shows::run_remove(&mut store, id, &output),
        Commands::Stats => stats::run_stats(&store, &output),
        Commands::Reset { yes } => shows::run_reset(&mut store, yes, &output),
        // Handled above
        Commands::Config { .. } => Ok(()),
    }
}
