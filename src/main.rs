use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

use image_playground::config::AppConfig;

mod cli;

#[derive(Parser)]
#[command(name = "image-playground")]
#[command(about = "Desktop playground for image generation - settings, history and cost tracking")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.image-playground/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding settings, history and images (overrides the config)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the GUI
    Gui,

    /// Print the cost summary of the stored history
    Summary,
}

fn load_config(path: Option<PathBuf>) -> AppConfig {
    let path = path.unwrap_or_else(AppConfig::global_config_path);
    match AppConfig::load_or_init(&path) {
        Ok((config, _created)) => config,
        Err(e) => {
            warn!("{:#}. Falling back to defaults.", e);
            AppConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let mut config = load_config(cli.config);
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = Some(data_dir);
    }

    match cli.command {
        Some(Commands::Summary) => {
            cli::summary::summary_command(&config)?;
        }
        Some(Commands::Gui) | None => {
            image_playground::gui::run_gui(config)?;
        }
    }

    Ok(())
}
