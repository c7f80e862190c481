//! MLP Explorer CLI
//!
//! Command-line interface for the MLP Explorer core.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use mlp_explorer::cli::commands;
use mlp_explorer::cli::{Cli, Commands};
use mlp_explorer::{ExplorerConfig, ExplorerError};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    debug!("MLP Explorer v{}", env!("CARGO_PKG_VERSION"));

    let config = commands::load_config(cli.config.as_deref(), cli.data_dir.as_deref(), cli.seed)
        .context("failed to load configuration")?;

    match cli.command {
        Some(cmd) => handle_command(cmd, config).map_err(|err| {
            for suggestion in err.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            let code = err.error_code();
            anyhow::Error::new(err).context(code)
        }),
        None => {
            info!("No command given");
            println!("MLP Explorer v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands, config: ExplorerConfig) -> Result<(), ExplorerError> {
    match cmd {
        Commands::Layout { layers, features } => commands::layout_diagram(config, layers, features),
        Commands::Metrics { layers } => commands::show_metrics(config, layers),
        Commands::Significance {
            layers,
            cut,
            classes,
        } => commands::show_significance(config, layers, cut, classes),
        Commands::Histogram { layers, classes } => {
            commands::show_histogram(config, layers, classes)
        }
        Commands::Predict { layers, event } => commands::show_prediction(config, layers, event),
        Commands::Scatter {
            y,
            x_range,
            y_range,
            categories,
        } => commands::show_scatter(config, y, x_range, y_range, categories),
        Commands::Events => commands::list_events(config),
    }
}
