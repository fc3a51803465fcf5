use anyhow::{Context, Result};
use clap::Parser;
use ponde::RenderConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Table { mesh_row, csv } => commands::table::run(&config, mesh_row, csv.as_deref()),
        Commands::Grid => commands::grid::run(&config),
        Commands::Export { format, out } => commands::export::run(&config, format, &out),
        Commands::Check => commands::check::run(&config),
    }
}

/// File values first, then command-line overrides.
fn load_config(cli: &Cli) -> Result<RenderConfig> {
    let mut config = match &cli.config {
        Some(path) => RenderConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    if let Some(samples) = cli.samples {
        config.samples = samples;
    }
    if let Some(a) = cli.a {
        config.a = a;
    }
    if let Some(b) = cli.b {
        config.b = b;
    }
    if let Some(color) = &cli.color {
        config.color = color.clone();
    }

    tracing::debug!(?config, "resolved render config");
    Ok(config)
}
