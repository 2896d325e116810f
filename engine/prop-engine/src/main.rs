use anyhow::Result;
use clap::Parser;
use prop_engine::cli::{apply_overrides, read_config, Cli, CliHandler};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = read_config(cli.config.as_deref())?;
    config.apply_log_env();

    // Set up before the other env overrides, which may warn. RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    info!("Starting prop-engine");

    let mut config = apply_overrides(config)?;
    if let Some(sport) = cli.sport {
        config.stats.sport = sport;
    }

    let handler = CliHandler::new(config, cli.json)?;
    handler.handle_command(cli.command)?;

    Ok(())
}
