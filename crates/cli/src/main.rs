//! Main entry point for the trunkline shell

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::warn;
use trunkline_cli::logging::log_welcome;
use trunkline_cli::{setup_logging, Args, LoggingConfig, Session, Shell, TrunklineConfig};
use trunkline_core::NetworkDirectory;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config =
        TrunklineConfig::resolve(args.config.as_deref()).context("loading configuration")?;
    args.apply(&mut config);

    setup_logging(LoggingConfig::from_settings(&config.logging)?)?;
    log_welcome("trunkline", env!("CARGO_PKG_VERSION"));

    let directory = match &config.initial_network {
        Some(path) => NetworkDirectory::load(path)
            .with_context(|| format!("loading network from {}", path.display()))?,
        None => NetworkDirectory::new(),
    };
    let session = Session::with_directory(directory, config.strict);

    let mut shell = Shell::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), session)
        .with_prompt(config.prompt());
    shell.run_until(shutdown_signal()).await?;

    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed the shell runs until end of input.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
