//! Kreatisite - check and register domains through AWS Route53 Domains

use anyhow::{anyhow, Context};
use clap::Parser;
use kreatisite::{cli::Cli, Settings};
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let settings = match bootstrap() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: Failed to initialize: {:#}", e);
            process::exit(1);
        }
    };

    // Usage errors exit with status 2 from here
    let cli = Cli::parse();

    let code = kreatisite::cli::run(cli, &settings).await;
    process::exit(code);
}

/// Load `.env`, install logging and read settings
fn bootstrap() -> anyhow::Result<Settings> {
    kreatisite::init().context("Failed to load environment")?;
    kreatisite::init_logging()
        .map_err(|e| anyhow!(e))
        .context("Failed to install log subscriber")?;

    let settings = Settings::from_env();
    tracing::debug!(
        aws_program = %settings.aws_program,
        default_config_file = %settings.default_config_file.display(),
        version = kreatisite::VERSION,
        "Settings loaded"
    );
    Ok(settings)
}
