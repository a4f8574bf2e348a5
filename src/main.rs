use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Parser;
use dormkit::cli::Cli;
use dormkit::{designer_from_config, init_logging, run_session, Config, VERSION};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load_or_default().context("failed to load default config")?,
    };

    // Initialize logging
    init_logging(&config.logging)?;
    tracing::info!(version = VERSION, "starting dormkit");

    let mut state = designer_from_config(&config);
    let stdout = io::stdout();

    let summary = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            run_session(&mut state, BufReader::new(file), stdout.lock())?
        }
        None => run_session(&mut state, io::stdin().lock(), stdout.lock())?,
    };

    if summary.errors > 0 {
        tracing::warn!(errors = summary.errors, "some commands were rejected");
    }
    Ok(())
}
