//! module-matrix CLI entry point.

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use module_matrix::cli::Cli;
use module_matrix::puppetdb::PuppetDbClient;
use module_matrix::{matrix, metadata, report, usage, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("module_matrix=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("module_matrix=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let cache_dir = cli
        .cache_dir
        .clone()
        .unwrap_or_else(usage::default_cache_dir);
    let cache_path = usage::cache_file(&cache_dir);

    if cli.refresh && cache_path.exists() {
        tracing::info!("Discarding cached usage table at {}", cache_path.display());
        fs::remove_file(&cache_path)?;
    }

    let client = PuppetDbClient::new(&cli.server);
    let usage_table = usage::build(&cache_path, &client)?;
    let modules = metadata::load(&cli.modulepath)?;

    let matrix = matrix::build(&usage_table, &modules);
    report::write(&matrix, &cli.output)?;

    tracing::info!(
        "{} OS releases, {} modules in use",
        matrix.rows.len(),
        matrix.headers.len().saturating_sub(1)
    );

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("module-matrix starting with args: {:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
