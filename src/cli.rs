//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The tool has a single mode of operation, so there are no subcommands.

use clap::Parser;
use std::path::PathBuf;

/// Report which Puppet modules each OS release uses and supports.
#[derive(Debug, Parser)]
#[command(name = "module-matrix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// PuppetDB base URL
    #[arg(long, env = "PUPPETDB_URL", default_value = "http://localhost:8080")]
    pub server: String,

    /// Directory containing one subdirectory per checked-out module
    #[arg(long, env = "MODULEPATH", default_value = "modules")]
    pub modulepath: PathBuf,

    /// Cache directory for the usage snapshot (defaults to the user cache dir)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Path of the rendered report
    #[arg(short, long, default_value = "module_matrix.txt")]
    pub output: PathBuf,

    /// Discard any cached usage snapshot and query PuppetDB again
    #[arg(long)]
    pub refresh: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
