//! module-matrix - Puppet module usage vs. declared OS support.
//!
//! Queries PuppetDB for the fleet's operating-system facts and per-host
//! catalogs, derives which top-level modules each OS release actually uses,
//! cross-references every local module's `metadata.json`, and renders a
//! usage/support matrix.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`catalog`] - Module extraction from host catalogs
//! - [`error`] - Error types and result aliases
//! - [`matrix`] - Usage/support matrix construction
//! - [`metadata`] - Module metadata loading from a local module path
//! - [`oskey`] - OS key derivation from raw fact values
//! - [`puppetdb`] - PuppetDB query client
//! - [`report`] - Text rendering and report writing
//! - [`usage`] - Fleet-wide usage aggregation and its cache

pub mod catalog;
pub mod cli;
pub mod error;
pub mod matrix;
pub mod metadata;
pub mod oskey;
pub mod puppetdb;
pub mod report;
pub mod usage;

pub use error::{MatrixError, Result};
