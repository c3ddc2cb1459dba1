//! Fleet-wide module usage aggregation and its cache.
//!
//! Builds the `OS key -> set of used modules` table by walking every host's
//! catalog, or short-circuits entirely when a cached snapshot from an earlier
//! run exists. The cache has no freshness window: presence alone means it is
//! trusted verbatim, and deleting the file is the only invalidation.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog;
use crate::error::{MatrixError, Result};
use crate::oskey::{self, OS_FACT, VERSION_FACT};
use crate::puppetdb::Inventory;

/// Per-OS module usage: OS key to the set of modules applied on that OS.
pub type UsageTable = BTreeMap<String, BTreeSet<String>>;

/// Get the default cache directory.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("module-matrix")
}

/// Path of the usage snapshot inside a cache directory.
pub fn cache_file(cache_dir: &Path) -> PathBuf {
    cache_dir.join("usage.json")
}

/// Build the usage table for the whole fleet.
///
/// If `cache_path` exists it is deserialized and returned unchanged; no fact
/// or catalog queries happen that run. Otherwise every host is queried
/// sequentially and the finished table is written to `cache_path` before
/// returning. A failed host fetch aborts the run without writing a partial
/// cache.
pub fn build(cache_path: &Path, inventory: &dyn Inventory) -> Result<UsageTable> {
    if cache_path.exists() {
        tracing::info!("Using cached usage table from {}", cache_path.display());
        return load(cache_path);
    }

    let os_facts = inventory.facts(OS_FACT)?;
    let version_facts = inventory.facts(VERSION_FACT)?;
    let host_os_keys = oskey::resolve(&os_facts, &version_facts)?;

    tracing::info!("Fetching catalogs for {} hosts", host_os_keys.len());

    let mut table = UsageTable::new();
    for (certname, os_key) in &host_os_keys {
        tracing::info!("Fetching catalog for {} ({})", certname, os_key);
        let resources = inventory.catalog(certname)?;
        let modules = catalog::extract(&resources);
        table.entry(os_key.clone()).or_default().extend(modules);
    }

    store(cache_path, &table)?;
    Ok(table)
}

fn load(path: &Path) -> Result<UsageTable> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| MatrixError::CacheParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn store(path: &Path, table: &UsageTable) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(table).map_err(|e| MatrixError::CacheParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, json)?;
    tracing::debug!("Wrote usage cache to {}", path.display());
    Ok(())
}
