//! Module metadata loading from a local module path.
//!
//! Each module checkout carries a `metadata.json` declaring, among other
//! things, which operating-system releases it supports. A missing or
//! malformed file only drops that module from the report's support
//! information; it never fails the run.

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::oskey::is_rolling_release;

/// Declared support for one operating system.
#[derive(Debug, Clone, Deserialize)]
pub struct OsSupport {
    pub operatingsystem: String,
    /// Explicit release list; absent for rolling releases.
    #[serde(default)]
    pub operatingsystemrelease: Option<Vec<String>>,
}

/// The subset of a module's `metadata.json` the report needs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub project_page: Option<String>,
    #[serde(default)]
    pub operatingsystem_support: Vec<OsSupport>,
}

/// Load metadata for every module under `root`, keyed by directory name.
///
/// Subdirectories without a parseable `metadata.json` are skipped with a
/// warning.
pub fn load(root: &Path) -> Result<BTreeMap<String, ModuleMetadata>> {
    let mut modules = BTreeMap::new();

    if !root.is_dir() {
        tracing::warn!("Module path {} is not a directory", root.display());
        return Ok(modules);
    }

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let module_name = entry.file_name().to_string_lossy().to_string();
        let metadata_path = path.join("metadata.json");

        let json = match fs::read_to_string(&metadata_path) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(
                    "Skipping module '{}': cannot read {}: {}",
                    module_name,
                    metadata_path.display(),
                    e
                );
                continue;
            }
        };

        match serde_json::from_str::<ModuleMetadata>(&json) {
            Ok(metadata) => {
                modules.insert(module_name, metadata);
            }
            Err(e) => {
                tracing::warn!(
                    "Skipping module '{}': malformed {}: {}",
                    module_name,
                    metadata_path.display(),
                    e
                );
            }
        }
    }

    Ok(modules)
}

/// Derive the set of OS keys a module declares support for.
///
/// Explicit release lists expand to one key per release. A rolling release
/// with no release list contributes its bare name. A versioned OS with no
/// release list is a declaration gap and contributes nothing.
pub fn supported_os_keys(metadata: &ModuleMetadata) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();

    for support in &metadata.operatingsystem_support {
        match &support.operatingsystemrelease {
            Some(releases) => {
                for release in releases {
                    keys.insert(format!("{}-{}", support.operatingsystem, release));
                }
            }
            None if is_rolling_release(&support.operatingsystem) => {
                keys.insert(support.operatingsystem.clone());
            }
            None => {}
        }
    }

    keys
}
