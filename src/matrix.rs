//! Usage/support matrix construction.
//!
//! Pure combination of the usage table and module metadata into the final
//! grid. Rows are OS keys in sorted order, columns are the sorted union of
//! every module seen in use anywhere in the fleet.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::metadata::{supported_os_keys, ModuleMetadata};
use crate::usage::UsageTable;

/// Classification of one (OS key, module) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    /// Used on that OS and declared as supported for it.
    Used,
    /// Used on that OS but not declared as supported for it.
    Incomplete,
    /// Not applied on any host running that OS.
    NotUsed,
}

impl fmt::Display for CellStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CellStatus::Used => "used",
            CellStatus::Incomplete => "incomplete",
            CellStatus::NotUsed => "not used",
        };
        f.write_str(s)
    }
}

/// The finished report grid: one header row plus one row per OS key.
#[derive(Debug)]
pub struct Matrix {
    /// Leading `OS` label column followed by one label per module.
    pub headers: Vec<String>,
    /// Each row starts with the OS key, then one status string per module.
    pub rows: Vec<Vec<String>>,
}

/// Classify one cell.
fn classify(os_key: &str, module: &str, usage: &BTreeSet<String>, supported: &BTreeSet<String>) -> CellStatus {
    if !usage.contains(module) {
        CellStatus::NotUsed
    } else if supported.contains(os_key) {
        CellStatus::Used
    } else {
        CellStatus::Incomplete
    }
}

/// Column label for one module, falling back to the usage-table name when no
/// metadata was loaded for it.
fn module_label(module: &str, metadata: Option<&ModuleMetadata>) -> String {
    let Some(metadata) = metadata else {
        tracing::warn!("No metadata for module '{}'; labelling it by its catalog name", module);
        return module.to_string();
    };

    let name = metadata.name.as_deref().unwrap_or(module);
    match &metadata.project_page {
        Some(url) => format!("[{}]({})", name, url),
        None => name.to_string(),
    }
}

/// Build the matrix from the usage table and the loaded module metadata.
pub fn build(usage: &UsageTable, metadata: &BTreeMap<String, ModuleMetadata>) -> Matrix {
    let all_modules: BTreeSet<&str> = usage
        .values()
        .flat_map(|modules| modules.iter().map(String::as_str))
        .collect();

    let mut headers = vec!["OS".to_string()];
    headers.extend(
        all_modules
            .iter()
            .map(|module| module_label(module, metadata.get(*module))),
    );

    let support_sets: BTreeMap<&str, BTreeSet<String>> = all_modules
        .iter()
        .filter_map(|module| metadata.get(*module).map(|m| (*module, supported_os_keys(m))))
        .collect();
    let no_support = BTreeSet::new();

    let rows = usage
        .iter()
        .map(|(os_key, used_modules)| {
            let mut row = vec![os_key.clone()];
            row.extend(all_modules.iter().map(|module| {
                let supported = support_sets.get(module).unwrap_or(&no_support);
                classify(os_key, module, used_modules, supported).to_string()
            }));
            row
        })
        .collect();

    Matrix { headers, rows }
}
