//! OS key derivation from raw fact values.
//!
//! Every host gets one stable identity string for its operating-system
//! release. Versioned distributions key as `"{os}-{major}"`; rolling
//! releases have no meaningful major version and key by name alone.

use std::collections::BTreeMap;

use crate::error::{MatrixError, Result};
use crate::puppetdb::Fact;

/// Fact carrying the operating-system name.
pub const OS_FACT: &str = "operatingsystem";

/// Fact carrying the operating-system major release.
pub const VERSION_FACT: &str = "operatingsystemmajrelease";

/// Distributions without discrete releases, keyed by name alone.
const ROLLING_RELEASES: [&str; 2] = ["Archlinux", "Gentoo"];

/// Whether an operatingsystem value names a rolling-release distribution.
pub fn is_rolling_release(os: &str) -> bool {
    ROLLING_RELEASES.contains(&os)
}

/// Combine OS-name and major-version facts into one `certname -> OS key` map.
///
/// A missing version fact is an error for versioned distributions; rolling
/// releases never consult the version collection.
pub fn resolve(os_facts: &[Fact], version_facts: &[Fact]) -> Result<BTreeMap<String, String>> {
    let versions: BTreeMap<&str, &str> = version_facts
        .iter()
        .map(|f| (f.certname.as_str(), f.value.as_str()))
        .collect();

    let mut keys = BTreeMap::new();
    for fact in os_facts {
        let key = if is_rolling_release(&fact.value) {
            fact.value.clone()
        } else {
            let version = versions.get(fact.certname.as_str()).ok_or_else(|| {
                MatrixError::MissingVersionFact {
                    certname: fact.certname.clone(),
                    os: fact.value.clone(),
                    version_fact: VERSION_FACT.to_string(),
                }
            })?;
            format!("{}-{}", fact.value, version)
        };
        keys.insert(fact.certname.clone(), key);
    }

    Ok(keys)
}
