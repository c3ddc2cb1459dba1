//! Module extraction from host catalogs.
//!
//! A catalog lists every resource applied to a host. Only `Class` resources
//! identify modules: the segment of the class title before the first `::` is
//! the module name. `main` and `settings` are artifacts of catalog
//! compilation, not real modules, and are always dropped.

use std::collections::BTreeSet;

use crate::puppetdb::Resource;

/// Catalog-compiler pseudo-modules that never correspond to real modules.
const PSEUDO_MODULES: [&str; 2] = ["main", "settings"];

/// Extract the deduplicated set of top-level module names from one catalog.
///
/// A class `Foo::Bar::Baz` contributes only `foo`. A catalog with no `Class`
/// resources yields an empty set.
pub fn extract(resources: &[Resource]) -> BTreeSet<String> {
    resources
        .iter()
        .filter(|r| r.kind == "Class")
        .map(|r| {
            r.title
                .split("::")
                .next()
                .unwrap_or(&r.title)
                .to_lowercase()
        })
        .filter(|module| !PSEUDO_MODULES.contains(&module.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(title: &str) -> Resource {
        Resource {
            kind: "Class".to_string(),
            title: title.to_string(),
        }
    }

    fn resource(kind: &str, title: &str) -> Resource {
        Resource {
            kind: kind.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn keeps_only_class_resources() {
        let resources = vec![
            class("Apache"),
            resource("File", "/etc/apache2/apache2.conf"),
            resource("Service", "apache2"),
        ];

        let modules = extract(&resources);

        assert_eq!(modules.len(), 1);
        assert!(modules.contains("apache"));
    }

    #[test]
    fn takes_top_level_namespace_lowercased() {
        let resources = vec![class("Apache::Vhost"), class("Mysql::Server::Backup")];

        let modules = extract(&resources);

        assert_eq!(
            modules,
            BTreeSet::from(["apache".to_string(), "mysql".to_string()])
        );
    }

    #[test]
    fn deduplicates_classes_from_the_same_module() {
        let resources = vec![class("Nginx"), class("Nginx::Config"), class("Nginx::Service")];

        let modules = extract(&resources);

        assert_eq!(modules.len(), 1);
    }

    #[test]
    fn excludes_pseudo_modules_at_any_namespace_depth() {
        let resources = vec![
            class("Main"),
            class("Settings"),
            class("Settings::Config"),
            class("Apache::Vhost"),
            class("Mysql::Server"),
        ];

        let modules = extract(&resources);

        assert_eq!(
            modules,
            BTreeSet::from(["apache".to_string(), "mysql".to_string()])
        );
    }

    #[test]
    fn empty_catalog_yields_empty_set() {
        assert!(extract(&[]).is_empty());

        let no_classes = vec![resource("File", "/tmp/foo")];
        assert!(extract(&no_classes).is_empty());
    }

    #[test]
    fn order_independent_and_idempotent() {
        let forward = vec![class("Apache"), class("Mysql"), class("Postgresql::Server")];
        let reversed: Vec<_> = forward.iter().rev().cloned().collect();

        assert_eq!(extract(&forward), extract(&reversed));
        assert_eq!(extract(&forward), extract(&forward));
    }
}
