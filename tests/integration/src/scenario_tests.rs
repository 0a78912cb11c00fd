//! End-to-end lookup scenarios
//!
//! Each test writes an index snapshot to disk, loads it the way a registry
//! owner would, and queries it through the resolver.

use pde_registry::{BundleResolver, IndexSnapshot, Origin};
use pde_test_utils::index::identity;
use pde_test_utils::snapshot::SnapshotDir;
use pde_version::{MatchRule, Version, VersionRange};

fn load(content: &str) -> pde_registry::BundleCandidateIndex {
    let _ = pde_registry::logging::init();
    let dir = SnapshotDir::new();
    let path = dir.write("index.toml", content);
    IndexSnapshot::from_path(&path).unwrap().build().unwrap()
}

fn v(s: &str) -> Version {
    s.parse().unwrap()
}

#[test]
fn test_jdt_debug_lookups() {
    let index = load(
        r#"
[[target]]
name = "org.eclipse.jdt.debug"
version = "3.6.0"
"#,
    );
    let resolver = BundleResolver::new(&index);

    let found = resolver.find_first(
        "org.eclipse.jdt.debug",
        Some(&v("3.0.0")),
        MatchRule::GreaterOrEqual,
        None,
    );
    assert_eq!(found, Some(&identity("org.eclipse.jdt.debug", "3.6.0")));

    let found = resolver.find_first(
        "org.eclipse.jdt.debug",
        Some(&v("3.0.0")),
        MatchRule::Perfect,
        None,
    );
    assert!(found.is_none());
}

#[test]
fn test_pde_core_compatible() {
    let index = load(
        r#"
[[target]]
name = "org.eclipse.pde.core"
version = "2.6.0"
"#,
    );
    let resolver = BundleResolver::new(&index);

    let found = resolver.find_first(
        "org.eclipse.pde.core",
        Some(&v("2.6.0")),
        MatchRule::Compatible,
        None,
    );
    assert_eq!(found, Some(&identity("org.eclipse.pde.core", "2.6.0")));

    let found = resolver.find_first(
        "org.eclipse.pde.core",
        Some(&v("3.0.0")),
        MatchRule::Compatible,
        None,
    );
    assert!(found.is_none());
}

#[test]
fn test_junit_workspace_shadows_target() {
    let index = load(
        r#"
[[workspace]]
name = "org.junit"
version = "4.3.2"

[[target]]
name = "org.junit"
version = "3.8.2"
"#,
    );
    let resolver = BundleResolver::new(&index);
    let range: VersionRange = "[3.8.2,4.8.2]".parse().unwrap();

    let found = resolver.find_all("org.junit", Some(&range), None);
    assert_eq!(found, vec![&identity("org.junit", "4.3.2")]);
}

#[test]
fn test_junit_keep_all_lists_both() {
    let index = load(
        r#"
[index]
shadow = "keep-all"

[[workspace]]
name = "org.junit"
version = "4.3.2"

[[target]]
name = "org.junit"
version = "3.8.2"
"#,
    );
    let resolver = BundleResolver::new(&index);
    let range: VersionRange = "[3.8.2,4.8.2]".parse().unwrap();

    let found = resolver.find_all("org.junit", Some(&range), None);
    assert_eq!(
        found,
        vec![
            &identity("org.junit", "4.3.2"),
            &identity("org.junit", "3.8.2")
        ]
    );
}

#[test]
fn test_required_closure_follows_reexports() {
    let index = load(
        r#"
[[workspace]]
name = "com.example.app"
version = "1.0.0"
requires = [
    { name = "org.eclipse.ui", version = "3.5", match = "compatible" },
    { name = "org.eclipse.help", optional = true },
]

[[target]]
name = "org.eclipse.ui"
version = "3.6.0.v20100505"
requires = [
    { name = "org.eclipse.core.runtime", version = "3.6.0", match = "greaterOrEqual", reexport = true },
    { name = "org.eclipse.swt", reexport = true },
    { name = "org.eclipse.ui.images" },
]

[[target]]
name = "org.eclipse.core.runtime"
version = "3.6.0"
requires = [{ name = "org.eclipse.osgi", reexport = true }]

[[target]]
name = "org.eclipse.osgi"
version = "3.6.0"

[[target]]
name = "org.eclipse.ui.images"
version = "1.0.0"
"#,
    );
    let resolver = BundleResolver::new(&index);

    let closure = resolver
        .required_closure(&identity("com.example.app", "1.0.0"))
        .unwrap();
    let names: Vec<&str> = closure.identities().map(|id| id.name()).collect();
    assert_eq!(
        names,
        vec!["org.eclipse.ui", "org.eclipse.core.runtime", "org.eclipse.osgi"]
    );
    assert!(closure.resolved.iter().all(|r| r.origin == Origin::Target));

    let missing: Vec<&str> = closure.missing.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(missing, vec!["org.eclipse.swt"]);
    assert!(!closure.is_complete());
}
