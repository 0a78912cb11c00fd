//! [`TestIndex`] builder for resolver test scenarios.

use pde_registry::{
    BundleCandidate, BundleCandidateIndex, BundleIdentity, BundleRequirement, IndexBuilder,
    Origin, ShadowPolicy,
};

/// Terse builder for indexes whose versions are known to be valid.
///
/// # Example
///
/// ```rust
/// use pde_test_utils::index::TestIndex;
///
/// let index = TestIndex::new()
///     .target("org.junit", "3.8.2")
///     .workspace("org.junit", "4.3.2")
///     .build();
/// assert_eq!(index.all_candidates("org.junit").len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TestIndex {
    policy: ShadowPolicy,
    candidates: Vec<BundleCandidate>,
}

impl TestIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use [`ShadowPolicy::KeepAll`] instead of the default policy.
    pub fn keep_all(mut self) -> Self {
        self.policy = ShadowPolicy::KeepAll;
        self
    }

    pub fn workspace(self, name: &str, version: &str) -> Self {
        self.bundle(name, version, Origin::Workspace, &[])
    }

    pub fn target(self, name: &str, version: &str) -> Self {
        self.bundle(name, version, Origin::Target, &[])
    }

    /// Add a bundle with requirements on any version of the given names.
    ///
    /// Names prefixed with `+` are re-exported, names prefixed with `?` are
    /// optional.
    pub fn bundle(mut self, name: &str, version: &str, origin: Origin, requires: &[&str]) -> Self {
        let identity = BundleIdentity::parse(name, version)
            .unwrap_or_else(|e| panic!("TestIndex: invalid version for {name}: {e}"));
        let mut candidate = BundleCandidate::new(identity, origin);
        for raw in requires {
            let requirement = if let Some(name) = raw.strip_prefix('+') {
                BundleRequirement::new(name).reexported()
            } else if let Some(name) = raw.strip_prefix('?') {
                BundleRequirement::new(name).optional()
            } else {
                BundleRequirement::new(*raw)
            };
            candidate = candidate.with_requirement(requirement);
        }
        self.candidates.push(candidate);
        self
    }

    /// Add a prepared candidate as-is.
    pub fn candidate(mut self, candidate: BundleCandidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    pub fn build(self) -> BundleCandidateIndex {
        let mut builder = IndexBuilder::new(self.policy);
        for candidate in self.candidates {
            builder
                .add(candidate)
                .unwrap_or_else(|e| panic!("TestIndex: rejected candidate: {e}"));
        }
        builder.build()
    }
}

/// Shorthand for `BundleIdentity::parse(name, version).unwrap()`.
pub fn identity(name: &str, version: &str) -> BundleIdentity {
    BundleIdentity::parse(name, version)
        .unwrap_or_else(|e| panic!("identity: invalid version for {name}: {e}"))
}
