//! Bundle identities and the candidates stored in the index.

use std::fmt;

use pde_version::{MatchRule, Version};

/// A bundle's symbolic name and version.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BundleIdentity {
    name: String,
    version: Version,
}

impl BundleIdentity {
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    /// Build an identity from a raw version string.
    pub fn parse(name: impl Into<String>, version: &str) -> pde_version::Result<Self> {
        Ok(Self::new(name, Version::parse(version)?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }
}

/// Rendered as `name_version`, the usual bundle id form.
impl fmt::Display for BundleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.name, self.version)
    }
}

/// Where a candidate bundle comes from.
///
/// Workspace sorts before target so that sorting by origin gives lookup
/// priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Origin {
    /// An open project in the workspace.
    Workspace,
    /// A resolved binary bundle of the target platform.
    Target,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Workspace => write!(f, "workspace"),
            Origin::Target => write!(f, "target"),
        }
    }
}

/// A required bundle declared by a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRequirement {
    /// Symbolic name of the required bundle.
    pub name: String,
    /// Requested version, `None` accepts any.
    pub version: Option<Version>,
    /// How `version` is matched.
    pub rule: MatchRule,
    /// Whether the requirement is visible to bundles requiring this one.
    pub reexport: bool,
    /// Whether resolution may proceed without it.
    pub optional: bool,
}

impl BundleRequirement {
    /// A mandatory, non-reexported requirement on any version of `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            rule: MatchRule::None,
            reexport: false,
            optional: false,
        }
    }

    pub fn version(mut self, version: Version, rule: MatchRule) -> Self {
        self.version = Some(version);
        self.rule = rule;
        self
    }

    pub fn reexported(mut self) -> Self {
        self.reexport = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// One known bundle: its identity, origin and declared requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleCandidate {
    identity: BundleIdentity,
    origin: Origin,
    enabled: bool,
    requires: Vec<BundleRequirement>,
}

impl BundleCandidate {
    pub fn new(identity: BundleIdentity, origin: Origin) -> Self {
        Self {
            identity,
            origin,
            enabled: true,
            requires: Vec::new(),
        }
    }

    pub fn workspace(identity: BundleIdentity) -> Self {
        Self::new(identity, Origin::Workspace)
    }

    pub fn target(identity: BundleIdentity) -> Self {
        Self::new(identity, Origin::Target)
    }

    /// Mark the candidate as disabled; the index builder drops it.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn with_requirement(mut self, requirement: BundleRequirement) -> Self {
        self.requires.push(requirement);
        self
    }

    pub fn identity(&self) -> &BundleIdentity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    pub fn version(&self) -> &Version {
        self.identity.version()
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn requires(&self) -> &[BundleRequirement] {
        &self.requires
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_display() {
        let id = BundleIdentity::parse("org.junit", "4.3.2").unwrap();
        assert_eq!(id.to_string(), "org.junit_4.3.2");
    }

    #[test]
    fn test_identity_parse_rejects_bad_version() {
        assert!(BundleIdentity::parse("org.junit", "four").is_err());
    }

    #[test]
    fn test_workspace_sorts_first() {
        assert!(Origin::Workspace < Origin::Target);
    }

    #[test]
    fn test_requirement_builder() {
        let req = BundleRequirement::new("org.hamcrest.core")
            .version(Version::new(1, 1, 0), MatchRule::Compatible)
            .reexported();
        assert_eq!(req.version, Some(Version::new(1, 1, 0)));
        assert_eq!(req.rule, MatchRule::Compatible);
        assert!(req.reexport);
        assert!(!req.optional);
    }

    #[test]
    fn test_candidate_defaults_enabled() {
        let candidate = BundleCandidate::target(BundleIdentity::new("a", Version::ZERO));
        assert!(candidate.is_enabled());
        assert!(!candidate.disabled().is_enabled());
    }
}
