//! Candidate index keyed by symbolic name.
//!
//! The index is an immutable snapshot. Whoever owns the workspace and the
//! target platform rebuilds it on change; queries never mutate it, so a
//! built index can be shared across threads freely.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::candidate::{BundleCandidate, Origin};
use crate::error::{Error, Result};

/// What happens to target-platform candidates whose name also exists in the
/// workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShadowPolicy {
    /// Workspace candidates hide target candidates of the same name.
    #[default]
    WorkspaceShadowsTarget,
    /// Keep both groups, workspace first.
    KeepAll,
}

/// Point-in-time mapping from symbolic name to candidate bundles.
///
/// For every name, workspace candidates come first in the order they were
/// added, followed by target candidates in the order they were added.
/// Candidates are never re-sorted by version.
#[derive(Debug, Clone, Default)]
pub struct BundleCandidateIndex {
    entries: HashMap<String, Vec<BundleCandidate>>,
    policy: ShadowPolicy,
}

impl BundleCandidateIndex {
    /// Start building an index with the default [`ShadowPolicy`].
    pub fn builder() -> IndexBuilder {
        IndexBuilder::new(ShadowPolicy::default())
    }

    /// All candidates for `name`, empty when the name is unknown.
    pub fn all_candidates(&self, name: &str) -> &[BundleCandidate] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// The candidate a plain lookup by name would pick.
    pub fn active(&self, name: &str) -> Option<&BundleCandidate> {
        self.all_candidates(name).first()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All known symbolic names (sorted).
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn policy(&self) -> ShadowPolicy {
        self.policy
    }

    /// Number of distinct symbolic names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default)]
struct Groups {
    workspace: Vec<BundleCandidate>,
    target: Vec<BundleCandidate>,
}

/// Accumulates candidates in registry enumeration order.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    policy: ShadowPolicy,
    groups: HashMap<String, Groups>,
    dropped: usize,
}

impl IndexBuilder {
    pub fn new(policy: ShadowPolicy) -> Self {
        Self {
            policy,
            groups: HashMap::new(),
            dropped: 0,
        }
    }

    pub fn policy(&mut self, policy: ShadowPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Add a candidate.
    ///
    /// Disabled candidates are accepted, logged and left out of the index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] when the symbolic name is empty or
    /// contains whitespace.
    pub fn add(&mut self, candidate: BundleCandidate) -> Result<&mut Self> {
        validate_name(candidate.name())?;

        if !candidate.is_enabled() {
            tracing::warn!(bundle = %candidate.identity(), "Dropping disabled bundle");
            self.dropped += 1;
            return Ok(self);
        }

        let groups = self.groups.entry(candidate.name().to_string()).or_default();
        match candidate.origin() {
            Origin::Workspace => groups.workspace.push(candidate),
            Origin::Target => groups.target.push(candidate),
        }
        Ok(self)
    }

    /// Freeze the accumulated candidates into an index.
    pub fn build(self) -> BundleCandidateIndex {
        let mut entries = HashMap::with_capacity(self.groups.len());
        let mut shadowed = 0usize;

        for (name, groups) in self.groups {
            let Groups {
                mut workspace,
                target,
            } = groups;
            if self.policy == ShadowPolicy::WorkspaceShadowsTarget && !workspace.is_empty() {
                shadowed += target.len();
            } else {
                workspace.extend(target);
            }
            entries.insert(name, workspace);
        }

        tracing::debug!(
            names = entries.len(),
            dropped = self.dropped,
            shadowed,
            policy = ?self.policy,
            "Built bundle candidate index"
        );

        BundleCandidateIndex {
            entries,
            policy: self.policy,
        }
    }
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: "symbolic name must not be empty".to_string(),
        });
    }
    if name.chars().any(char::is_whitespace) {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: "symbolic name must not contain whitespace".to_string(),
        });
    }
    Ok(())
}
