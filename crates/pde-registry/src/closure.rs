//! Required-bundle closure.
//!
//! A bundle sees its direct requirements plus, transitively, whatever those
//! requirements re-export. A requirement that is not re-exported stops the
//! walk at that bundle: its own requirements are private to it.
//!
//! ```text
//! app ──requires──▶ ui ──reexports──▶ runtime ──requires──▶ osgi
//!                    │
//!                    └──requires──▶ images   (private to ui)
//!
//! closure(app) = [ui, runtime]
//! ```

use std::collections::HashSet;

use crate::candidate::{BundleCandidate, BundleIdentity, BundleRequirement, Origin};
use crate::error::{Error, Result};
use crate::resolver::BundleResolver;

/// A requirement that resolved to a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequirement {
    pub identity: BundleIdentity,
    pub origin: Origin,
    /// Visible to bundles that require the root (a direct, re-exported
    /// requirement of the root).
    pub exported: bool,
}

/// Result of [`BundleResolver::required_closure`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredClosure {
    /// Resolved bundles in depth-first discovery order, each listed once.
    pub resolved: Vec<ResolvedRequirement>,
    /// Mandatory requirements nothing in the index satisfies.
    pub missing: Vec<BundleRequirement>,
}

impl RequiredClosure {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn identities(&self) -> impl Iterator<Item = &BundleIdentity> {
        self.resolved.iter().map(|r| &r.identity)
    }
}

impl BundleResolver<'_> {
    /// Compute the bundles visible to `root` through its requirements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBundle`] when `root` is not in the index.
    pub fn required_closure(&self, root: &BundleIdentity) -> Result<RequiredClosure> {
        let candidate = self
            .index()
            .all_candidates(root.name())
            .iter()
            .find(|c| c.identity() == root)
            .ok_or_else(|| Error::UnknownBundle(root.to_string()))?;

        let mut walk = Walk {
            resolver: *self,
            visited: HashSet::from([root.clone()]),
            closure: RequiredClosure::default(),
        };
        walk.visit(candidate, true);

        tracing::debug!(
            root = %root,
            resolved = walk.closure.resolved.len(),
            missing = walk.closure.missing.len(),
            "Computed required closure"
        );
        Ok(walk.closure)
    }
}

struct Walk<'a> {
    resolver: BundleResolver<'a>,
    visited: HashSet<BundleIdentity>,
    closure: RequiredClosure,
}

impl<'a> Walk<'a> {
    fn visit(&mut self, bundle: &'a BundleCandidate, direct: bool) {
        for requirement in bundle.requires() {
            // Below the root only re-exported requirements are visible.
            if !direct && !requirement.reexport {
                continue;
            }

            let Some(found) = self.resolver.find_candidate(
                &requirement.name,
                requirement.version.as_ref(),
                requirement.rule,
                None,
            ) else {
                if requirement.optional {
                    tracing::debug!(
                        from = %bundle.identity(),
                        requirement = %requirement.name,
                        "Optional requirement not resolved"
                    );
                } else {
                    tracing::warn!(
                        from = %bundle.identity(),
                        requirement = %requirement.name,
                        "Required bundle not found"
                    );
                    self.closure.missing.push(requirement.clone());
                }
                continue;
            };

            let exported = direct && requirement.reexport;
            if !self.visited.insert(found.identity().clone()) {
                // Reached earlier through a private path; the root's own
                // re-export still makes it visible.
                if exported {
                    self.mark_exported(found.identity());
                }
                continue;
            }
            self.closure.resolved.push(ResolvedRequirement {
                identity: found.identity().clone(),
                origin: found.origin(),
                exported,
            });
            self.visit(found, false);
        }
    }

    fn mark_exported(&mut self, identity: &BundleIdentity) {
        if let Some(resolved) = self
            .closure
            .resolved
            .iter_mut()
            .find(|r| &r.identity == identity)
        {
            resolved.exported = true;
        }
    }
}
