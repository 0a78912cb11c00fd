//! Queries over a [`BundleCandidateIndex`].
//!
//! The resolver borrows an index instead of reaching for a process-wide
//! registry. Both queries walk the candidates of one symbolic name in index
//! order, so a workspace bundle always wins over a target bundle that
//! satisfies the same query, regardless of which version is newer.

use pde_version::{MatchRule, Version, VersionRange, is_included, matches};

use crate::candidate::{BundleCandidate, BundleIdentity};
use crate::index::BundleCandidateIndex;

/// Caller-supplied predicate narrowing a query. Must not have side effects.
pub type BundleFilter<'f> = &'f dyn Fn(&BundleIdentity) -> bool;

/// Read-only lookups against an index snapshot.
#[derive(Debug, Clone, Copy)]
pub struct BundleResolver<'a> {
    index: &'a BundleCandidateIndex,
}

impl<'a> BundleResolver<'a> {
    pub fn new(index: &'a BundleCandidateIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a BundleCandidateIndex {
        self.index
    }

    /// First candidate of `name` matching `requested` under `rule` and
    /// accepted by `filter`.
    pub fn find_candidate(
        &self,
        name: &str,
        requested: Option<&Version>,
        rule: MatchRule,
        filter: Option<BundleFilter<'_>>,
    ) -> Option<&'a BundleCandidate> {
        self.index.all_candidates(name).iter().find(|candidate| {
            matches(candidate.version(), requested, rule) && accepts(filter, candidate)
        })
    }

    /// Identity of the first matching candidate, `None` when nothing matches.
    pub fn find_first(
        &self,
        name: &str,
        requested: Option<&Version>,
        rule: MatchRule,
        filter: Option<BundleFilter<'_>>,
    ) -> Option<&'a BundleIdentity> {
        self.find_candidate(name, requested, rule, filter)
            .map(BundleCandidate::identity)
    }

    /// Any version of `name`.
    pub fn find(&self, name: &str) -> Option<&'a BundleIdentity> {
        self.find_first(name, None, MatchRule::None, None)
    }

    /// Every candidate of `name` within `range` and accepted by `filter`,
    /// in index order.
    pub fn find_all_candidates(
        &self,
        name: &str,
        range: Option<&VersionRange>,
        filter: Option<BundleFilter<'_>>,
    ) -> Vec<&'a BundleCandidate> {
        self.index
            .all_candidates(name)
            .iter()
            .filter(|candidate| {
                range.is_none_or(|r| is_included(candidate.version(), r))
                    && accepts(filter, candidate)
            })
            .collect()
    }

    /// Identities of every candidate of `name` within `range`.
    pub fn find_all(
        &self,
        name: &str,
        range: Option<&VersionRange>,
        filter: Option<BundleFilter<'_>>,
    ) -> Vec<&'a BundleIdentity> {
        self.find_all_candidates(name, range, filter)
            .into_iter()
            .map(BundleCandidate::identity)
            .collect()
    }
}

fn accepts(filter: Option<BundleFilter<'_>>, candidate: &BundleCandidate) -> bool {
    filter.is_none_or(|f| f(candidate.identity()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Origin;
    use crate::index::{IndexBuilder, ShadowPolicy};

    fn index() -> BundleCandidateIndex {
        let mut builder = IndexBuilder::new(ShadowPolicy::KeepAll);
        for (name, version, origin) in [
            ("org.eclipse.jdt.debug", "3.6.0", Origin::Target),
            ("org.eclipse.pde.core", "2.6.0", Origin::Target),
            ("org.junit", "3.8.2", Origin::Target),
            ("org.junit", "4.3.2", Origin::Workspace),
        ] {
            let id = BundleIdentity::parse(name, version).unwrap();
            builder.add(BundleCandidate::new(id, origin)).unwrap();
        }
        builder.build()
    }

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_find_first_greater_or_equal() {
        let index = index();
        let resolver = BundleResolver::new(&index);
        let found = resolver.find_first(
            "org.eclipse.jdt.debug",
            Some(&v("3.0.0")),
            MatchRule::GreaterOrEqual,
            None,
        );
        assert_eq!(found.map(|id| id.version().clone()), Some(v("3.6.0")));
        assert!(
            resolver
                .find_first("org.eclipse.jdt.debug", Some(&v("3.0.0")), MatchRule::Perfect, None)
                .is_none()
        );
    }

    #[test]
    fn test_find_unknown_is_none() {
        let index = index();
        let resolver = BundleResolver::new(&index);
        assert!(resolver.find("does.not.exist").is_none());
        assert!(resolver.find_all("does.not.exist", None, None).is_empty());
    }

    #[test]
    fn test_find_prefers_workspace() {
        let index = index();
        let resolver = BundleResolver::new(&index);
        let found = resolver.find("org.junit").unwrap();
        assert_eq!(found.version(), &v("4.3.2"));
    }

    #[test]
    fn test_filter_skips_to_next_candidate() {
        let index = index();
        let resolver = BundleResolver::new(&index);
        let not_four = |id: &BundleIdentity| id.version().major() != 4;
        let found = resolver
            .find_first("org.junit", None, MatchRule::None, Some(&not_four))
            .unwrap();
        assert_eq!(found.version(), &v("3.8.2"));
    }

    #[test]
    fn test_find_all_without_range_returns_everything_in_order() {
        let index = index();
        let resolver = BundleResolver::new(&index);
        let all: Vec<String> = resolver
            .find_all("org.junit", None, None)
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(all, vec!["org.junit_4.3.2", "org.junit_3.8.2"]);
    }

    #[test]
    fn test_find_all_with_range() {
        let index = index();
        let resolver = BundleResolver::new(&index);
        let range: VersionRange = "[4.0.0,5.0.0)".parse().unwrap();
        let found = resolver.find_all("org.junit", Some(&range), None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].version(), &v("4.3.2"));
    }
}
