//! Bundle candidate index and resolver.
//!
//! This crate holds a point-in-time snapshot of every known bundle, grouped
//! by symbolic name with workspace bundles ahead of target-platform bundles,
//! and answers lookups against it:
//!
//! - [`BundleCandidateIndex`] stores the candidates, built with
//!   [`IndexBuilder`] or loaded from a TOML [`IndexSnapshot`]
//! - [`BundleResolver`] runs `find_first` / `find_all` queries and computes
//!   the [`RequiredClosure`] of a bundle
//!
//! ```
//! use pde_registry::{BundleCandidate, BundleCandidateIndex, BundleIdentity, BundleResolver};
//! use pde_version::{MatchRule, Version};
//!
//! let mut builder = BundleCandidateIndex::builder();
//! builder
//!     .add(BundleCandidate::target(BundleIdentity::parse("org.eclipse.jdt.debug", "3.6.0").unwrap()))
//!     .unwrap();
//! let index = builder.build();
//!
//! let resolver = BundleResolver::new(&index);
//! let requested = Version::new(3, 0, 0);
//! let found = resolver
//!     .find_first("org.eclipse.jdt.debug", Some(&requested), MatchRule::GreaterOrEqual, None)
//!     .unwrap();
//! assert_eq!(found.version(), &Version::new(3, 6, 0));
//! ```

pub mod candidate;
pub mod closure;
pub mod error;
pub mod index;
pub mod logging;
pub mod resolver;
pub mod snapshot;

pub use candidate::{BundleCandidate, BundleIdentity, BundleRequirement, Origin};
pub use closure::{RequiredClosure, ResolvedRequirement};
pub use error::{Error, Result};
pub use index::{BundleCandidateIndex, IndexBuilder, ShadowPolicy};
pub use resolver::{BundleFilter, BundleResolver};
pub use snapshot::IndexSnapshot;
