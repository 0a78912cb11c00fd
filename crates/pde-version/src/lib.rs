//! Bundle version primitives.
//!
//! This crate provides the four-part bundle [`Version`], the
//! [`VersionRange`] interval type and the [`MatchRule`] enumeration, together
//! with the two matching operations every bundle lookup is built on:
//!
//! - [`matches`] compares a candidate against a requested version under a rule
//! - [`is_included`] tests a candidate against a range
//!
//! ```
//! use pde_version::{MatchRule, Version, VersionRange, is_included, matches};
//!
//! let candidate: Version = "3.6.0".parse().unwrap();
//! let requested: Version = "3.0.0".parse().unwrap();
//! assert!(matches(&candidate, Some(&requested), MatchRule::GreaterOrEqual));
//! assert!(!matches(&candidate, Some(&requested), MatchRule::Perfect));
//!
//! let range: VersionRange = "[1.0.0,2.0.0)".parse().unwrap();
//! assert!(!is_included(&"2.0.0".parse().unwrap(), &range));
//! ```

pub mod error;
pub mod range;
pub mod rule;
pub mod version;

pub use error::{Error, Result};
pub use range::{Bound, VersionRange, is_included};
pub use rule::{MatchRule, matches};
pub use version::Version;
