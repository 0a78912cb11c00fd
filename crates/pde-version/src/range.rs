//! Version ranges.
//!
//! Ranges use the interval notation of bundle manifests:
//!
//! - `[1.0.0,2.0.0)` includes `1.0.0`, excludes `2.0.0`
//! - `(1.0.0,2.0.0]` excludes `1.0.0`, includes `2.0.0`
//! - `1.0.0` (a bare version) means "at least `1.0.0`"
//! - `(,2.0.0)` and `[1.0.0,)` leave one side unbounded
//! - `*` matches every version

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::version::Version;

/// One end of a [`VersionRange`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Bound {
    Inclusive(Version),
    Exclusive(Version),
    Unbounded,
}

impl Bound {
    fn version(&self) -> Option<&Version> {
        match self {
            Bound::Inclusive(v) | Bound::Exclusive(v) => Some(v),
            Bound::Unbounded => None,
        }
    }
}

/// An interval of versions, possibly unbounded at either end.
///
/// When both bounds are finite, the lower bound never exceeds the upper one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionRange {
    lower: Bound,
    upper: Bound,
}

impl VersionRange {
    /// Build a range from explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when both bounds are finite and the
    /// lower one is greater than the upper one.
    pub fn new(lower: Bound, upper: Bound) -> Result<Self> {
        if let (Some(lo), Some(hi)) = (lower.version(), upper.version()) {
            if lo > hi {
                return Err(Error::invalid_range(
                    &format!("{lo},{hi}"),
                    format!("lower bound {lo} is greater than upper bound {hi}"),
                ));
            }
        }
        Ok(Self { lower, upper })
    }

    /// The range containing every version.
    pub fn any() -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }

    /// Versions greater than or equal to `minimum`.
    pub fn at_least(minimum: Version) -> Self {
        Self {
            lower: Bound::Inclusive(minimum),
            upper: Bound::Unbounded,
        }
    }

    /// Versions less than or equal to `maximum`.
    pub fn at_most(maximum: Version) -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Inclusive(maximum),
        }
    }

    /// The closed interval `[lower, upper]`.
    pub fn between(lower: Version, upper: Version) -> Result<Self> {
        Self::new(Bound::Inclusive(lower), Bound::Inclusive(upper))
    }

    pub fn lower(&self) -> &Bound {
        &self.lower
    }

    pub fn upper(&self) -> &Bound {
        &self.upper
    }

    /// Parse a range string, see the module docs for the syntax.
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim();
        if s.is_empty() {
            return Err(Error::invalid_range(input, "empty range"));
        }
        if s == "*" {
            return Ok(Self::any());
        }

        let first = s.chars().next().unwrap_or_default();
        if first != '[' && first != '(' {
            // Bare version: minimum inclusive, unbounded above.
            return Ok(Self::at_least(Version::parse(s)?));
        }

        let last = s.chars().next_back().unwrap_or_default();
        if last != ']' && last != ')' {
            return Err(Error::invalid_range(
                input,
                "interval must end with ']' or ')'",
            ));
        }

        let body = &s[1..s.len() - 1];
        let Some((lo, hi)) = body.split_once(',') else {
            return Err(Error::invalid_range(
                input,
                "interval must contain a ',' separating its bounds",
            ));
        };

        let lower = parse_bound(lo, first == '[')?;
        let upper = parse_bound(hi, last == ']')?;
        Self::new(lower, upper).map_err(|e| match e {
            Error::InvalidRange { reason, .. } => Error::invalid_range(input, reason),
            other => other,
        })
    }

    /// Whether `candidate` lies within this range.
    pub fn contains(&self, candidate: &Version) -> bool {
        let above_lower = match &self.lower {
            Bound::Inclusive(v) => candidate >= v,
            Bound::Exclusive(v) => candidate > v,
            Bound::Unbounded => true,
        };
        let below_upper = match &self.upper {
            Bound::Inclusive(v) => candidate <= v,
            Bound::Exclusive(v) => candidate < v,
            Bound::Unbounded => true,
        };
        above_lower && below_upper
    }
}

fn parse_bound(raw: &str, inclusive: bool) -> Result<Bound> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Bound::Unbounded);
    }
    let version = Version::parse(raw)?;
    Ok(if inclusive {
        Bound::Inclusive(version)
    } else {
        Bound::Exclusive(version)
    })
}

/// Test whether `candidate` falls within `range`.
///
/// An absent bound is unbounded on that side.
pub fn is_included(candidate: &Version, range: &VersionRange) -> bool {
    range.contains(candidate)
}

impl From<Version> for VersionRange {
    fn from(minimum: Version) -> Self {
        Self::at_least(minimum)
    }
}

impl FromStr for VersionRange {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        VersionRange::parse(s)
    }
}

impl TryFrom<String> for VersionRange {
    type Error = Error;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        VersionRange::parse(&value)
    }
}

impl From<VersionRange> for String {
    fn from(range: VersionRange) -> Self {
        range.to_string()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.lower, &self.upper) {
            (Bound::Unbounded, Bound::Unbounded) => return f.write_str("*"),
            (Bound::Inclusive(v), Bound::Unbounded) => return write!(f, "{v}"),
            _ => {}
        }
        match &self.lower {
            Bound::Inclusive(v) => write!(f, "[{v}")?,
            Bound::Exclusive(v) => write!(f, "({v}")?,
            Bound::Unbounded => f.write_str("(")?,
        }
        f.write_str(",")?;
        match &self.upper {
            Bound::Inclusive(v) => write!(f, "{v}]"),
            Bound::Exclusive(v) => write!(f, "{v})"),
            Bound::Unbounded => f.write_str(")"),
        }
    }
}
