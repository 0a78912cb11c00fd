//! Four-part bundle versions.
//!
//! A bundle version has the form `major[.minor[.micro[.qualifier]]]`.
//! Missing numeric components default to `0` and a missing qualifier is the
//! empty string, so `"3.6"` and `"3.6.0"` denote the same version.
//!
//! Versions order lexicographically over `(major, minor, micro, qualifier)`
//! with the qualifier compared as a plain string. Unlike semver pre-release
//! tags, a qualifier therefore sorts *after* the bare version:
//! `1.0.0 < 1.0.0.v20240101`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A parsed bundle version.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    // Field order defines the derived ordering.
    major: u32,
    minor: u32,
    micro: u32,
    qualifier: String,
}

impl Version {
    /// The `0.0.0` version, used when a bundle declares no version.
    pub const ZERO: Version = Version {
        major: 0,
        minor: 0,
        micro: 0,
        qualifier: String::new(),
    };

    /// Create a version without a qualifier.
    pub fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: String::new(),
        }
    }

    /// Create a version with a qualifier.
    ///
    /// Fails with [`Error::MalformedVersion`] when the qualifier contains
    /// characters other than ASCII alphanumerics, `_` and `-`.
    pub fn with_qualifier(
        major: u32,
        minor: u32,
        micro: u32,
        qualifier: impl Into<String>,
    ) -> Result<Self> {
        let qualifier = qualifier.into();
        validate_qualifier(&qualifier, &qualifier)?;
        Ok(Self {
            major,
            minor,
            micro,
            qualifier,
        })
    }

    /// Parse a version string.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedVersion`] for empty input, empty or
    /// non-numeric components, numbers that overflow `u32`, or qualifiers
    /// with invalid characters.
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim();
        if s.is_empty() {
            return Err(Error::malformed(input, "empty version"));
        }

        // The qualifier is everything after the third dot, so a dotted
        // qualifier is caught by the character check below.
        let mut parts = s.splitn(4, '.');
        let major = parse_component(input, parts.next(), "major")?;
        let minor = parse_component(input, parts.next(), "minor")?;
        let micro = parse_component(input, parts.next(), "micro")?;
        let qualifier = match parts.next() {
            Some(q) => {
                if q.is_empty() {
                    return Err(Error::malformed(input, "empty qualifier"));
                }
                validate_qualifier(input, q)?;
                q.to_string()
            }
            None => String::new(),
        };

        Ok(Self {
            major,
            minor,
            micro,
            qualifier,
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn micro(&self) -> u32 {
        self.micro
    }

    /// The qualifier, empty when absent.
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// The numeric `(major, minor, micro)` triple, qualifier dropped.
    pub fn base(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.micro)
    }
}

fn parse_component(input: &str, part: Option<&str>, name: &str) -> Result<u32> {
    let Some(part) = part else {
        return Ok(0);
    };
    if part.is_empty() {
        return Err(Error::malformed(input, format!("empty {name} component")));
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed(
            input,
            format!("{name} component '{part}' is not a non-negative integer"),
        ));
    }
    part.parse::<u32>()
        .map_err(|e| Error::malformed(input, format!("{name} component '{part}': {e}")))
}

fn validate_qualifier(input: &str, qualifier: &str) -> Result<()> {
    match qualifier
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        Some(c) => Err(Error::malformed(
            input,
            format!("invalid character '{c}' in qualifier"),
        )),
        None => Ok(()),
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = Error;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Version::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if !self.qualifier.is_empty() {
            write!(f, ".{}", self.qualifier)?;
        }
        Ok(())
    }
}
