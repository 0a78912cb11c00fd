//! Match rules for version lookups.
//!
//! A match rule says how a candidate version is compared against the
//! version a caller asked for. The names follow the `match` attribute of
//! plug-in manifests (`perfect`, `equivalent`, `compatible`,
//! `greaterOrEqual`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::version::Version;

/// How a candidate version must relate to a requested version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchRule {
    /// Any version is acceptable.
    #[default]
    None,
    /// All four components are equal.
    Perfect,
    /// `major.minor.micro` are equal, the qualifier is ignored.
    Equivalent,
    /// Same major, `(minor, micro)` at least the requested ones.
    Compatible,
    /// The candidate is at least the requested version.
    #[serde(alias = "greaterOrEqual")]
    GreaterOrEqual,
    /// Never matches.
    ///
    /// Historically accepted but never implemented by lookups; kept so
    /// manifests using it parse, and preserved as always-false.
    Prefix,
}

impl MatchRule {
    /// All rules, in legacy numeric-code order.
    pub const ALL: [MatchRule; 6] = [
        MatchRule::None,
        MatchRule::Perfect,
        MatchRule::Equivalent,
        MatchRule::Compatible,
        MatchRule::GreaterOrEqual,
        MatchRule::Prefix,
    ];

    /// The legacy numeric code of this rule.
    pub fn code(self) -> u8 {
        match self {
            MatchRule::None => 0,
            MatchRule::Perfect => 1,
            MatchRule::Equivalent => 2,
            MatchRule::Compatible => 3,
            MatchRule::GreaterOrEqual => 4,
            MatchRule::Prefix => 5,
        }
    }

    /// Look up a rule by its legacy numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }
}

/// Compare `candidate` against `requested` under `rule`.
///
/// An absent `requested` version accepts every candidate, whatever the rule.
pub fn matches(candidate: &Version, requested: Option<&Version>, rule: MatchRule) -> bool {
    let Some(requested) = requested else {
        return true;
    };

    match rule {
        MatchRule::None => true,
        MatchRule::Perfect => candidate == requested,
        MatchRule::Equivalent => candidate.base() == requested.base(),
        MatchRule::Compatible => {
            candidate.major() == requested.major()
                && (candidate.minor(), candidate.micro()) >= (requested.minor(), requested.micro())
        }
        MatchRule::GreaterOrEqual => candidate >= requested,
        MatchRule::Prefix => {
            tracing::debug!(%candidate, %requested, "prefix match rule never matches");
            false
        }
    }
}

impl FromStr for MatchRule {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return MatchRule::from_code(code).ok_or_else(|| Error::UnknownMatchRule(s.to_string()));
        }
        // Case-insensitive, so the manifest's `greaterOrEqual` lowercases to
        // `greaterorequal`.
        match trimmed.to_lowercase().as_str() {
            "none" => Ok(MatchRule::None),
            "perfect" => Ok(MatchRule::Perfect),
            "equivalent" => Ok(MatchRule::Equivalent),
            "compatible" => Ok(MatchRule::Compatible),
            "greater-or-equal" | "greaterorequal" => Ok(MatchRule::GreaterOrEqual),
            "prefix" => Ok(MatchRule::Prefix),
            _ => Err(Error::UnknownMatchRule(s.to_string())),
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchRule::None => "none",
            MatchRule::Perfect => "perfect",
            MatchRule::Equivalent => "equivalent",
            MatchRule::Compatible => "compatible",
            MatchRule::GreaterOrEqual => "greater-or-equal",
            MatchRule::Prefix => "prefix",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_absent_requested_accepts_everything() {
        for rule in MatchRule::ALL {
            assert!(matches(&v("1.2.3"), None, rule), "rule {rule}");
        }
    }

    #[test]
    fn test_none_ignores_requested() {
        assert!(matches(&v("1.0.0"), Some(&v("9.9.9")), MatchRule::None));
    }

    #[test]
    fn test_perfect_includes_qualifier() {
        assert!(matches(&v("1.0.0.a"), Some(&v("1.0.0.a")), MatchRule::Perfect));
        assert!(!matches(&v("1.0.0.b"), Some(&v("1.0.0.a")), MatchRule::Perfect));
    }

    #[test]
    fn test_equivalent_ignores_qualifier() {
        assert!(matches(&v("1.0.0.b"), Some(&v("1.0.0.a")), MatchRule::Equivalent));
        assert!(!matches(&v("1.0.1"), Some(&v("1.0.0")), MatchRule::Equivalent));
    }

    #[test]
    fn test_compatible() {
        let requested = v("2.6.0");
        assert!(matches(&v("2.6.0"), Some(&requested), MatchRule::Compatible));
        assert!(matches(&v("2.7.0"), Some(&requested), MatchRule::Compatible));
        assert!(matches(&v("2.6.1"), Some(&requested), MatchRule::Compatible));
        assert!(!matches(&v("2.5.9"), Some(&requested), MatchRule::Compatible));
        assert!(!matches(&v("3.0.0"), Some(&requested), MatchRule::Compatible));
    }

    #[test]
    fn test_greater_or_equal() {
        assert!(matches(&v("3.6.0"), Some(&v("3.0.0")), MatchRule::GreaterOrEqual));
        assert!(matches(&v("3.0.0"), Some(&v("3.0.0")), MatchRule::GreaterOrEqual));
        assert!(!matches(&v("2.9.0"), Some(&v("3.0.0")), MatchRule::GreaterOrEqual));
    }

    #[test]
    fn test_prefix_never_matches() {
        assert!(!matches(&v("1.0.0"), Some(&v("1.0.0")), MatchRule::Prefix));
    }

    #[test]
    fn test_from_str_spellings() {
        assert_eq!("greaterOrEqual".parse::<MatchRule>().unwrap(), MatchRule::GreaterOrEqual);
        assert_eq!("greater-or-equal".parse::<MatchRule>().unwrap(), MatchRule::GreaterOrEqual);
        assert_eq!("PERFECT".parse::<MatchRule>().unwrap(), MatchRule::Perfect);
        assert_eq!("3".parse::<MatchRule>().unwrap(), MatchRule::Compatible);
        assert!(matches!(
            "6".parse::<MatchRule>(),
            Err(Error::UnknownMatchRule(_))
        ));
        assert!("newest".parse::<MatchRule>().is_err());
    }

    #[test]
    fn test_from_str_rejects_empty_and_stray_separators() {
        for input in ["", "  ", "per-fect", "greater_or_equal", "greater-orequal", "com_patible"] {
            assert!(
                matches!(input.parse::<MatchRule>(), Err(Error::UnknownMatchRule(_))),
                "{input:?}"
            );
        }
        assert_eq!(" None ".parse::<MatchRule>().unwrap(), MatchRule::None);
        assert_eq!("Greater-Or-Equal".parse::<MatchRule>().unwrap(), MatchRule::GreaterOrEqual);
    }

    #[test]
    fn test_codes_round_trip() {
        for rule in MatchRule::ALL {
            assert_eq!(MatchRule::from_code(rule.code()), Some(rule));
        }
    }
}
