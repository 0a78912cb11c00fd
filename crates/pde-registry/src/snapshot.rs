//! Index snapshots stored as TOML.
//!
//! A snapshot lists the bundles a registry knows about, grouped by origin,
//! in enumeration order. Versions stay raw strings until
//! [`IndexSnapshot::build`], which is where malformed versions surface.
//!
//! # Example TOML
//!
//! ```toml
//! [index]
//! shadow = "keep-all"
//!
//! [[workspace]]
//! name = "org.junit"
//! version = "4.3.2"
//!
//! [[target]]
//! name = "org.junit"
//! version = "3.8.2"
//! requires = [
//!     { name = "org.hamcrest.core", version = "1.1.0", match = "compatible", reexport = true },
//! ]
//! ```

use std::path::Path;

use pde_version::{MatchRule, Version};
use serde::{Deserialize, Serialize};

use crate::candidate::{BundleCandidate, BundleIdentity, BundleRequirement, Origin};
use crate::error::{Error, Result};
use crate::index::{BundleCandidateIndex, IndexBuilder, ShadowPolicy};

/// A complete snapshot file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IndexSnapshot {
    #[serde(default)]
    pub index: IndexSettings,
    /// Workspace bundles, in enumeration order.
    #[serde(default)]
    pub workspace: Vec<BundleEntry>,
    /// Target-platform bundles, in enumeration order.
    #[serde(default)]
    pub target: Vec<BundleEntry>,
}

/// `[index]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IndexSettings {
    #[serde(default)]
    pub shadow: ShadowPolicy,
}

/// One bundle of a snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BundleEntry {
    pub name: String,
    /// Defaults to `0.0.0` when omitted.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub requires: Vec<RequirementEntry>,
}

fn default_enabled() -> bool {
    true
}

/// One required bundle of a snapshot entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RequirementEntry {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    /// Match rule name or legacy code, `none` when omitted.
    #[serde(default, rename = "match")]
    pub rule: Option<String>,
    #[serde(default)]
    pub reexport: bool,
    #[serde(default)]
    pub optional: bool,
}

impl IndexSnapshot {
    /// Parse a snapshot from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a snapshot file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::SnapshotNotFound(path.to_path_buf()));
        }
        tracing::debug!(?path, "Loading index snapshot");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Build the candidate index this snapshot describes.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidVersion`] for an unparseable bundle or requirement
    ///   version, naming the bundle that declares it
    /// - [`Error::Version`] for an unknown match rule
    /// - [`Error::InvalidName`] for empty or blank names
    pub fn build(&self) -> Result<BundleCandidateIndex> {
        let mut builder = IndexBuilder::new(self.index.shadow);
        let groups = [
            (Origin::Workspace, &self.workspace),
            (Origin::Target, &self.target),
        ];
        for (origin, entries) in groups {
            for entry in entries {
                builder.add(entry.to_candidate(origin)?)?;
            }
        }
        Ok(builder.build())
    }
}

impl BundleEntry {
    fn to_candidate(&self, origin: Origin) -> Result<BundleCandidate> {
        let version = match &self.version {
            Some(raw) => parse_version(&self.name, raw)?,
            None => Version::ZERO,
        };

        let mut candidate = BundleCandidate::new(BundleIdentity::new(&self.name, version), origin);
        for requirement in &self.requires {
            candidate = candidate.with_requirement(requirement.to_requirement(&self.name)?);
        }
        if !self.enabled {
            candidate = candidate.disabled();
        }
        Ok(candidate)
    }
}

impl RequirementEntry {
    fn to_requirement(&self, bundle: &str) -> Result<BundleRequirement> {
        crate::index::validate_name(&self.name)?;
        let version = self
            .version
            .as_deref()
            .map(|raw| parse_version(bundle, raw))
            .transpose()?;
        let rule = match self.rule.as_deref() {
            Some(raw) => raw.parse::<MatchRule>()?,
            None => MatchRule::None,
        };

        Ok(BundleRequirement {
            name: self.name.clone(),
            version,
            rule,
            reexport: self.reexport,
            optional: self.optional,
        })
    }
}

fn parse_version(bundle: &str, raw: &str) -> Result<Version> {
    Version::parse(raw).map_err(|source| Error::InvalidVersion {
        bundle: bundle.to_string(),
        source,
    })
}
