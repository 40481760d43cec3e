//! Release descriptors: declarative records describing how to fetch and
//! install one version of prebuilt software.
//!
//! A descriptor pins a version, a homepage, per-platform (URL, sha256)
//! variants, and the ordered list of executables to place into the binary
//! directory. Descriptors are immutable once written; each new release of
//! the upstream software is a new descriptor file.

mod store;

pub use store::DescriptorStore;

use crate::error::InstallError;
use crate::platform::Platform;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One platform-specific (download URL, expected checksum) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    /// HTTP(S) URL of the release archive (gzip-compressed tarball).
    pub url: String,
    /// Expected SHA-256 of the archive, lowercase hex.
    pub sha256: String,
}

/// Declarative record for one release of one tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseDescriptor {
    /// Tool name, e.g. "sy".
    pub name: String,
    /// Release version, e.g. "4.0.0". Must appear exactly once in every
    /// variant URL.
    pub version: String,
    /// Upstream project homepage.
    pub homepage: String,
    /// Executables to copy from the archive into the binary directory.
    pub executables: Vec<String>,
    /// Per-platform variants.
    pub platforms: BTreeMap<Platform, Variant>,
}

impl ReleaseDescriptor {
    /// Parse a descriptor from a TOML file and validate its invariants.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("read descriptor {}", path.display()))?;
        let descriptor: ReleaseDescriptor = toml::from_str(&data)
            .with_context(|| format!("parse descriptor {}", path.display()))?;
        descriptor
            .validate()
            .with_context(|| format!("invalid descriptor {}", path.display()))?;
        Ok(descriptor)
    }

    /// Check the descriptor's invariants:
    /// - the version parses as semver;
    /// - every variant URL is a valid http(s) URL embedding the version
    ///   exactly once;
    /// - every checksum is 64 lowercase hex characters;
    /// - the executable list is non-empty, duplicate-free, and contains
    ///   bare file names only.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            bail!("descriptor name is empty");
        }
        semver::Version::parse(&self.version)
            .with_context(|| format!("version '{}' is not a semantic version", self.version))?;

        if self.platforms.is_empty() {
            bail!("descriptor declares no platform variants");
        }
        for (platform, variant) in &self.platforms {
            let parsed = url::Url::parse(&variant.url)
                .with_context(|| format!("variant URL for {platform} is not a URL"))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                bail!("variant URL for {platform} has scheme '{}'", parsed.scheme());
            }
            let occurrences = variant.url.matches(self.version.as_str()).count();
            if occurrences != 1 {
                bail!(
                    "variant URL for {platform} embeds version '{}' {} times, expected exactly once",
                    self.version,
                    occurrences
                );
            }
            if variant.sha256.len() != 64
                || !variant
                    .sha256
                    .bytes()
                    .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
            {
                bail!("variant checksum for {platform} is not 64 lowercase hex characters");
            }
        }

        if self.executables.is_empty() {
            bail!("descriptor installs no executables");
        }
        let mut seen = std::collections::BTreeSet::new();
        for exe in &self.executables {
            if exe.is_empty() || exe.contains('/') || exe.contains('\\') {
                bail!("executable name '{exe}' is not a bare file name");
            }
            if !seen.insert(exe.as_str()) {
                bail!("executable '{exe}' listed more than once");
            }
        }
        Ok(())
    }

    /// Parsed semver of this release.
    pub fn semver(&self) -> semver::Version {
        // validate() guarantees this parses.
        semver::Version::parse(&self.version).unwrap_or_else(|_| semver::Version::new(0, 0, 0))
    }

    /// Select the variant for `platform`, failing with
    /// [`InstallError::UnsupportedPlatform`] when the descriptor carries
    /// none. This is the first step of the install pipeline and performs no
    /// I/O.
    pub fn resolve(&self, platform: Platform) -> Result<&Variant, InstallError> {
        self.platforms
            .get(&platform)
            .ok_or_else(|| InstallError::UnsupportedPlatform {
                platform: platform.to_string(),
            })
    }
}
