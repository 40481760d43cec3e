//! Descriptor directory scanning and release ordering.
//!
//! A store is a flat directory of `*.toml` descriptor files, one per
//! release. Release history is monotonically increasing: a new release
//! supersedes the previous one but older descriptors stay available for
//! version pinning.

use super::ReleaseDescriptor;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// All descriptors found in one directory.
#[derive(Debug)]
pub struct DescriptorStore {
    dir: PathBuf,
    descriptors: Vec<ReleaseDescriptor>,
}

impl DescriptorStore {
    /// Scan `dir` for `*.toml` files and parse each as a descriptor.
    /// A single malformed file fails the whole scan so broken descriptors
    /// cannot be silently skipped over.
    pub fn open(dir: &Path) -> Result<Self> {
        let mut descriptors = Vec::new();
        let entries =
            fs::read_dir(dir).with_context(|| format!("read descriptor dir {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            descriptors.push(ReleaseDescriptor::from_path(&path)?);
        }
        tracing::debug!(
            dir = %dir.display(),
            count = descriptors.len(),
            "scanned descriptor store"
        );
        Ok(Self {
            dir: dir.to_path_buf(),
            descriptors,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of all tools with at least one descriptor, sorted and deduplicated.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.descriptors.iter().map(|d| d.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// All releases of `name`, sorted by version ascending.
    pub fn releases(&self, name: &str) -> Vec<&ReleaseDescriptor> {
        let mut releases: Vec<&ReleaseDescriptor> = self
            .descriptors
            .iter()
            .filter(|d| d.name == name)
            .collect();
        releases.sort_by_key(|d| d.semver());
        releases
    }

    /// The highest-versioned release of `name`, if any.
    pub fn latest(&self, name: &str) -> Option<&ReleaseDescriptor> {
        self.releases(name).into_iter().last()
    }

    /// The release of `name` pinned to an exact version.
    pub fn find(&self, name: &str, version: &str) -> Option<&ReleaseDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.name == name && d.version == version)
    }
}
