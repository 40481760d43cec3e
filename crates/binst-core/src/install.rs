//! The install pipeline: resolve variant, fetch, verify, extract.
//!
//! A single linear sequence of fallible steps. Each step aborts the whole
//! operation on failure; nothing is retried and no partial state is kept
//! (the staging directory is dropped with the tempdir).

use crate::archive;
use crate::checksum;
use crate::descriptor::ReleaseDescriptor;
use crate::error::InstallError;
use crate::fetch::{self, FetchOptions};
use crate::platform::Platform;
use std::path::{Path, PathBuf};

/// Outcome of a successful install.
#[derive(Debug)]
pub struct InstallReport {
    pub name: String,
    pub version: String,
    /// Paths written into the binary directory, in descriptor order.
    pub installed: Vec<PathBuf>,
    /// Verified SHA-256 of the fetched archive.
    pub archive_sha256: String,
}

/// Runs the fetch/verify/extract pipeline for one release descriptor.
#[derive(Debug, Default)]
pub struct Installer {
    fetch: FetchOptions,
}

impl Installer {
    pub fn new(fetch: FetchOptions) -> Self {
        Self { fetch }
    }

    /// Install `descriptor` for `platform`, placing its executables into
    /// `bin_dir`.
    ///
    /// Step order matters: the variant is resolved first, so an unsupported
    /// platform fails before any network request is made.
    pub fn install(
        &self,
        descriptor: &ReleaseDescriptor,
        platform: Platform,
        bin_dir: &Path,
    ) -> Result<InstallReport, InstallError> {
        let variant = descriptor.resolve(platform)?;
        tracing::info!(
            name = %descriptor.name,
            version = %descriptor.version,
            %platform,
            url = %variant.url,
            "installing release"
        );

        let staging = tempfile::tempdir()?;
        let archive_name = archive_file_name(&variant.url);
        let archive_path = staging.path().join(archive_name);

        let bytes = fetch::download_to(&variant.url, &archive_path, &self.fetch)?;
        tracing::debug!(bytes, path = %archive_path.display(), "archive staged");

        checksum::verify_sha256(&archive_path, &variant.sha256)?;

        let installed =
            archive::extract_executables(&archive_path, &descriptor.executables, bin_dir)?;
        tracing::info!(
            count = installed.len(),
            bin_dir = %bin_dir.display(),
            "install complete"
        );

        Ok(InstallReport {
            name: descriptor.name.clone(),
            version: descriptor.version.clone(),
            installed,
            archive_sha256: variant.sha256.clone(),
        })
    }
}

/// Last path segment of the variant URL, used to name the staged archive.
fn archive_file_name(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path()
                .split('/')
                .filter(|s| !s.is_empty())
                .last()
                .map(str::to_owned)
        })
        .unwrap_or_else(|| "archive.tar.gz".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Variant;
    use std::collections::BTreeMap;

    fn descriptor_with_platforms(platforms: BTreeMap<Platform, Variant>) -> ReleaseDescriptor {
        ReleaseDescriptor {
            name: "sy".to_string(),
            version: "4.0.0".to_string(),
            homepage: "https://example.com".to_string(),
            executables: vec!["sy".to_string()],
            platforms,
        }
    }

    #[test]
    fn unsupported_platform_fails_without_network() {
        // The variant URL points at a port nothing listens on; if the
        // pipeline attempted a request the error kind would be Download.
        let mut platforms = BTreeMap::new();
        platforms.insert(
            Platform::Linux,
            Variant {
                url: "http://127.0.0.1:1/4.0.0/sy.tar.gz".to_string(),
                sha256: "0".repeat(64),
            },
        );
        let descriptor = descriptor_with_platforms(platforms);
        let bin_dir = tempfile::tempdir().unwrap();

        let err = Installer::default()
            .install(&descriptor, Platform::Mac, bin_dir.path())
            .unwrap_err();
        match err {
            InstallError::UnsupportedPlatform { platform } => assert_eq!(platform, "mac"),
            other => panic!("expected UnsupportedPlatform, got {other:?}"),
        }
    }

    #[test]
    fn archive_file_name_from_url() {
        assert_eq!(
            archive_file_name(
                "https://example.com/cli/releases/download/4.0.0/sy-cli-Linux-x86_64.tar.gz"
            ),
            "sy-cli-Linux-x86_64.tar.gz"
        );
        assert_eq!(archive_file_name("https://example.com/"), "archive.tar.gz");
        assert_eq!(archive_file_name("garbage"), "archive.tar.gz");
    }
}
