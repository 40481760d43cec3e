//! Extraction of named executables from a gzip-compressed tarball.
//!
//! Release archives place their executables at the archive root (or under a
//! single leading directory), so entries are matched by final path
//! component. Everything else in the archive is ignored.

use crate::error::InstallError;
use flate2::read::GzDecoder;
use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tar::Archive;

/// Extract each executable in `names` from the tarball at `archive_path`
/// into `dest_dir`, returning the written paths in the order of `names`.
///
/// Extracted files get mode 0755 on unix. Any requested name missing from
/// the archive fails the whole extraction with
/// [`InstallError::MissingExecutable`].
pub fn extract_executables(
    archive_path: &Path,
    names: &[String],
    dest_dir: &Path,
) -> Result<Vec<PathBuf>, InstallError> {
    std::fs::create_dir_all(dest_dir)?;

    let file = File::open(archive_path)?;
    let decoder = GzDecoder::new(file);
    let mut archive = Archive::new(decoder);

    let wanted: BTreeSet<&str> = names.iter().map(String::as_str).collect();
    let mut found: BTreeSet<String> = BTreeSet::new();

    let entries = archive.entries().map_err(|source| InstallError::Archive {
        path: archive_path.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let mut entry = entry.map_err(|source| InstallError::Archive {
            path: archive_path.to_path_buf(),
            source,
        })?;
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let entry_path = entry.path().map_err(|source| InstallError::Archive {
            path: archive_path.to_path_buf(),
            source,
        })?;
        let Some(file_name) = entry_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned)
        else {
            continue;
        };
        if !wanted.contains(file_name.as_str()) {
            continue;
        }

        let dest = dest_dir.join(&file_name);
        let mut out = File::create(&dest)?;
        io::copy(&mut entry, &mut out)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&dest)?.permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&dest, perms)?;
        }
        tracing::debug!(name = %file_name, dest = %dest.display(), "extracted executable");
        found.insert(file_name);
    }

    if let Some(missing) = names.iter().find(|n| !found.contains(n.as_str())) {
        return Err(InstallError::MissingExecutable {
            name: missing.clone(),
        });
    }
    Ok(names.iter().map(|n| dest_dir.join(n)).collect())
}


#[cfg(test)]
mod tests {
    use super::test_support::write_tar_gz;
    use super::*;

    #[test]
    fn extracts_named_executables() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("sy-cli.tar.gz");
        write_tar_gz(
            &archive,
            &[
                ("sy", b"#!/bin/sh\necho sy\n" as &[u8]),
                ("syv", b"#!/bin/sh\necho syv\n"),
                ("LICENSE", b"license text"),
            ],
        );

        let bin_dir = dir.path().join("bin");
        let names = vec!["sy".to_string(), "syv".to_string()];
        let installed = extract_executables(&archive, &names, &bin_dir).unwrap();

        assert_eq!(installed.len(), 2);
        assert!(bin_dir.join("sy").exists());
        assert!(bin_dir.join("syv").exists());
        assert!(!bin_dir.join("LICENSE").exists());
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(bin_dir.join("sy")).unwrap().permissions().mode();
            assert_eq!(mode & 0o111, 0o111, "executable bit must be set");
        }
    }

    #[test]
    fn matches_entries_under_leading_directory() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("release.tar.gz");
        write_tar_gz(&archive, &[("sy-cli-4.0.0/sy", b"binary" as &[u8])]);

        let bin_dir = dir.path().join("bin");
        let installed =
            extract_executables(&archive, &["sy".to_string()], &bin_dir).unwrap();
        assert_eq!(installed, vec![bin_dir.join("sy")]);
        assert_eq!(std::fs::read(bin_dir.join("sy")).unwrap(), b"binary");
    }

    #[test]
    fn missing_executable_fails() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("release.tar.gz");
        write_tar_gz(&archive, &[("sy", b"binary" as &[u8])]);

        let bin_dir = dir.path().join("bin");
        let names = vec!["sy".to_string(), "sye".to_string()];
        let err = extract_executables(&archive, &names, &bin_dir).unwrap_err();
        match err {
            InstallError::MissingExecutable { name } => assert_eq!(name, "sye"),
            other => panic!("expected MissingExecutable, got {other:?}"),
        }
    }

    #[test]
    fn garbage_archive_fails() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("bogus.tar.gz");
        std::fs::write(&archive, b"this is not a tarball").unwrap();

        let bin_dir = dir.path().join("bin");
        let err = extract_executables(&archive, &["sy".to_string()], &bin_dir).unwrap_err();
        match err {
            InstallError::Archive { .. } => {}
            other => panic!("expected Archive, got {other:?}"),
        }
    }
}
