//! Error taxonomy for the install pipeline.
//!
//! Every variant is fatal: the pipeline is a single linear sequence of
//! fallible steps and aborts on the first failure. Callers that need to
//! distinguish kinds (CLI exit messages, tests) match on this enum instead
//! of downcasting anyhow.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    /// The descriptor carries no variant for the requested platform.
    /// Raised before any network activity.
    #[error("no release variant for platform '{platform}'")]
    UnsupportedPlatform { platform: String },

    /// Transport-level failure while fetching the archive (DNS, connect,
    /// timeout, aborted transfer).
    #[error("download of {url} failed: {source}")]
    Download {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },

    /// Archive content hash differs from the descriptor's pinned value.
    #[error("checksum mismatch for {path}: expected {expected}, got {actual}")]
    Integrity {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    /// An executable named by the descriptor is absent from the archive.
    #[error("executable '{name}' not found in archive")]
    MissingExecutable { name: String },

    /// The archive could not be read as a gzip-compressed tarball.
    #[error("invalid archive {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem failure while staging or placing executables.
    #[error("install I/O error: {0}")]
    Io(#[from] std::io::Error),
}
