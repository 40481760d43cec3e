//! Platform identifiers used to select a release variant.

use crate::error::InstallError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating systems that release archives are published for.
///
/// The canonical identifiers are `linux` and `mac` (matching the descriptor
/// files); `darwin` and `macos` are accepted as aliases when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Mac,
}

impl Platform {
    /// Detect the platform of the running host.
    ///
    /// Unknown host OSes surface as `UnsupportedPlatform` here, before any
    /// descriptor lookup or network request.
    pub fn current() -> Result<Self, InstallError> {
        Self::from_str(std::env::consts::OS)
    }
}

impl FromStr for Platform {
    type Err = InstallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linux" => Ok(Platform::Linux),
            "mac" | "macos" | "darwin" => Ok(Platform::Mac),
            other => Err(InstallError::UnsupportedPlatform {
                platform: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Linux => write!(f, "linux"),
            Platform::Mac => write!(f, "mac"),
        }
    }
}
