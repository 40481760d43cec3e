use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/binst/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinstConfig {
    /// Directory holding release descriptor files (one TOML per release).
    /// When absent, the XDG data dir `binst/descriptors` is used.
    #[serde(default)]
    pub descriptor_dir: Option<PathBuf>,
    /// Directory installed executables are copied into.
    /// When absent, `~/.local/bin` is used.
    #[serde(default)]
    pub bin_dir: Option<PathBuf>,
    /// TCP connect timeout for archive downloads, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout for archive downloads, in seconds.
    pub transfer_timeout_secs: u64,
}

impl Default for BinstConfig {
    fn default() -> Self {
        Self {
            descriptor_dir: None,
            bin_dir: None,
            connect_timeout_secs: 30,
            transfer_timeout_secs: 600,
        }
    }
}

impl BinstConfig {
    /// Effective descriptor directory, applying the XDG default.
    pub fn descriptor_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.descriptor_dir {
            return Ok(dir.clone());
        }
        let xdg_dirs = xdg::BaseDirectories::with_prefix("binst")?;
        Ok(xdg_dirs.get_data_home().join("descriptors"))
    }

    /// Effective binary directory, applying the `~/.local/bin` default.
    pub fn bin_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.bin_dir {
            return Ok(dir.clone());
        }
        let home = std::env::var_os("HOME")
            .ok_or_else(|| anyhow::anyhow!("HOME is not set and no bin_dir configured"))?;
        Ok(PathBuf::from(home).join(".local").join("bin"))
    }

    pub fn fetch_options(&self) -> crate::fetch::FetchOptions {
        crate::fetch::FetchOptions {
            connect_timeout: std::time::Duration::from_secs(self.connect_timeout_secs),
            transfer_timeout: std::time::Duration::from_secs(self.transfer_timeout_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("binst")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BinstConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BinstConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: BinstConfig = toml::from_str(&data)?;
    Ok(cfg)
}
