//! `binst install` – run the fetch/verify/extract pipeline for one release.

use anyhow::Result;
use binst_core::config::BinstConfig;
use binst_core::Installer;
use std::path::PathBuf;

use super::resolve_release;

pub fn run_install(
    cfg: &BinstConfig,
    name: &str,
    pin: Option<&str>,
    platform: Option<&str>,
    bin_dir: Option<PathBuf>,
) -> Result<()> {
    let (descriptor, platform) = resolve_release(cfg, name, pin, platform)?;
    let bin_dir = match bin_dir {
        Some(dir) => dir,
        None => cfg.bin_dir()?,
    };

    let installer = Installer::new(cfg.fetch_options());
    let report = installer.install(&descriptor, platform, &bin_dir)?;

    println!(
        "installed {} {} ({} executable{})",
        report.name,
        report.version,
        report.installed.len(),
        if report.installed.len() == 1 { "" } else { "s" }
    );
    for path in &report.installed {
        println!("  {}", path.display());
    }
    Ok(())
}
