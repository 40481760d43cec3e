//! `binst list` – show known releases, version-sorted.

use anyhow::{Context, Result};
use binst_core::config::BinstConfig;
use binst_core::DescriptorStore;

pub fn run_list(cfg: &BinstConfig, name: Option<&str>) -> Result<()> {
    let dir = cfg.descriptor_dir()?;
    let store = DescriptorStore::open(&dir)
        .with_context(|| format!("open descriptor store at {}", dir.display()))?;

    let names: Vec<String> = match name {
        Some(n) => vec![n.to_string()],
        None => store.names().iter().map(|s| s.to_string()).collect(),
    };
    if names.is_empty() {
        println!("No descriptors in {}.", dir.display());
        return Ok(());
    }

    println!("{:<12} {:<10} {:<10} {}", "NAME", "VERSION", "PLATFORMS", "EXECUTABLES");
    for n in names {
        let releases = store.releases(&n);
        if releases.is_empty() {
            println!("{:<12} (no descriptors)", n);
            continue;
        }
        for d in releases {
            let platforms: Vec<String> = d.platforms.keys().map(|p| p.to_string()).collect();
            println!(
                "{:<12} {:<10} {:<10} {}",
                d.name,
                d.version,
                platforms.join(","),
                d.executables.join(" ")
            );
        }
    }
    Ok(())
}
