//! `binst resolve` – print the resolved URL and checksum without fetching.

use anyhow::{Context, Result};
use binst_core::config::BinstConfig;
use binst_core::{DescriptorStore, Platform, ReleaseDescriptor};
use std::str::FromStr;

/// Shared lookup for `install` and `resolve`: open the descriptor store,
/// pick the release (latest or pinned), and parse the target platform.
pub fn resolve_release(
    cfg: &BinstConfig,
    name: &str,
    pin: Option<&str>,
    platform: Option<&str>,
) -> Result<(ReleaseDescriptor, Platform)> {
    let dir = cfg.descriptor_dir()?;
    let store = DescriptorStore::open(&dir)
        .with_context(|| format!("open descriptor store at {}", dir.display()))?;

    let descriptor = match pin {
        Some(version) => store
            .find(name, version)
            .cloned()
            .with_context(|| format!("no descriptor for {name} {version}"))?,
        None => store
            .latest(name)
            .cloned()
            .with_context(|| format!("no descriptor for {name}"))?,
    };

    // Parse the requested platform before anything else touches the network.
    let platform = match platform {
        Some(s) => Platform::from_str(s)?,
        None => Platform::current()?,
    };
    Ok((descriptor, platform))
}

pub fn run_resolve(
    cfg: &BinstConfig,
    name: &str,
    pin: Option<&str>,
    platform: Option<&str>,
) -> Result<()> {
    let (descriptor, platform) = resolve_release(cfg, name, pin, platform)?;
    let variant = descriptor.resolve(platform)?;
    println!("{} {} ({})", descriptor.name, descriptor.version, platform);
    println!("  url:    {}", variant.url);
    println!("  sha256: {}", variant.sha256);
    Ok(())
}
