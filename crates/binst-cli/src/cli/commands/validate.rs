//! `binst validate` – check one descriptor file's invariants.

use anyhow::Result;
use binst_core::ReleaseDescriptor;
use std::path::Path;

pub fn run_validate(path: &Path) -> Result<()> {
    let descriptor = ReleaseDescriptor::from_path(path)?;
    println!(
        "ok: {} {} ({} platform{}, {} executable{})",
        descriptor.name,
        descriptor.version,
        descriptor.platforms.len(),
        if descriptor.platforms.len() == 1 { "" } else { "s" },
        descriptor.executables.len(),
        if descriptor.executables.len() == 1 { "" } else { "s" },
    );
    Ok(())
}
