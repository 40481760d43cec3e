//! CLI for the binst prebuilt-binary installer.

mod commands;

use anyhow::Result;
use binst_core::config;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};

use commands::{run_checksum, run_install, run_list, run_resolve, run_validate};

/// Top-level CLI for the binst installer.
#[derive(Debug, Parser)]
#[command(name = "binst")]
#[command(about = "binst: fetch, verify and install prebuilt release binaries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch, verify and install a tool from its release descriptor.
    Install {
        /// Tool name (descriptor `name` field).
        name: String,
        /// Install this exact version instead of the latest release.
        #[arg(long, value_name = "VERSION")]
        pin: Option<String>,
        /// Target platform (default: the running host).
        #[arg(long, value_name = "PLATFORM")]
        platform: Option<String>,
        /// Directory to place executables in (default: configured bin dir).
        #[arg(long, value_name = "DIR")]
        bin_dir: Option<PathBuf>,
    },

    /// Print the resolved download URL and checksum without fetching.
    Resolve {
        /// Tool name.
        name: String,
        /// Resolve this exact version instead of the latest release.
        #[arg(long, value_name = "VERSION")]
        pin: Option<String>,
        /// Target platform (default: the running host).
        #[arg(long, value_name = "PLATFORM")]
        platform: Option<String>,
    },

    /// List known releases, version-sorted.
    List {
        /// Restrict the listing to one tool.
        name: Option<String>,
    },

    /// Validate a descriptor file's invariants.
    Validate {
        /// Path to the descriptor TOML file.
        path: PathBuf,
    },

    /// Compute SHA-256 of a file (e.g. a downloaded archive).
    Checksum {
        /// Path to the file.
        path: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Install {
                name,
                pin,
                platform,
                bin_dir,
            } => run_install(&cfg, &name, pin.as_deref(), platform.as_deref(), bin_dir)?,
            CliCommand::Resolve {
                name,
                pin,
                platform,
            } => run_resolve(&cfg, &name, pin.as_deref(), platform.as_deref())?,
            CliCommand::List { name } => run_list(&cfg, name.as_deref())?,
            CliCommand::Validate { path } => run_validate(&path)?,
            CliCommand::Checksum { path } => run_checksum(Path::new(&path))?,
            CliCommand::Completions { shell } => {
                let mut cmd = Cli::command();
                let bin_name = cmd.get_name().to_string();
                clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
