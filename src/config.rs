//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for Hexlog.
#[derive(Debug, Clone, Parser)]
#[command(name = "hexlog", version, about, long_about = None)]
pub struct Config {
    /// Devlog entry data (JSON)
    #[arg(default_value = "devlog.json")]
    pub data: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name
    #[arg(long, default_value = "Devlog")]
    pub name: String,

    /// Site host; links to other hosts open in new tabs
    #[arg(long)]
    pub host: Option<String>,

    /// Team member data (JSON); omit to skip the team page
    #[arg(long)]
    pub team: Option<PathBuf>,

    /// Open the generated index in a browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// The data file is allowed to be missing (the fallback entry covers
    /// that), but a configured team file must exist.
    ///
    /// # Errors
    ///
    /// Returns error if the team data path does not exist.
    pub fn validate(&self) -> Result<()> {
        if let Some(team) = &self.team {
            if !team.exists() {
                bail!("Team data file does not exist: {}", team.display());
            }
        }

        Ok(())
    }
}
