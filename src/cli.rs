use clap::Parser;
use std::path::PathBuf;

/// Scan a Minecraft mods folder for loader conflicts, duplicate mod IDs and
/// missing dependencies.
#[derive(Debug, Parser)]
#[command(name = "modcheck", version, about)]
pub struct Cli {
    /// Path to the mods folder (auto-detected when omitted)
    pub mods_dir: Option<PathBuf>,

    /// Delete conflicting mods without asking
    #[arg(long)]
    pub yes: bool,

    /// Analyze and report only, never delete anything
    #[arg(long, conflicts_with = "yes")]
    pub report_only: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
