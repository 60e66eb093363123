use std::path::PathBuf;

use clap::Parser;

/// Derive an accessible accent color family from a single hex seed.
#[derive(Parser, Debug)]
#[command(name = "crisp-accent", version, about)]
pub struct Args {
    /// Seed color as 6 hex digits, with or without a leading '#'
    pub hex: String,

    /// Label stored in the token record
    #[arg(short, long)]
    pub name: Option<String>,

    /// Emit tokens even when a contrast check fails
    #[arg(long)]
    pub force: bool,

    /// Directory the artifacts are written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Print the artifacts to stdout instead of writing files
    #[arg(long, conflicts_with = "out_dir")]
    pub stdout: bool,

    /// Print a colored terminal preview of the tokens
    #[arg(long)]
    pub preview: bool,

    /// Give up darkening the hover variant after this many steps
    #[arg(long, default_value_t = 20)]
    pub max_repair_steps: usize,

    /// Log every derivation and repair step
    #[arg(short, long)]
    pub verbose: bool,
}
