//! Command-line argument definitions for the maquette CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Invoked with no arguments, the tool renders the whole
//! catalog with default settings; the flags are optional overrides.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the maquette diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Render only the named diagram instead of the whole catalog
    #[arg(long)]
    pub only: Option<String>,

    /// Directory to write the rendered images to
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Output image format (png, svg)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
