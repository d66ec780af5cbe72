//! Command-line argument definitions for the topology binaries.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control the rendering character set and
//! logging verbosity; run with no flags, each binary prints its diagram
//! exactly as the original scripts did.

use clap::Parser;

/// Command-line arguments shared by the topology diagram binaries
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Character set for borders and connectors (unicode, ascii)
    #[arg(long, default_value = "unicode")]
    pub charset: String,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
