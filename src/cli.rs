//! Command line arguments for the application

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// text file to open at startup
    pub path: Option<PathBuf>,

    /// read startup defaults from this JSON file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// log debug output (RUST_LOG overrides this)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
