//! CLI argument parsing for commented-config.
//!
//! Uses clap derive macros; the implementations live in `commands`.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Splice comment blocks into YAML config files.
#[derive(Parser, Debug)]
#[command(name = "commented-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log pipeline steps to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Re-marshal a YAML file and write comments above the listed keys.
    ///
    /// Comments already in the file are dropped by the reparse.
    Annotate(AnnotateArgs),

    /// List every addressable key path with its line and column.
    Paths(PathsArgs),
}

#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// YAML file to rewrite in place.
    pub file: PathBuf,

    /// YAML mapping of dotted key path to a list of comment lines.
    #[arg(short, long)]
    pub comments: PathBuf,
}

#[derive(Args, Debug)]
pub struct PathsArgs {
    /// YAML file to scan.
    pub file: PathBuf,

    /// Print JSON instead of one path per line.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
