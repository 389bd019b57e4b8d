//! Command implementations for commented-config.
//!
//! Each command writes its report to the given writer so the binary can hand
//! in stdout and tests can hand in a buffer.

mod annotate;
mod paths;

use crate::cli::Command;
use anyhow::Result;
use std::io::Write;

/// Route a parsed command to its implementation.
pub fn dispatch(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Annotate(args) => annotate::cmd_annotate(args, out),
        Command::Paths(args) => paths::cmd_paths(args, out),
    }
}
