//! `commented-config paths`.

use crate::cli::PathsArgs;
use anyhow::Result;
use commented_config::scan_file;
use std::io::Write;

pub fn cmd_paths(args: PathsArgs, out: &mut impl Write) -> Result<()> {
    let keys = scan_file(&args.file)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &keys)?;
        writeln!(out)?;
        return Ok(());
    }

    for key in &keys {
        writeln!(out, "{}\t{}:{}", key.path, key.line, key.column)?;
    }
    Ok(())
}
