//! `commented-config annotate`.

use crate::cli::AnnotateArgs;
use anyhow::{Context, Result};
use commented_config::{CommentMap, apply_comments, marshal};
use serde_yaml::Value;
use std::io::Write;
use tracing::debug;

pub fn cmd_annotate(args: AnnotateArgs, out: &mut impl Write) -> Result<()> {
    let comments: CommentMap = marshal::read_value(&args.comments)
        .with_context(|| format!("loading comment map '{}'", args.comments.display()))?;
    let document: Value = marshal::read_value(&args.file)?;
    debug!(entries = comments.len(), "loaded comment map");

    marshal::write_document(&args.file, &document)?;
    let annotated = apply_comments(&args.file, &comments)?;

    writeln!(
        out,
        "Annotated {annotated} line(s) in {}",
        args.file.display()
    )?;
    Ok(())
}
