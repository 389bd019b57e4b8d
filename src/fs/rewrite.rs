//! Comment splicing.
//!
//! The marshalled file is renamed to a temporary sibling
//! (`app.yml` -> `app_before_comments.yml`) and streamed line by line back
//! into the original path, with each line's comment block written first.
//! The reader and the writer therefore never share a file.
//!
//! A crash between the rename and the final delete can leave the temporary
//! sibling behind. It is removed at the start of the next rewrite.

use crate::error::{ConfigError, Result};
use crate::resolve::LineMetadata;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

const TEMP_SUFFIX: &str = "_before_comments";

/// Temporary sibling used while rewriting `path`.
pub fn temp_sibling(path: &Path) -> Result<PathBuf> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ConfigError::InvalidPath {
            path: path.to_path_buf(),
        })?;

    let temp_name = match filename.rfind('.') {
        Some(dot) => format!("{}{TEMP_SUFFIX}{}", &filename[..dot], &filename[dot..]),
        None => format!("{filename}{TEMP_SUFFIX}"),
    };
    Ok(path.with_file_name(temp_name))
}

/// Rewrites `path` with the comment blocks in `metadata` spliced in.
///
/// Non-empty comment lines are written as `<indent># <text>`; empty ones
/// become bare blank lines. Temp-file failures are reported as
/// [`ConfigError::TempFile`].
pub fn rewrite_with_comments(path: &Path, metadata: &LineMetadata) -> Result<()> {
    let temp_path = temp_sibling(path)?;

    if temp_path.exists() && fs::remove_file(&temp_path).is_err() {
        return Err(ConfigError::temp_file(
            &temp_path,
            "could not delete a stale temporary file before adding comments",
        ));
    }

    if fs::rename(path, &temp_path).is_err() {
        return Err(ConfigError::temp_file(
            path,
            "could not rename the config file to its temporary name before adding comments",
        ));
    }

    splice(&temp_path, path, metadata)?;

    if fs::remove_file(&temp_path).is_err() {
        return Err(ConfigError::temp_file(
            &temp_path,
            "could not delete the temporary file after adding comments",
        ));
    }

    debug!(path = %path.display(), annotated_lines = metadata.len(), "rewrote config with comments");
    Ok(())
}

fn splice(source: &Path, target: &Path, metadata: &LineMetadata) -> Result<()> {
    let input = File::open(source).map_err(|e| ConfigError::io("open", source, e))?;
    let output = File::create(target).map_err(|e| ConfigError::io("create", target, e))?;

    let reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);
    let write_err = |e: std::io::Error| ConfigError::io("write", target, e);

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ConfigError::io("read", source, e))?;

        if let Some(block) = metadata.get(&(index + 1)) {
            trace!(line = index + 1, indent = block.indent, "emitting comment block");
            let indent = " ".repeat(block.indent);
            for comment in &block.comments {
                if comment.is_empty() {
                    writeln!(writer).map_err(write_err)?;
                } else {
                    writeln!(writer, "{indent}# {comment}").map_err(write_err)?;
                }
            }
        }

        writeln!(writer, "{line}").map_err(write_err)?;
    }

    let output = writer
        .into_inner()
        .map_err(|e| ConfigError::io("flush", target, e.into_error()))?;
    output
        .sync_all()
        .map_err(|e| ConfigError::io("sync", target, e))
}
