//! Comment pass over a marshalled YAML file.

use crate::comments::CommentMap;
use crate::error::Result;
use crate::fs::rewrite_with_comments;
use crate::marshal;
use crate::resolve::resolve_positions;
use serde::Serialize;
use std::path::Path;

/// Splices `comments` into the YAML file at `path`.
///
/// The file must hold plain marshalled YAML: comments already present are
/// kept as ordinary lines and would be duplicated. Returns the number of
/// lines that received a comment block.
pub fn apply_comments(path: &Path, comments: &CommentMap) -> Result<usize> {
    let metadata = resolve_positions(path, comments)?;
    rewrite_with_comments(path, &metadata)?;
    Ok(metadata.len())
}

/// Marshals `value` into `path`, then splices `comments` into the result.
pub fn write_commented<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    comments: &CommentMap,
) -> Result<usize> {
    marshal::write_value(path, value)?;
    apply_comments(path, comments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;
    use tempfile::TempDir;

    #[test]
    fn test_write_commented_untyped_value() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.yml");
        let value: Value = serde_yaml::from_str("name: demo\nserver:\n  port: 80\n").unwrap();
        let comments: CommentMap = [("server.port", vec!["Port to bind"])].into_iter().collect();

        let annotated = write_commented(&path, &value, &comments).unwrap();

        assert_eq!(annotated, 1);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "name: \"demo\"\nserver:\n  # Port to bind\n  port: 80\n"
        );
    }

    #[test]
    fn test_apply_comments_without_matches_leaves_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.yml");
        std::fs::write(&path, "a: 1\n").unwrap();

        let annotated = apply_comments(&path, &CommentMap::new()).unwrap();

        assert_eq!(annotated, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a: 1\n");
    }
}
