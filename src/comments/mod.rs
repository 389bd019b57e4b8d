//! Comment map: logical field path to ordered comment lines.
//!
//! The map is rebuilt from the live config tree on every save. Only fields
//! declaring at least one comment line get an entry; absent sections
//! contribute nothing below themselves.


use crate::error::{ConfigError, Result};
use crate::schema::{ConfigNode, walk};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Mapping from logical path (`a.b.c`) to the comment lines emitted above it.
///
/// An empty comment line renders as a blank line rather than a `#` line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl CommentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the comment map for a config tree.
    ///
    /// Fails with [`ConfigError::DuplicateField`] when two sibling fields
    /// resolve to the same logical name, since their comments could not be
    /// routed unambiguously.
    pub fn build(root: &dyn ConfigNode) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut map = Self::new();

        for field in walk(root) {
            if !seen.insert(field.path.clone()) {
                return Err(ConfigError::DuplicateField { path: field.path });
            }
            if field.spec.has_comments() {
                map.insert(
                    field.path,
                    field.spec.comments.iter().map(|c| c.to_string()),
                );
            }
        }

        Ok(map)
    }

    pub fn insert<I, S>(&mut self, path: impl Into<String>, comments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(path.into(), comments.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(path, comments)| (path.as_str(), comments.as_slice()))
    }
}

impl<P, I, S> FromIterator<(P, I)> for CommentMap
where
    P: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (P, I)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (path, comments) in iter {
            map.insert(path, comments);
        }
        map
    }
}
