//! Logical field paths over a configuration tree.

use super::{Child, ConfigNode, FieldRef, FieldSpec, join_path};
use std::vec::IntoIter;

/// One field reached by [`walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    /// Dot-joined logical names from the root, e.g. `server.tls.cert`.
    pub path: String,
    pub spec: FieldSpec,
}

/// Lazy depth-first iterator over every field of a configuration tree.
///
/// A field is yielded before its descendants. Absent sections yield their own
/// field but nothing below it. Flattened fields yield nothing themselves; their
/// children appear at the parent's prefix.
pub struct FieldPaths<'a> {
    stack: Vec<(String, IntoIter<FieldRef<'a>>)>,
}

/// Walks `root`, whose own logical path is the empty prefix.
pub fn walk(root: &dyn ConfigNode) -> FieldPaths<'_> {
    FieldPaths {
        stack: vec![(String::new(), root.fields().into_iter())],
    }
}

impl Iterator for FieldPaths<'_> {
    type Item = FieldPath;

    fn next(&mut self) -> Option<FieldPath> {
        loop {
            let (prefix, fields) = self.stack.last_mut()?;
            let Some(field) = fields.next() else {
                self.stack.pop();
                continue;
            };

            match field.child {
                Child::Flatten(node) => {
                    let prefix = prefix.clone();
                    self.stack.push((prefix, node.fields().into_iter()));
                }
                Child::Leaf | Child::Section(None) => {
                    return Some(FieldPath {
                        path: join_path(prefix, field.spec.logical_name()),
                        spec: field.spec,
                    });
                }
                Child::Section(Some(node)) => {
                    let path = join_path(prefix, field.spec.logical_name());
                    self.stack.push((path.clone(), node.fields().into_iter()));
                    return Some(FieldPath {
                        path,
                        spec: field.spec,
                    });
                }
            }
        }
    }
}
