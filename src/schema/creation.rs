//! Creation-time defaults.
//!
//! When a config file does not exist yet, every field carrying an
//! `on_creation` literal is overwritten with that literal parsed into the
//! field's type. Sections are visited after their own literal (if any) has
//! been applied, and absent sections stop the recursion.

use super::{ConfigNode, SlotMut, join_path};
use crate::error::{ConfigError, Result};
use tracing::trace;

/// Applies creation-time literals across the whole tree rooted at `root`.
pub fn apply_creation_values(root: &mut dyn ConfigNode) -> Result<()> {
    apply_at(root, "")
}

fn apply_at(node: &mut dyn ConfigNode, prefix: &str) -> Result<()> {
    for field in node.fields_mut() {
        let path = join_path(prefix, field.spec.logical_name());

        match field.slot {
            SlotMut::Leaf(value) => {
                if let Some(literal) = field.spec.on_creation {
                    assign(&path, literal, |l| value.assign_literal(l))?;
                }
            }
            SlotMut::Section(slot) => {
                if let Some(literal) = field.spec.on_creation {
                    assign(&path, literal, |l| slot.assign_literal(l))?;
                }
                if let Some(child) = slot.node_mut() {
                    apply_at(child, &path)?;
                }
            }
            SlotMut::Nested(slot) => {
                if let Some(literal) = field.spec.on_creation {
                    assign(&path, literal, |l| slot.assign_literal(l))?;
                }
                apply_at(slot.node_mut(), &path)?;
            }
            SlotMut::Flatten(slot) => {
                if let Some(literal) = field.spec.on_creation {
                    assign(&path, literal, |l| slot.assign_literal(l))?;
                }
                apply_at(slot.node_mut(), prefix)?;
            }
        }
    }

    Ok(())
}

fn assign(
    path: &str,
    literal: &str,
    set: impl FnOnce(&str) -> std::result::Result<(), serde_yaml::Error>,
) -> Result<()> {
    trace!(field = path, literal, "applying creation value");
    set(literal).map_err(|source| ConfigError::CreationValue {
        field: path.to_string(),
        literal: literal.to_string(),
        source,
    })
}
