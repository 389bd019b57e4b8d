//! YAML marshalling through serde_yaml.
//!
//! Values go through `serde_yaml::Value` on the way out so null mapping
//! entries can be dropped; an absent section then leaves no key behind. The
//! tree is then written by [`emit`]: string scalars double-quoted, sequence
//! items indented under their key. Unknown keys are ignored on the way in, so
//! hand-added fields are tolerated and disappear on the next save.

mod emit;


use crate::error::{ConfigError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::path::Path;

/// Serialize a value to YAML text, omitting null-valued mapping entries.
pub fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut tree = serde_yaml::to_value(value).map_err(ConfigError::Serialize)?;
    prune_nulls(&mut tree);
    Ok(emit::document(&tree))
}

/// Write an untyped document as-is. Null entries are kept.
pub fn document_to_yaml(document: &Value) -> String {
    emit::document(document)
}

/// Marshal `value` into the file at `path`, replacing its contents.
pub fn write_value<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let yaml = to_yaml(value)?;
    crate::fs::atomic_write(path, yaml.as_bytes())
}

/// Write an untyped document into the file at `path` without pruning nulls.
pub fn write_document(path: &Path, document: &Value) -> Result<()> {
    crate::fs::atomic_write(path, document_to_yaml(document).as_bytes())
}

/// Read the file at `path` into a value.
pub fn read_value<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::io("read config file", path, e))?;

    from_yaml(&content).map_err(|source| ConfigError::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse YAML text. An empty document parses as an empty mapping.
pub fn from_yaml<T: DeserializeOwned>(yaml: &str) -> std::result::Result<T, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return serde_yaml::from_value(Value::Mapping(Default::default()));
    }
    serde_yaml::from_str(yaml)
}

fn prune_nulls(value: &mut Value) {
    match value {
        Value::Mapping(mapping) => {
            let entries = std::mem::take(mapping);
            for (key, mut entry) in entries {
                if entry.is_null() {
                    continue;
                }
                prune_nulls(&mut entry);
                mapping.insert(key, entry);
            }
        }
        Value::Sequence(items) => items.iter_mut().for_each(prune_nulls),
        Value::Tagged(tagged) => prune_nulls(&mut tagged.value),
        _ => {}
    }
}
