//! Commented YAML configuration files for typed config structs.
//!
//! A config type declares, per field, the comment lines that belong above its
//! key and an optional literal applied when the file is first created. On
//! every save the value is marshalled to YAML, the marshalled file is scanned
//! for key positions, and each comment block is spliced in at the key's
//! indentation.
//!
//! ```no_run
//! use commented_config::{ConfigHandler, FieldSpec, config_node};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default, Serialize, Deserialize)]
//! #[serde(default)]
//! struct App {
//!     port: u16,
//! }
//!
//! config_node! {
//!     App {
//!         port: leaf(FieldSpec::new("port").comments(&["Port to listen on"]).on_creation("8080")),
//!     }
//! }
//!
//! let handler = ConfigHandler::<App>::new("app.yml");
//! let app = handler.load()?;
//! handler.save(&app)?;
//! # Ok::<(), commented_config::ConfigError>(())
//! ```

pub mod annotate;
pub mod comments;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod handler;
pub mod marshal;
pub mod resolve;
pub mod schema;

#[cfg(test)]
mod test_support;

pub use annotate::{apply_comments, write_commented};
pub use comments::CommentMap;
pub use error::{ConfigError, Result};
pub use handler::ConfigHandler;
pub use resolve::{
    KeyPosition, LineComments, LineMetadata, resolve_positions, scan_file, scan_keys,
};
pub use schema::{
    Child, ConfigNode, ConfigValues, CreationValue, FieldMut, FieldPath, FieldRef, FieldSpec,
    NestedSlot, SectionSlot, SlotMut, apply_creation_values, walk,
};
