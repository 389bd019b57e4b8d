//! Filesystem operations for config files.
//!
//! The plain marshalled YAML is written atomically; the comment pass then
//! moves that file to a temporary sibling and streams it back into place.

pub mod atomic;
pub mod rewrite;

pub use atomic::atomic_write;
pub use rewrite::{rewrite_with_comments, temp_sibling};
