//! Exit code constants for the commented-config CLI.
//!
//! - 0: Success
//! - 1: User error (bad arguments, unreadable or unwritable files)
//! - 2: Parse failure (YAML could not be marshalled or scanned)
//! - 3: Temporary file failure during the comment rewrite
//! - 4: Schema error (bad creation literal, duplicate field names)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a filesystem operation failed.
pub const USER_ERROR: i32 = 1;

/// Parse failure: YAML could not be serialized, deserialized or scanned.
pub const PARSE_FAILURE: i32 = 2;

/// A temporary file could not be created, renamed or deleted.
pub const TEMP_FILE_FAILURE: i32 = 3;

/// The config schema itself is invalid.
pub const SCHEMA_ERROR: i32 = 4;
