//! Object types and operations
//!
//! Everything the repository stores is an object identified by the hash of
//! its payload. There are two kinds:
//!
//! - **Blob**: file content (raw bytes)
//! - **Commit**: a full snapshot (filename to blob hash) plus metadata and
//!   the parent link
//!
//! Objects are stored without any header or compression; the stored payload
//! is exactly the bytes that were hashed.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of the shortest hash any strategy produces (64-bit djb2)
pub const MIN_OBJECT_ID_LENGTH: usize = 16;

/// Length of the longest hash accepted as an object ID
pub const MAX_OBJECT_ID_LENGTH: usize = 64;

/// Length of the abbreviated hash shown to the user
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
