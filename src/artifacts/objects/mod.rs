//! Stored object types
//!
//! Every object is an opaque byte blob named by the SHA-1 digest of its bytes.
//! Two kinds share the one namespace:
//!
//! - **Blob**: a file snapshot taken at `add` time (raw file bytes)
//! - **Commit**: a commit record (`timestamp:`/`message:`/`parent:` lines)
//!
//! Objects are written raw, without a type header or compression.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of an abbreviated object ID
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
