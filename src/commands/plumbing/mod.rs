//! Plumbing commands (direct object store access)
//!
//! - `cat-file`: print a stored object's bytes
//! - `hash-object`: compute a file's digest and optionally store it

pub mod cat_file;
pub mod hash_object;
