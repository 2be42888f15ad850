//! Working tree status
//!
//! - `file_change`: how a working file differs from the index
//! - `inspector`: compares the working directory against the index

pub mod file_change;
pub mod inspector;
