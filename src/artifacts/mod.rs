//! Version-control data structures and algorithms
//!
//! - `branch`: branch name validation
//! - `core`: shared utilities (settings, line reader, pager wrapper)
//! - `log`: parent walks over commit history
//! - `merge`: common ancestor search
//! - `objects`: stored object types (blob, commit) and their digests
//! - `rebase`: rebase plans, paused state and the rewriting engine
//! - `status`: working tree inspection against the index

pub mod branch;
pub mod core;
pub mod log;
pub mod merge;
pub mod objects;
pub mod rebase;
pub mod status;
