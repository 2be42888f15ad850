//! Command implementations
//!
//! - `plumbing`: low-level object store commands (cat-file, hash-object)
//! - `porcelain`: user-facing workflows (add, commit, branch, merge, rebase, ...)

pub mod plumbing;
pub mod porcelain;
