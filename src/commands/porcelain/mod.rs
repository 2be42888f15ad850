//! Porcelain commands (user-facing operations)
//!
//! Each command is an `impl Repository` block. Mutating commands hold the
//! repository lock for their whole run.
//!
//! ## Commands
//!
//! - `init`: create the metadata directory
//! - `add`: stage files into the index
//! - `commit`: append a commit to the current branch
//! - `branch`: list or create branches
//! - `checkout`: switch HEAD to another branch
//! - `merge`: record another branch as merged into the current one
//! - `rebase`: replay a branch onto another, with continue/abort/status
//! - `status`: compare the working directory against the index
//! - `diff`: list unstaged and staged changes by file
//! - `log`: show first-parent history from HEAD

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod merge;
pub mod rebase;
pub mod status;
