//! Domain errors
//!
//! Operations return `anyhow::Result` like the rest of the crate, but every
//! failure the history layer can report on purpose is raised as a
//! [`VcsError`], so callers can tell them apart with `downcast_ref`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VcsError {
    /// No object is stored under the digest (or no ref under the name).
    #[error("object {0} not found")]
    NotFound(String),

    #[error("branch '{0}' does not exist")]
    UnknownBranch(String),

    #[error("a branch named '{0}' already exists")]
    BranchExists(String),

    #[error("HEAD is detached, check out a branch first")]
    DetachedHead,

    #[error("no common commit found between '{source_branch}' and '{target_branch}'")]
    NoCommonAncestor {
        source_branch: String,
        target_branch: String,
    },

    #[error("invalid rebase plan: {0}")]
    InvalidPlan(String),

    #[error("no rebase in progress")]
    NoRebaseInProgress,

    #[error("a rebase is already in progress, use --continue or --abort")]
    RebaseInProgress,

    #[error("repository is locked by another twig process")]
    RepositoryLocked,

    /// A parent walk revisited a commit.
    #[error("commit history is corrupt: {0}")]
    CorruptHistory(String),

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl VcsError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        VcsError::Io {
            context: context.into(),
            source,
        }
    }
}
