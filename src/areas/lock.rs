//! Repository lock
//!
//! Every mutating command holds an exclusive OS-level lock on
//! `.twig/twig.lock` for its whole duration. Acquisition never blocks: a
//! second process fails fast with [`VcsError::RepositoryLocked`]. The lock is
//! released when the guard is dropped, on every exit path.

use crate::errors::VcsError;
use file_guard::{FileGuard, Lock};
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const LOCK_FILE_NAME: &str = "twig.lock";

pub struct RepositoryLock {
    path: PathBuf,
    _guard: FileGuard<Box<File>>,
}

impl RepositoryLock {
    pub fn acquire(metadata_path: &Path) -> anyhow::Result<Self> {
        let path = metadata_path.join(LOCK_FILE_NAME);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|err| VcsError::io(format!("failed to open lock file {:?}", path), err))?;

        let guard = match file_guard::try_lock(Box::new(file), Lock::Exclusive, 0, 1) {
            Ok(guard) => guard,
            Err(err) if matches!(err.kind(), ErrorKind::WouldBlock | ErrorKind::PermissionDenied) => {
                return Err(VcsError::RepositoryLocked.into());
            }
            Err(err) => {
                return Err(VcsError::io(format!("failed to lock {:?}", path), err).into());
            }
        };

        tracing::debug!(path = %path.display(), "acquired repository lock");
        Ok(RepositoryLock {
            path,
            _guard: guard,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RepositoryLock {
    fn drop(&mut self) {
        tracing::debug!(path = %self.path.display(), "released repository lock");
    }
}
