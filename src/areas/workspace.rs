//! Working directory access
//!
//! Paths handed out by the workspace are relative to its root. The metadata
//! directory is never listed.

use crate::areas::repository::METADATA_DIR;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::VcsError;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Files under `root` (or the whole working directory), sorted
    ///
    /// `root` may be absolute or relative to the working directory and may
    /// name a single file.
    pub fn list_files(&self, root: Option<&Path>) -> anyhow::Result<Vec<PathBuf>> {
        let root = match root {
            Some(root) => self.path.join(root),
            None => self.path.to_path_buf(),
        };

        if !root.exists() {
            return Err(VcsError::NotFound(root.display().to_string()).into());
        }

        let mut files = WalkDir::new(&root)
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry.path()))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| self.relative_path(entry.path()))
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Vec<u8>> {
        let full_path = self.path.join(file_path);
        std::fs::read(&full_path)
            .map_err(|err| VcsError::io(format!("failed to read {:?}", full_path), err).into())
    }

    pub fn write_file(&self, file_path: &Path, content: &[u8]) -> anyhow::Result<()> {
        let full_path = self.path.join(file_path);
        std::fs::write(&full_path, content)
            .map_err(|err| VcsError::io(format!("failed to write {:?}", full_path), err).into())
    }

    /// Digest the file's current content would be stored under
    pub fn hash_file(&self, file_path: &Path) -> anyhow::Result<ObjectId> {
        Blob::new(self.read_file(file_path)?.into()).object_id()
    }

    fn is_ignored(path: &Path) -> bool {
        path.components()
            .any(|component| matches!(component, Component::Normal(name) if name == METADATA_DIR))
    }

    fn relative_path(&self, path: &Path) -> Option<PathBuf> {
        path.strip_prefix(self.path.as_ref())
            .ok()
            .map(Path::to_path_buf)
    }
}
