//! Content-addressable object store
//!
//! Objects are opaque byte blobs stored raw at `objects/<digest>`, where the
//! digest is the SHA-1 of the bytes. Storing is idempotent and nothing is ever
//! rewritten or deleted: new content always lands under a new digest.

use crate::areas::history::CommitGraph;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::VcsError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Commit-level view over the stored objects
    pub fn history(&self) -> CommitGraph<'_> {
        CommitGraph::new(self)
    }

    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Read the bytes stored under a digest
    ///
    /// Fails with [`VcsError::NotFound`] when no such object exists.
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(VcsError::NotFound(object_id.to_string()).into())
            }
            Err(err) => Err(VcsError::io(
                format!("Unable to read object file {}", object_path.display()),
                err,
            )
            .into()),
        }
    }

    /// Store raw bytes under their digest and return it
    ///
    /// Storing content that is already present is a no-op.
    pub fn store(&self, content: &[u8]) -> anyhow::Result<ObjectId> {
        let object_id = ObjectId::digest(content);
        let object_path = self.path.join(object_id.to_path());

        if object_path.exists() {
            tracing::debug!(oid = %object_id, "object already stored");
        } else {
            self.write_object(object_path, content)?;
            tracing::debug!(oid = %object_id, bytes = content.len(), "stored object");
        }

        Ok(object_id)
    }

    pub fn store_object(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        self.store(&object.serialize()?)
    }

    pub fn parse_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let content = self.load(object_id)?;
        Commit::deserialize(&content)
            .with_context(|| format!("object {} is not a readable commit", object_id))
    }

    fn write_object(&self, object_path: PathBuf, content: &[u8]) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.path).with_context(|| {
            format!("Unable to create object directory {}", self.path.display())
        })?;

        let temp_object_path = self.path.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .map_err(|err| {
                VcsError::io(
                    format!("Unable to open object file {}", temp_object_path.display()),
                    err,
                )
            })?;

        file.write_all(content).map_err(|err| {
            VcsError::io(
                format!("Unable to write object file {}", temp_object_path.display()),
                err,
            )
        })?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).map_err(|err| {
            VcsError::io(
                format!("Unable to rename object file to {}", object_path.display()),
                err,
            )
        })?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
