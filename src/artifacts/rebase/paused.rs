//! Paused rebase record
//!
//! While a rebase waits on a conflict, `.twig/rebase` holds the two hashes
//! the conflict was detected between, as `"<current> <target>"`. The file
//! exists exactly while a rebase is paused.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::VcsError;
use anyhow::Context;
use derive_new::new;
use fake::rand;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PausedRebase {
    /// Commit that was being applied
    pub current: ObjectId,
    /// Commit it was being applied onto
    pub target: ObjectId,
}

impl PausedRebase {
    /// Read the record, `None` when no rebase is paused
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(VcsError::io(format!("failed to read rebase state {:?}", path), err).into());
            }
        };

        let mut fields = content.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(current), Some(target), None) => Ok(Some(PausedRebase::new(
                ObjectId::try_parse(current.to_string())?,
                ObjectId::try_parse(target.to_string())?,
            ))),
            _ => anyhow::bail!("malformed rebase state in {:?}: {:?}", path, content),
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {:?}", parent))?;
        }

        // readers only ever see a whole record
        let temp_path = path.with_file_name(format!(".tmp-rebase-{}", rand::random::<u32>()));
        std::fs::write(&temp_path, format!("{} {}", self.current, self.target)).map_err(|err| {
            VcsError::io(format!("failed to write rebase state {:?}", temp_path), err)
        })?;
        std::fs::rename(&temp_path, path)
            .map_err(|err| VcsError::io(format!("failed to update rebase state {:?}", path), err))?;

        tracing::debug!(current = %self.current, target = %self.target, "saved paused rebase");
        Ok(())
    }

    /// Remove the record, reporting whether one existed
    pub fn clear(path: &Path) -> anyhow::Result<bool> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => {
                Err(VcsError::io(format!("failed to remove rebase state {:?}", path), err).into())
            }
        }
    }
}
