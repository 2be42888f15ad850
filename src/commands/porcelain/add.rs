use crate::areas::index::IndexEntry;
use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::errors::VcsError;
use std::path::Path;

impl Repository {
    /// Snapshot the given files (directories expand recursively) into the index
    ///
    /// Paths that do not exist are reported and skipped.
    pub async fn add(&mut self, paths: &[String]) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let index = self.index();
        let mut index = index.lock().await;
        index.rehydrate()?;

        for path in paths {
            let files = match self.workspace().list_files(Some(Path::new(path))) {
                Ok(files) => files,
                Err(err) if matches!(err.downcast_ref::<VcsError>(), Some(VcsError::NotFound(_))) => {
                    eprintln!("warning: pathspec '{}' did not match any files", path);
                    continue;
                }
                Err(err) => return Err(err),
            };

            for file in files {
                let data = self.workspace().read_file(&file)?;
                let oid = self.database().store_object(&Blob::new(data.into()))?;

                tracing::debug!(path = %file.display(), oid = %oid, "staged file");
                index.add(IndexEntry::new(file, oid));
            }
        }

        index.write_updates()?;

        Ok(())
    }
}
