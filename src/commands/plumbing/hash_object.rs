use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Print the digest of a file, storing it as an object when `write` is set
    pub fn hash_object(&mut self, object_path: &str, write: bool) -> anyhow::Result<()> {
        let object_path = Path::new(object_path);

        let object_id = if write {
            let _lock = self.lock()?;
            let data = self.workspace().read_file(object_path)?;
            self.database().store_object(&Blob::new(data.into()))?
        } else {
            self.workspace().hash_file(object_path)?
        };

        writeln!(self.writer(), "{}", object_id)?;

        Ok(())
    }
}
