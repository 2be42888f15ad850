use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Print the raw bytes stored under a digest
    pub fn cat_file(&mut self, object_id: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let object_id = ObjectId::try_parse(object_id.to_string())?;
        let content = self.database().load(&object_id)?;

        self.writer().write_all(&content)?;
        writeln!(self.writer())?;

        Ok(())
    }
}
