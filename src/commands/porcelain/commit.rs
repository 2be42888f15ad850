use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let message = message.trim();
        if message.is_empty() {
            anyhow::bail!("Aborting commit due to empty commit message");
        }

        let _lock = self.lock()?;

        let parent = self.refs().read_head_oid()?;
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let commit_oid =
            self.history()
                .create_commit(parent, message, self.settings().commit_timestamp())?;
        self.refs().update_head(&commit_oid)?;

        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_oid.to_short_oid(),
            message
        )?;

        Ok(())
    }
}
