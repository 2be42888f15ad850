use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;

impl Repository {
    /// Point HEAD at an existing branch
    ///
    /// Commits carry no file snapshots, so the working directory is left as is.
    pub fn checkout(&mut self, target: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let branch_name = BranchName::try_parse(target.to_string())?;
        let target_oid = self.refs().resolve_branch(&branch_name)?;

        if self.refs().is_current_branch(&branch_name)? {
            eprintln!("Already on '{}'", branch_name);
            return Ok(());
        }

        self.refs().set_head_branch(&branch_name)?;

        tracing::debug!(branch = %branch_name, oid = %target_oid, "checked out branch");
        eprintln!("Switched to branch '{}'", branch_name);

        Ok(())
    }
}
