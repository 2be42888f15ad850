use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::VcsError;
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub fn list_branches(&mut self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        for branch in self.refs().list_branches()? {
            if branch.is_current {
                writeln!(self.writer(), "* {}", branch.name.to_string().green())?;
            } else {
                writeln!(self.writer(), "  {}", branch.name)?;
            }
        }

        Ok(())
    }

    /// Create a branch at `start` (a branch name or a full commit hash), or at HEAD
    pub fn create_branch(&mut self, name: &str, start: Option<&str>) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let branch_name = BranchName::try_parse(name.to_string())?;
        let start_oid = match start {
            Some(start) => self.resolve_start_point(start)?,
            None => self
                .refs()
                .read_head_oid()?
                .ok_or_else(|| anyhow::anyhow!("no current HEAD to branch from"))?,
        };

        self.refs().create_branch(&branch_name, &start_oid)?;

        writeln!(
            self.writer(),
            "Branch '{}' created, pointing to commit {}",
            branch_name,
            start_oid
        )?;

        Ok(())
    }

    fn resolve_start_point(&self, start: &str) -> anyhow::Result<ObjectId> {
        if let Ok(branch_name) = BranchName::try_parse(start.to_string())
            && self.refs().branch_exists(&branch_name)
        {
            return self.refs().resolve_branch(&branch_name);
        }

        match ObjectId::try_parse(start.to_string()) {
            Ok(oid) if self.database().exists(&oid) => Ok(oid),
            Ok(oid) => Err(VcsError::NotFound(oid.to_string()).into()),
            Err(_) => Err(VcsError::UnknownBranch(start.to_string()).into()),
        }
    }
}
