use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::rebase::engine::{Rebase, RebaseOutcome};
use std::io::Write;

impl Repository {
    pub fn rebase(&mut self, source: &str, target: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let source = BranchName::try_parse(source.to_string())?;
        let target = BranchName::try_parse(target.to_string())?;

        match Rebase::new(self).start(&source, &target)? {
            RebaseOutcome::Completed { new_tip } => {
                writeln!(
                    self.writer(),
                    "Successfully rebased '{}' onto '{}'. New tip: {}",
                    source,
                    target,
                    new_tip
                )?;
            }
            RebaseOutcome::Paused(paused) => {
                writeln!(
                    self.writer(),
                    "Conflict detected while rebasing commit '{}' onto '{}'.",
                    paused.current,
                    paused.target
                )?;
                writeln!(
                    self.writer(),
                    "Conflict markers written to {}",
                    self.conflict_file_path().display()
                )?;
                writeln!(
                    self.writer(),
                    "Resolve the conflicts and run 'twig rebase --continue' to resume, or 'twig rebase --abort' to abort."
                )?;
            }
        }

        Ok(())
    }

    pub fn rebase_continue(&mut self) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let new_oid = Rebase::new(self).resume()?;
        writeln!(
            self.writer(),
            "Reapplied paused commit as '{}'. Rebase finished.",
            new_oid
        )?;

        Ok(())
    }

    pub fn rebase_abort(&mut self) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        Rebase::new(self).abort()?;
        writeln!(self.writer(), "Rebase aborted.")?;

        Ok(())
    }

    pub fn rebase_status(&mut self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        match Rebase::new(self).status()? {
            Some(paused) => writeln!(
                self.writer(),
                "Rebase paused: commit '{}' conflicts with '{}'.",
                paused.current,
                paused.target
            )?,
            None => writeln!(self.writer(), "No rebase in progress.")?,
        }

        Ok(())
    }
}
