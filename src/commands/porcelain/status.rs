use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::artifacts::rebase::engine::Rebase;
use crate::artifacts::status::file_change::WorkspaceChange;
use crate::artifacts::status::inspector::{Inspector, StatusReport};
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub async fn status(&mut self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let report = {
            let index = self.index();
            let mut index = index.lock().await;
            index.rehydrate()?;

            Inspector::new(self.workspace()).inspect(&index)?
        };

        match self.refs().read_head()? {
            Head::Branch(name) => writeln!(self.writer(), "On branch {}", name)?,
            Head::Detached(oid) => {
                writeln!(self.writer(), "HEAD detached at {}", oid.to_short_oid())?
            }
        }

        if let Some(paused) = Rebase::new(self).status()? {
            writeln!(
                self.writer(),
                "Rebase paused on commit '{}' (use \"twig rebase --continue\" or \"twig rebase --abort\")",
                paused.current
            )?;
        }

        self.print_report(&report)
    }

    fn print_report(&self, report: &StatusReport) -> anyhow::Result<()> {
        if !report.staged.is_empty() {
            writeln!(self.writer(), "\nStaged files:")?;
            for path in &report.staged {
                writeln!(self.writer(), "    {}", path.display().to_string().green())?;
            }
        }

        let mut tracked_changes = report
            .changes
            .iter()
            .filter(|(_, change)| **change != WorkspaceChange::Untracked)
            .peekable();
        if tracked_changes.peek().is_some() {
            writeln!(self.writer(), "\nChanges not staged:")?;
            for (path, change) in tracked_changes {
                writeln!(
                    self.writer(),
                    "{}{}",
                    change,
                    path.display().to_string().red()
                )?;
            }
        }

        let mut untracked = report.with_change(WorkspaceChange::Untracked).peekable();
        if untracked.peek().is_some() {
            writeln!(self.writer(), "\nUntracked files:")?;
            for path in untracked {
                writeln!(self.writer(), "    {}", path.display().to_string().red())?;
            }
        }

        if report.staged.is_empty() && report.is_clean() {
            writeln!(self.writer(), "\nnothing staged, working tree clean")?;
        }

        Ok(())
    }
}
