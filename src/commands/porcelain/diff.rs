use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::WorkspaceChange;
use crate::artifacts::status::inspector::Inspector;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    /// File-level differences between the working directory, the index and the last commit
    ///
    /// Commit records carry no file snapshot, so every staged path counts as a
    /// staged change against the last commit. Untracked files are left to
    /// `status`.
    pub async fn diff(&mut self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let (report, staged) = {
            let index = self.index();
            let mut index = index.lock().await;
            index.rehydrate()?;

            let report = Inspector::new(self.workspace()).inspect(&index)?;
            let staged = index
                .entries()
                .map(|entry| entry.path)
                .collect::<Vec<PathBuf>>();
            (report, staged)
        };

        let mut unstaged = report
            .changes
            .iter()
            .filter(|(_, change)| **change != WorkspaceChange::Untracked)
            .peekable();
        let has_unstaged = unstaged.peek().is_some();

        if has_unstaged {
            writeln!(
                self.writer(),
                "Unstaged changes (working directory vs staging area):"
            )?;
            for (path, change) in unstaged {
                writeln!(
                    self.writer(),
                    "{}{}",
                    change,
                    path.display().to_string().red()
                )?;
            }
        }

        if !staged.is_empty() {
            writeln!(self.writer(), "Staged changes (staging area vs last commit):")?;
            for path in &staged {
                writeln!(self.writer(), "    {}", path.display().to_string().green())?;
            }
        }

        if !has_unstaged && staged.is_empty() {
            writeln!(self.writer(), "No differences found.")?;
        }

        Ok(())
    }
}
