use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// First-parent history from HEAD, newest first
    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let Some(head_oid) = self.refs().read_head_oid()? else {
            return Ok(());
        };

        let history = self.history();
        for commit_oid in RevList::new(head_oid, |oid| history.parent_of(oid)) {
            let commit_oid = commit_oid?;
            let commit = history.load(&commit_oid)?;

            if opts.oneline {
                self.show_commit_oneline(&commit_oid, &commit)?;
            } else {
                self.show_commit_medium(&commit_oid, &commit)?;
                writeln!(self.writer())?;
            }
        }

        Ok(())
    }

    fn show_commit_medium(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", commit_oid).yellow()
        )?;
        if commit.is_merge() {
            let parents = commit
                .parents()
                .iter()
                .map(ObjectId::to_short_oid)
                .collect::<Vec<_>>();
            writeln!(self.writer(), "Merge: {}", parents.join(" "))?;
        }
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer())?;
        writeln!(self.writer(), "    {}", commit.message())?;

        Ok(())
    }

    fn show_commit_oneline(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            commit_oid.to_short_oid().yellow(),
            commit.message()
        )?;

        Ok(())
    }
}
