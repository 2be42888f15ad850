use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MergeOutcome {
    pub commit: ObjectId,
    pub current: BranchName,
    pub source: BranchName,
}

impl Repository {
    pub fn merge(&mut self, source: &str) -> anyhow::Result<()> {
        let _lock = self.lock()?;

        let source = BranchName::try_parse(source.to_string())?;
        let outcome = self.merge_branch(&source)?;

        writeln!(
            self.writer(),
            "Successfully merged branch '{}' into '{}'. New commit: {}",
            outcome.source,
            outcome.current,
            outcome.commit
        )?;

        Ok(())
    }

    /// Record `source` as merged into the checked-out branch
    ///
    /// Writes one two-parent commit (current tip first) and moves only the
    /// current branch. File contents are never compared.
    pub fn merge_branch(&self, source: &BranchName) -> anyhow::Result<MergeOutcome> {
        let current = self.refs().current_branch()?;
        let current_tip = self.refs().resolve_branch(&current)?;
        let source_tip = self.refs().resolve_branch(source)?;

        tracing::debug!(
            current = %current,
            current_tip = %current_tip,
            source = %source,
            source_tip = %source_tip,
            "merging branches"
        );

        let message = format!("Merge branch '{}' into '{}'", source, current);
        let commit = self.history().create_merge_commit(
            current_tip,
            source_tip,
            &message,
            self.settings().commit_timestamp(),
        )?;
        self.refs().write_branch(&current, &commit)?;

        Ok(MergeOutcome::new(commit, current, source.clone()))
    }
}
