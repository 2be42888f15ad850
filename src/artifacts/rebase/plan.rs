use crate::artifacts::core::line_reader::LineReader;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::rebase::action::{ActionKind, RebaseAction};
use crate::errors::VcsError;

/// Ordered list of actions, one per rebased commit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebasePlan {
    actions: Vec<RebaseAction>,
}

impl RebasePlan {
    /// Validate a list of actions
    ///
    /// A `squash` needs a preceding entry to combine with.
    pub fn try_new(actions: Vec<RebaseAction>) -> anyhow::Result<Self> {
        if let Some(action) = actions
            .iter()
            .find(|action| action.kind == ActionKind::Squash && action.previous.is_none())
        {
            return Err(VcsError::InvalidPlan(format!(
                "cannot squash commit {} without a previous commit",
                action.commit
            ))
            .into());
        }

        Ok(RebasePlan { actions })
    }

    /// Pair each commit with its action, linking every entry to the one before
    pub fn from_kinds(commits: &[ObjectId], kinds: Vec<ActionKind>) -> anyhow::Result<Self> {
        let actions = commits
            .iter()
            .zip(kinds)
            .enumerate()
            .map(|(position, (commit, kind))| {
                let previous = position
                    .checked_sub(1)
                    .map(|previous| commits[previous].clone());
                RebaseAction::new(kind, commit.clone(), previous)
            })
            .collect();

        Self::try_new(actions)
    }

    /// Ask for one action per commit, in the given order
    pub fn collect(commits: &[ObjectId], reader: &mut dyn LineReader) -> anyhow::Result<Self> {
        let kinds = commits
            .iter()
            .map(|commit| {
                let answer = reader.read_line(&format!(
                    "Commit: {commit} - choose action (pick, squash, edit, drop): "
                ))?;
                Ok(ActionKind::from(answer.as_str()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Self::from_kinds(commits, kinds)
    }

    pub fn actions(&self) -> &[RebaseAction] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
