//! Rebase state machine
//!
//! `Idle -> Planning -> Applying -> Idle | Paused`, and `Paused -> Idle`
//! through [`Rebase::resume`] or [`Rebase::abort`]. A pause is an ordinary
//! outcome, not an error.
//!
//! Conflicts are detected by byte identity of the two stored records. Commit
//! records embed their parent and timestamp, so in practice only a commit
//! applied onto itself passes the check.

use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::rebase::action::ActionKind;
use crate::artifacts::rebase::conflict::ConflictMarker;
use crate::artifacts::rebase::paused::PausedRebase;
use crate::artifacts::rebase::plan::RebasePlan;
use crate::errors::VcsError;
use derive_new::new;
use std::collections::HashMap;
use std::io::Write;

const EDIT_PROMPT: &str = "Enter new commit content (leave empty to keep unchanged): ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebaseOutcome {
    /// Every action was applied; `new_tip` is the last rewritten commit
    Completed { new_tip: ObjectId },
    /// A conflict suspended the rebase; the rest of the plan was discarded
    Paused(PausedRebase),
}

#[derive(new)]
pub struct Rebase<'r> {
    repository: &'r Repository,
}

impl Rebase<'_> {
    /// Replay the commits `source` gained since it forked from `target`
    ///
    /// Nothing is written before the plan is complete and valid. On
    /// completion the source branch moves to the rewritten tip; a paused
    /// rebase leaves it untouched.
    pub fn start(&self, source: &BranchName, target: &BranchName) -> anyhow::Result<RebaseOutcome> {
        if self.status()?.is_some() {
            return Err(VcsError::RebaseInProgress.into());
        }

        let refs = self.repository.refs();
        let history = self.repository.history();

        let target_tip = refs.resolve_branch(target)?;
        let source_tip = refs.resolve_branch(source)?;
        let base = history
            .find_common_ancestor(&source_tip, &target_tip)?
            .ok_or_else(|| VcsError::NoCommonAncestor {
                source_branch: source.to_string(),
                target_branch: target.to_string(),
            })?;
        let commits = history.commits_after(&base, &source_tip)?;

        tracing::debug!(
            source = %source,
            target = %target,
            base = %base,
            commits = commits.len(),
            "planning rebase"
        );

        let plan = {
            let mut reader = self.repository.reader();
            RebasePlan::collect(&commits, &mut **reader)?
        };

        let outcome = self.apply(&plan, target_tip)?;
        if let RebaseOutcome::Completed { new_tip } = &outcome {
            refs.write_branch(source, new_tip)?;
        }

        Ok(outcome)
    }

    /// Apply `plan` in order, starting from `onto`
    ///
    /// Moves no ref; [`Rebase::start`] does that once the plan completes.
    pub fn apply(&self, plan: &RebasePlan, onto: ObjectId) -> anyhow::Result<RebaseOutcome> {
        let history = self.repository.history();
        let mut current_target = onto;
        let mut edited = HashMap::<ObjectId, ObjectId>::new();

        for action in plan.actions() {
            tracing::debug!(
                action = %action.kind,
                commit = %action.commit,
                onto = %current_target,
                "applying rebase action"
            );

            match &action.kind {
                ActionKind::Pick => {
                    if !self.same_content(&action.commit, &current_target)? {
                        return self.pause(&action.commit, &current_target);
                    }

                    let new_oid = history.reapply(&action.commit, &current_target)?;
                    writeln!(
                        self.repository.writer(),
                        "Reapplied commit '{}' as '{}'",
                        action.commit,
                        new_oid
                    )?;
                    current_target = new_oid;
                }
                ActionKind::Squash => {
                    let previous = action.previous.as_ref().ok_or_else(|| {
                        VcsError::InvalidPlan(format!(
                            "cannot squash commit {} without a previous commit",
                            action.commit
                        ))
                    })?;
                    let previous = edited.get(previous).unwrap_or(previous).clone();

                    if !self.same_content(&previous, &action.commit)? {
                        return self.pause(&previous, &action.commit);
                    }

                    let new_oid = history.squash(&previous, &action.commit)?;
                    writeln!(
                        self.repository.writer(),
                        "Squashed commit '{}' with '{}' into '{}'",
                        previous,
                        action.commit,
                        new_oid
                    )?;
                    current_target = new_oid;
                }
                ActionKind::Edit => {
                    let new_oid = self.edit(&action.commit, &current_target)?;
                    edited.insert(action.commit.clone(), new_oid.clone());
                    current_target = new_oid;
                }
                ActionKind::Drop => {
                    writeln!(self.repository.writer(), "Dropped commit '{}'", action.commit)?;
                }
                ActionKind::Other(text) => {
                    tracing::warn!(commit = %action.commit, action = %text, "unknown rebase action");
                    writeln!(
                        self.repository.writer(),
                        "Skipping commit '{}': unknown action '{}'",
                        action.commit,
                        text
                    )?;
                }
            }
        }

        Ok(RebaseOutcome::Completed {
            new_tip: current_target,
        })
    }

    /// Reapply the paused commit onto its target once and clear the record
    ///
    /// Actions that followed the conflict in the original plan are not
    /// replayed, and no ref moves.
    pub fn resume(&self) -> anyhow::Result<ObjectId> {
        let state_path = self.repository.rebase_state_path();
        let paused = PausedRebase::load(&state_path)?.ok_or(VcsError::NoRebaseInProgress)?;

        let new_oid = self
            .repository
            .history()
            .reapply(&paused.current, &paused.target)?;
        PausedRebase::clear(&state_path)?;

        tracing::debug!(current = %paused.current, target = %paused.target, new = %new_oid, "resumed rebase");
        Ok(new_oid)
    }

    /// Forget the paused rebase without writing anything
    pub fn abort(&self) -> anyhow::Result<PausedRebase> {
        let state_path = self.repository.rebase_state_path();
        let paused = PausedRebase::load(&state_path)?.ok_or(VcsError::NoRebaseInProgress)?;
        PausedRebase::clear(&state_path)?;

        tracing::debug!(current = %paused.current, target = %paused.target, "aborted rebase");
        Ok(paused)
    }

    pub fn status(&self) -> anyhow::Result<Option<PausedRebase>> {
        PausedRebase::load(&self.repository.rebase_state_path())
    }

    fn same_content(&self, left: &ObjectId, right: &ObjectId) -> anyhow::Result<bool> {
        let database = self.repository.database();
        Ok(database.load(left)? == database.load(right)?)
    }

    fn pause(&self, ours: &ObjectId, theirs: &ObjectId) -> anyhow::Result<RebaseOutcome> {
        let database = self.repository.database();
        let marker = ConflictMarker::new(
            ours.clone(),
            database.load(ours)?,
            theirs.clone(),
            database.load(theirs)?,
        );
        self.repository
            .workspace()
            .write_file(&self.repository.conflict_file_path(), &marker.render())?;

        let paused = PausedRebase::new(ours.clone(), theirs.clone());
        paused.save(&self.repository.rebase_state_path())?;

        tracing::debug!(current = %ours, target = %theirs, "rebase paused on conflict");
        Ok(RebaseOutcome::Paused(paused))
    }

    fn edit(&self, commit: &ObjectId, onto: &ObjectId) -> anyhow::Result<ObjectId> {
        let history = self.repository.history();
        let content = self.repository.database().load(commit)?;

        writeln!(
            self.repository.writer(),
            "Current content of commit '{}':\n{}",
            commit,
            String::from_utf8_lossy(&content)
        )?;
        let replacement = self.repository.reader().read_line(EDIT_PROMPT)?;

        if replacement.trim().is_empty() {
            let new_oid = history.reapply(commit, onto)?;
            writeln!(
                self.repository.writer(),
                "No changes made to commit '{}', reapplied as '{}'",
                commit,
                new_oid
            )?;
            Ok(new_oid)
        } else {
            let new_oid = history.replace(&replacement, onto)?;
            writeln!(
                self.repository.writer(),
                "Commit '{}' edited as '{}'",
                commit,
                new_oid
            )?;
            Ok(new_oid)
        }
    }
}
