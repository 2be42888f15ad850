//! Commit graph
//!
//! A view over the object store that reads and writes commit records. It owns
//! no storage of its own: every commit it creates is an ordinary object and
//! every query parses bytes the [`Database`] already holds.
//!
//! The rewriting primitives used by rebase (`reapply`, `squash`, `replace`)
//! never touch existing objects; each produces a new object and returns its
//! digest.

use crate::areas::database::Database;
use crate::artifacts::merge::common_ancestor::CommonAncestorFinder;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

#[derive(Debug, new)]
pub struct CommitGraph<'d> {
    database: &'d Database,
}

impl CommitGraph<'_> {
    /// Append a commit with at most one parent
    pub fn create_commit(
        &self,
        parent: Option<ObjectId>,
        message: &str,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> anyhow::Result<ObjectId> {
        let commit = Commit::new(parent.into_iter().collect(), message, timestamp);
        self.database.store_object(&commit)
    }

    /// Append a two-parent merge commit
    pub fn create_merge_commit(
        &self,
        first_parent: ObjectId,
        second_parent: ObjectId,
        message: &str,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> anyhow::Result<ObjectId> {
        let commit = Commit::new(vec![first_parent, second_parent], message, timestamp);
        self.database.store_object(&commit)
    }

    pub fn load(&self, commit_oid: &ObjectId) -> anyhow::Result<Commit> {
        self.database.parse_commit(commit_oid)
    }

    /// First parent of a stored commit
    pub fn parent_of(&self, commit_oid: &ObjectId) -> anyhow::Result<Option<ObjectId>> {
        Ok(self.load(commit_oid)?.parent().cloned())
    }

    /// Hashes from `tip` down to the root commit, tip first
    pub fn ancestry_chain(&self, tip: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        self.finder().ancestry_chain(tip)
    }

    pub fn find_common_ancestor(
        &self,
        source_tip: &ObjectId,
        target_tip: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        self.finder().find_common_ancestor(source_tip, target_tip)
    }

    pub fn commits_after(&self, base: &ObjectId, tip: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        self.finder().commits_after(base, tip)
    }

    /// Copy `commit_oid` with its parent replaced by `onto`
    pub fn reapply(&self, commit_oid: &ObjectId, onto: &ObjectId) -> anyhow::Result<ObjectId> {
        let content = self.database.load(commit_oid)?;
        let rewritten = Commit::rewrite_parent(&String::from_utf8_lossy(&content), onto);
        let new_oid = self.database.store(rewritten.as_bytes())?;

        tracing::debug!(commit = %commit_oid, onto = %onto, new = %new_oid, "reapplied commit");
        Ok(new_oid)
    }

    /// Join two commits' raw records with a newline into one new object
    pub fn squash(&self, previous: &ObjectId, current: &ObjectId) -> anyhow::Result<ObjectId> {
        let mut squashed = self.database.load(previous)?.to_vec();
        squashed.push(b'\n');
        squashed.extend_from_slice(&self.database.load(current)?);

        let new_oid = self.database.store(&squashed)?;

        tracing::debug!(previous = %previous, current = %current, new = %new_oid, "squashed commits");
        Ok(new_oid)
    }

    /// Store edited record content as a new commit placed on `onto`
    pub fn replace(&self, content: &str, onto: &ObjectId) -> anyhow::Result<ObjectId> {
        self.database
            .store(Commit::rewrite_parent(content, onto).as_bytes())
    }

    fn finder(
        &self,
    ) -> CommonAncestorFinder<impl Fn(&ObjectId) -> anyhow::Result<Option<ObjectId>> + '_> {
        CommonAncestorFinder::new(move |oid: &ObjectId| self.parent_of(oid))
    }
}
