//! Common ancestor search for rebase
//!
//! Both tips are expanded into their first-parent ancestry chains (tip first,
//! root last). The result is the first commit of the source chain that appears
//! anywhere in the target chain.
//!
//! This is a first-common-element search over two sequences, not a lowest
//! common ancestor computation over the commit DAG. It finds the nearest
//! ancestor only while the history between the branch point and either tip is
//! linear. With earlier merges on the way, only first parents are followed and
//! the answer may be an older common commit.

use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

pub struct CommonAncestorFinder<F>
where
    F: Fn(&ObjectId) -> anyhow::Result<Option<ObjectId>>,
{
    parent_loader: F,
}

impl<F> CommonAncestorFinder<F>
where
    F: Fn(&ObjectId) -> anyhow::Result<Option<ObjectId>>,
{
    pub fn new(parent_loader: F) -> Self {
        CommonAncestorFinder { parent_loader }
    }

    /// First-parent chain from `tip` to the root, tip first
    pub fn ancestry_chain(&self, tip: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        RevList::new(tip.clone(), &self.parent_loader).collect()
    }

    /// First commit of the source chain that the target chain also contains
    pub fn find_common_ancestor(
        &self,
        source_tip: &ObjectId,
        target_tip: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let source_chain = self.ancestry_chain(source_tip)?;
        let target_chain = self.ancestry_chain(target_tip)?.into_iter().collect::<HashSet<_>>();

        let ancestor = source_chain
            .into_iter()
            .find(|commit| target_chain.contains(commit));

        tracing::debug!(
            source = %source_tip,
            target = %target_tip,
            ancestor = ?ancestor.as_ref().map(ObjectId::to_short_oid),
            "common ancestor search"
        );

        Ok(ancestor)
    }

    /// Commits of `tip`'s chain strictly newer than `base`, tip first
    ///
    /// When `base` is not on the chain the whole chain is returned.
    pub fn commits_after(&self, base: &ObjectId, tip: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        Ok(self
            .ancestry_chain(tip)?
            .into_iter()
            .take_while(|commit| commit != base)
            .collect())
    }
}
