//! First-parent ancestry walk
//!
//! Walks from a tip commit towards the root by following each commit's first
//! parent. The walk has no depth bound; it ends at the first commit whose
//! parent field is empty. Revisiting a commit means the parent links form a
//! cycle, which is reported as corrupt history instead of looping forever.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::VcsError;
use std::collections::HashSet;

pub struct RevList<F>
where
    F: Fn(&ObjectId) -> anyhow::Result<Option<ObjectId>>,
{
    parent_loader: F,
    next_oid: Option<ObjectId>,
    seen: HashSet<ObjectId>,
}

impl<F> RevList<F>
where
    F: Fn(&ObjectId) -> anyhow::Result<Option<ObjectId>>,
{
    /// `parent_loader` maps a commit to its first parent
    pub fn new(tip: ObjectId, parent_loader: F) -> Self {
        RevList {
            parent_loader,
            next_oid: Some(tip),
            seen: HashSet::new(),
        }
    }
}

impl<F> Iterator for RevList<F>
where
    F: Fn(&ObjectId) -> anyhow::Result<Option<ObjectId>>,
{
    type Item = anyhow::Result<ObjectId>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.next_oid.take()?;

        if !self.seen.insert(oid.clone()) {
            return Some(Err(VcsError::CorruptHistory(format!(
                "commit {} is its own ancestor",
                oid
            ))
            .into()));
        }

        match (self.parent_loader)(&oid) {
            Ok(parent) => {
                self.next_oid = parent;
                Some(Ok(oid))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
