use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::status::file_change::WorkspaceChange;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Working directory compared against the index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    /// Tracked files whose content still matches the index
    pub staged: BTreeSet<PathBuf>,
    pub changes: BTreeMap<PathBuf, WorkspaceChange>,
}

impl StatusReport {
    pub fn with_change(
        &self,
        change: WorkspaceChange,
    ) -> impl Iterator<Item = &PathBuf> + '_ {
        self.changes
            .iter()
            .filter(move |(_, candidate)| **candidate == change)
            .map(|(path, _)| path)
    }

    pub fn is_clean(&self) -> bool {
        self.changes.is_empty()
    }
}

#[derive(new)]
pub struct Inspector<'w> {
    workspace: &'w Workspace,
}

impl Inspector<'_> {
    pub fn inspect(&self, index: &Index) -> anyhow::Result<StatusReport> {
        let mut report = StatusReport::default();
        let workspace_files = self
            .workspace
            .list_files(None)?
            .into_iter()
            .collect::<BTreeSet<_>>();

        for entry in index.entries() {
            if !workspace_files.contains(&entry.path) {
                report.changes.insert(entry.path, WorkspaceChange::Deleted);
            } else if self.workspace.hash_file(&entry.path)? != entry.oid {
                report.changes.insert(entry.path, WorkspaceChange::Modified);
            } else {
                report.staged.insert(entry.path);
            }
        }

        for path in workspace_files {
            if !index.is_tracked(&path) {
                report.changes.insert(path, WorkspaceChange::Untracked);
            }
        }

        Ok(report)
    }
}
