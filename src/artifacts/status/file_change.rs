use colored::Colorize;

const LABEL_WIDTH: usize = 4;

/// How a working file differs from what the index recorded for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkspaceChange {
    Modified,
    Deleted,
    Untracked,
}

impl WorkspaceChange {
    pub fn label(&self) -> &'static str {
        match self {
            WorkspaceChange::Modified => "modified:   ",
            WorkspaceChange::Deleted => "deleted:    ",
            WorkspaceChange::Untracked => "",
        }
    }
}

impl std::fmt::Display for WorkspaceChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let colored_label = match self {
            WorkspaceChange::Untracked => self.label().normal(),
            _ => self.label().red(),
        };
        write!(f, "{:>width$}{}", "", colored_label, width = LABEL_WIDTH)
    }
}
