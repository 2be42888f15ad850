use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::fmt;

/// What to do with one commit of the rebased range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    Pick,
    Squash,
    Edit,
    Drop,
    /// Unrecognized text, kept verbatim and skipped when applied
    Other(String),
}

impl From<&str> for ActionKind {
    fn from(raw: &str) -> Self {
        match raw.trim() {
            "pick" => ActionKind::Pick,
            "squash" => ActionKind::Squash,
            "edit" => ActionKind::Edit,
            "drop" => ActionKind::Drop,
            other => ActionKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Pick => write!(f, "pick"),
            ActionKind::Squash => write!(f, "squash"),
            ActionKind::Edit => write!(f, "edit"),
            ActionKind::Drop => write!(f, "drop"),
            ActionKind::Other(text) => write!(f, "{text}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RebaseAction {
    pub kind: ActionKind,
    pub commit: ObjectId,
    /// Commit of the preceding plan entry, which `squash` combines with
    pub previous: Option<ObjectId>,
}
