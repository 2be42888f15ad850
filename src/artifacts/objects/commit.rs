//! Commit record
//!
//! A commit is a small text record stored as an ordinary object; its digest is
//! the commit hash.
//!
//! ## Format
//!
//! ```text
//! timestamp: <RFC 3339 timestamp>
//! message: <single line of text>
//! parent: <parent-sha or empty>
//! ```
//!
//! Merge commits carry two parents instead of the `parent:` line:
//!
//! ```text
//! Parent 1: <current-branch-sha>
//! Parent 2: <merged-branch-sha>
//! ```
//!
//! Parsing is lenient: keys match case-insensitively, the first occurrence of
//! each key wins and unknown lines are ignored, so a squashed record (two records joined by a newline) or an
//! edited one still yields its fields.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;

const TIMESTAMP_KEY: &str = "timestamp";
const MESSAGE_KEY: &str = "message";
const PARENT_KEY: &str = "parent";
const FIRST_PARENT_KEY: &str = "Parent 1";
const SECOND_PARENT_KEY: &str = "Parent 2";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit IDs (empty for a root commit, two for a merge)
    parents: Vec<ObjectId>,
    timestamp: String,
    message: String,
}

impl Commit {
    /// Create a new commit record
    ///
    /// Line breaks in the message are folded into spaces, since the record
    /// keeps one field per line. Other whitespace is kept as written.
    pub fn new(
        parents: Vec<ObjectId>,
        message: &str,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Commit {
            parents,
            timestamp: timestamp.to_rfc3339(),
            message: message.replace("\r\n", " ").replace(['\r', '\n'], " "),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Format the timestamp like `Mon Jan 1 12:34:56 2024 +0000`
    ///
    /// Records whose timestamp does not parse (e.g. hand-edited ones) show it
    /// verbatim.
    pub fn readable_timestamp(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|ts| ts.format("%a %b %-d %H:%M:%S %Y %z").to_string())
            .unwrap_or_else(|_| self.timestamp.clone())
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// First parent; for merges this is the branch that was merged into
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Copy of a raw record with its first parent line pointing at `onto`
    ///
    /// `parent:` lines are preferred over `Parent 1:` lines; a record without
    /// any parent line gets one appended. The key keeps its original spelling.
    pub fn rewrite_parent(content: &str, onto: &ObjectId) -> String {
        let mut lines = content.lines().map(str::to_string).collect::<Vec<_>>();

        let position = [PARENT_KEY, FIRST_PARENT_KEY].iter().find_map(|key| {
            lines.iter().enumerate().find_map(|(position, line)| match split_field(line) {
                Some((k, _)) if k.eq_ignore_ascii_case(key) => Some((position, k.to_string())),
                _ => None,
            })
        });

        match position {
            Some((position, key)) => lines[position] = format!("{key}: {onto}"),
            None => lines.push(format!("{PARENT_KEY}: {onto}")),
        }

        lines.join("\n")
    }
}

fn split_field(line: &str) -> Option<(&str, &str)> {
    line.split_once(':')
        .map(|(key, value)| (key.trim(), value.trim()))
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut lines = vec![
            format!("{TIMESTAMP_KEY}: {}", self.timestamp),
            format!("{MESSAGE_KEY}: {}", self.message),
        ];

        match self.parents.as_slice() {
            [] => lines.push(format!("{PARENT_KEY}: ")),
            [parent] => lines.push(format!("{PARENT_KEY}: {parent}")),
            [first, second] => {
                lines.push(format!("{FIRST_PARENT_KEY}: {first}"));
                lines.push(format!("{SECOND_PARENT_KEY}: {second}"));
            }
            parents => anyhow::bail!(
                "a commit has at most two parents, got {}",
                parents.len()
            ),
        }

        Ok(Bytes::from(lines.join("\n")))
    }
}

impl Unpackable for Commit {
    fn deserialize(content: &[u8]) -> anyhow::Result<Self> {
        let content = String::from_utf8_lossy(content);

        let mut timestamp = None;
        let mut message = None;
        let mut parent = None;
        let mut first_parent = None;
        let mut second_parent = None;

        for (key, value) in content.lines().filter_map(split_field) {
            let slot = match key {
                k if k.eq_ignore_ascii_case(TIMESTAMP_KEY) => &mut timestamp,
                k if k.eq_ignore_ascii_case(MESSAGE_KEY) => &mut message,
                k if k.eq_ignore_ascii_case(PARENT_KEY) => &mut parent,
                k if k.eq_ignore_ascii_case(FIRST_PARENT_KEY) => &mut first_parent,
                k if k.eq_ignore_ascii_case(SECOND_PARENT_KEY) => &mut second_parent,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.to_string());
            }
        }

        let parse = |value: Option<String>| -> anyhow::Result<Option<ObjectId>> {
            match value {
                Some(value) if !value.is_empty() => Ok(Some(ObjectId::try_parse(value)?)),
                _ => Ok(None),
            }
        };

        let parents = match parse(parent)? {
            Some(parent) => vec![parent],
            None => parse(first_parent)?
                .into_iter()
                .chain(parse(second_parent)?)
                .collect(),
        };

        Ok(Commit {
            parents,
            timestamp: timestamp.unwrap_or_default(),
            message: message.unwrap_or_default(),
        })
    }
}

impl Object for Commit {}
