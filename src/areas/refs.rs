//! References (branches and HEAD)
//!
//! Branch refs are text files under `refs/heads/` holding the tip commit hash.
//! HEAD holds either a symbolic ref (`ref: refs/heads/<name>`) or a bare commit
//! hash when detached. A branch named by HEAD whose ref file does not exist yet
//! is unborn: the repository has no commit on it.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::VcsError;
use anyhow::Context;
use derive_new::new;
use fake::rand;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Where HEAD points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    Branch(BranchName),
    Detached(ObjectId),
}

/// A branch as reported by `list_branches`
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct BranchListing {
    pub name: BranchName,
    pub is_current: bool,
}

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.twig`)
    path: Box<Path>,
}

impl Refs {
    /// Parse HEAD into its symbolic or detached form
    pub fn read_head(&self) -> anyhow::Result<Head> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {:?}", head_path))?;
        let content = content.trim();

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        match symref_match {
            Some(symref_match) => Ok(Head::Branch(BranchName::try_parse_ref_path(
                &symref_match[1],
            )?)),
            None => Ok(Head::Detached(ObjectId::try_parse(content.to_string())?)),
        }
    }

    /// Name of the checked-out branch; fails when HEAD is detached
    pub fn current_branch(&self) -> anyhow::Result<BranchName> {
        match self.read_head()? {
            Head::Branch(name) => Ok(name),
            Head::Detached(_) => Err(VcsError::DetachedHead.into()),
        }
    }

    pub fn is_current_branch(&self, branch_name: &BranchName) -> anyhow::Result<bool> {
        Ok(matches!(self.read_head()?, Head::Branch(name) if &name == branch_name))
    }

    /// Commit HEAD resolves to, `None` on an unborn branch
    pub fn read_head_oid(&self) -> anyhow::Result<Option<ObjectId>> {
        match self.read_head()? {
            Head::Branch(name) => self.read_branch(&name),
            Head::Detached(oid) => Ok(Some(oid)),
        }
    }

    pub fn set_head_branch(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(
            &self.head_path(),
            &format!("ref: {}", branch_name.ref_path()),
        )
    }

    pub fn set_head_detached(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(&self.head_path(), oid.as_ref())
    }

    /// Move whatever HEAD points at to a new commit
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        match self.read_head()? {
            Head::Branch(name) => self.write_branch(&name, oid),
            Head::Detached(_) => self.set_head_detached(oid),
        }
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    /// Tip of a branch, `None` when the ref file is absent or empty
    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let ref_path = self.branch_path(branch_name);
        if !ref_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&ref_path)
            .with_context(|| format!("failed to read ref file at {:?}", ref_path))?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ObjectId::try_parse(content.to_string())?))
        }
    }

    pub fn resolve_branch(&self, branch_name: &BranchName) -> anyhow::Result<ObjectId> {
        self.read_branch(branch_name)?
            .ok_or_else(|| VcsError::UnknownBranch(branch_name.to_string()).into())
    }

    pub fn write_branch(&self, branch_name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        tracing::debug!(branch = %branch_name, oid = %oid, "updating branch ref");
        self.update_ref_file(&self.branch_path(branch_name), oid.as_ref())
    }

    pub fn create_branch(&self, name: &BranchName, source_oid: &ObjectId) -> anyhow::Result<()> {
        if self.branch_exists(name) {
            return Err(VcsError::BranchExists(name.to_string()).into());
        }

        self.write_branch(name, source_oid)
    }

    /// All branches ordered by name, the checked-out one flagged
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchListing>> {
        let current = match self.read_head()? {
            Head::Branch(name) => Some(name),
            Head::Detached(_) => None,
        };
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                BranchName::try_parse(relative_path.to_string_lossy().replace('\\', "/")).ok()
            })
            .map(|name| {
                let is_current = current.as_ref() == Some(&name);
                BranchListing::new(name, is_current)
            })
            .collect::<Vec<_>>();
        branches.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(branches)
    }

    /// Replace a ref file through a temporary file and a rename
    fn update_ref_file(&self, path: &Path, raw_ref: &str) -> anyhow::Result<()> {
        let parent = path
            .parent()
            .with_context(|| format!("invalid ref path {:?}", path))?;
        std::fs::create_dir_all(parent).map_err(|err| {
            VcsError::io(format!("failed to create ref directory {:?}", parent), err)
        })?;

        let temp_path = parent.join(format!(".tmp-ref-{}", rand::random::<u32>()));
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|err| VcsError::io(format!("failed to open ref file at {:?}", temp_path), err))?;
        ref_file
            .write_all(raw_ref.as_bytes())
            .map_err(|err| VcsError::io(format!("failed to write ref file at {:?}", temp_path), err))?;

        std::fs::rename(&temp_path, path)
            .map_err(|err| VcsError::io(format!("failed to update ref file at {:?}", path), err))?;

        Ok(())
    }

    fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.path.join(branch_name.ref_path()).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
