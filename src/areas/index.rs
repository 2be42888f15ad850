//! Staging index
//!
//! The index records which snapshot object each staged path had at `add`
//! time. Commit records carry no tree, so the index only feeds `status`.
//!
//! ## File Format
//!
//! One line per staged file, sorted by path:
//!
//! ```text
//! <40-char digest> <path relative to the working directory>
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    pub path: PathBuf,
    pub oid: ObjectId,
}

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.twig/index`)
    path: Box<Path>,
    entries: BTreeMap<PathBuf, ObjectId>,
    /// Set when the in-memory entries differ from the file
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// A missing or empty file yields an empty index.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .with_context(|| format!("failed to open index at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut().read_to_string(&mut content)?;

        for line in content.lines().filter(|line| !line.trim().is_empty()) {
            let (oid, path) = line
                .split_once(' ')
                .with_context(|| format!("malformed index line: {line}"))?;
            self.entries
                .insert(PathBuf::from(path), ObjectId::try_parse(oid.to_string())?);
        }

        Ok(())
    }

    pub fn add(&mut self, entry: IndexEntry) {
        if self.entries.get(&entry.path) != Some(&entry.oid) {
            self.entries.insert(entry.path, entry.oid);
            self.changed = true;
        }
    }

    pub fn entry_by_path(&self, path: &Path) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn is_tracked(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = IndexEntry> + '_ {
        self.entries
            .iter()
            .map(|(path, oid)| IndexEntry::new(path.clone(), oid.clone()))
    }

    /// Persist the entries if anything changed since the last load
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())
            .with_context(|| format!("failed to open index at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let content = self
            .entries
            .iter()
            .map(|(path, oid)| format!("{} {}\n", oid, path.display()))
            .collect::<String>();
        lock.deref_mut().write_all(content.as_bytes())?;

        self.changed = false;

        Ok(())
    }
}
