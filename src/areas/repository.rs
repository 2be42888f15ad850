use crate::areas::database::Database;
use crate::areas::history::CommitGraph;
use crate::areas::index::Index;
use crate::areas::lock::RepositoryLock;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::line_reader::{LineReader, StdinLineReader};
use crate::artifacts::core::settings::Settings;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Name of the metadata directory inside the working directory
pub const METADATA_DIR: &str = ".twig";
/// File recording a paused rebase, inside the metadata directory
pub const REBASE_STATE_FILE: &str = "rebase";
/// Conflict artifact written into the working directory when a rebase pauses
pub const CONFLICT_FILE_NAME: &str = "conflicted_file.txt";

/// Session over one repository
///
/// Owns every store plus the output writer and the prompt reader, so commands
/// never reach for process-wide state.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    reader: RefCell<Box<dyn LineReader>>,
    index: Arc<Mutex<Index>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    settings: Settings,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);
        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("failed to create directory {:?}", path))?;
        }
        let path = path.canonicalize()?;
        let metadata_path = path.join(METADATA_DIR);

        Ok(Repository {
            writer: RefCell::new(writer),
            reader: RefCell::new(Box::new(StdinLineReader)),
            index: Arc::new(Mutex::new(Index::new(
                metadata_path.join("index").into_boxed_path(),
            ))),
            database: Database::new(metadata_path.join("objects").into_boxed_path()),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            refs: Refs::new(metadata_path.into_boxed_path()),
            settings: Settings::default(),
            path: path.into_boxed_path(),
        })
    }

    pub fn with_line_reader(self, reader: Box<dyn LineReader>) -> Self {
        *self.reader.borrow_mut() = reader;
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> Box<Path> {
        self.path.join(METADATA_DIR).into_boxed_path()
    }

    pub fn rebase_state_path(&self) -> Box<Path> {
        self.metadata_path().join(REBASE_STATE_FILE).into_boxed_path()
    }

    pub fn conflict_file_path(&self) -> Box<Path> {
        self.path.join(CONFLICT_FILE_NAME).into_boxed_path()
    }

    pub fn is_initialized(&self) -> bool {
        self.refs.head_path().is_file()
    }

    /// Fail unless `init` has run for this working directory
    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if !self.is_initialized() {
            anyhow::bail!(
                "not a twig repository (no {} directory in {})",
                METADATA_DIR,
                self.path.display()
            );
        }

        Ok(())
    }

    /// Take the exclusive repository lock for a mutating command
    pub fn lock(&self) -> anyhow::Result<RepositoryLock> {
        self.ensure_initialized()?;
        RepositoryLock::acquire(&self.metadata_path())
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn reader(&'_ self) -> RefMut<'_, Box<dyn LineReader>> {
        self.reader.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn history(&self) -> CommitGraph<'_> {
        self.database.history()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
