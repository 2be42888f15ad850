use crate::areas::lock::RepositoryLock;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use anyhow::Context;
use std::fs;
use std::io::Write;

const DEFAULT_BRANCH: &str = "main";

impl Repository {
    /// Create the metadata layout, keeping anything that already exists
    pub async fn init(&mut self) -> anyhow::Result<()> {
        let reinitialized = self.is_initialized();

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .twig/objects directory")?;
        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .twig/refs/heads directory")?;

        let _lock = RepositoryLock::acquire(&self.metadata_path())?;

        if !reinitialized {
            let default_branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;
            self.refs()
                .set_head_branch(&default_branch)
                .context("Failed to create initial HEAD reference")?;

            // an empty ref file marks the default branch as unborn
            let branch_ref_path = self.refs().heads_path().join(DEFAULT_BRANCH);
            if !branch_ref_path.exists() {
                fs::write(&branch_ref_path, b"").context("Failed to create default branch file")?;
            }
        }

        let index = self.index();
        let index = index.lock().await;
        if !index.path().exists() {
            fs::write(index.path(), b"").context("Failed to create .twig/index file")?;
        }

        writeln!(
            self.writer(),
            "{} twig repository in {}",
            if reinitialized {
                "Reinitialized existing"
            } else {
                "Initialized empty"
            },
            self.metadata_path().display()
        )?;

        Ok(())
    }
}
