use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::errors::{IoContext, Result};
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the repository directory layout; a no-op when it already exists
    pub fn init(&self) -> Result<()> {
        if self.is_initialized() {
            writeln!(
                self.writer(),
                "MiniGit repository already initialized in {}",
                self.repository_path().display()
            )?;
            return Ok(());
        }

        fs::create_dir_all(self.database().objects_path())
            .io_context(|| "Failed to create objects directory".to_string())?;
        fs::create_dir_all(self.refs().heads_path())
            .io_context(|| "Failed to create refs/heads directory".to_string())?;

        let default_branch =
            BranchName::try_parse(self.config().layout.default_branch().to_string())?;
        self.refs().create_unborn_branch(&default_branch)?;
        self.refs().set_head(&Head::Symbolic(default_branch))?;

        self.index().write_updates()?;

        tracing::info!(path = %self.repository_path().display(), "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty MiniGit repository in {}",
            self.repository_path().display()
        )?;

        Ok(())
    }
}
