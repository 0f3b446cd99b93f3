use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::{Error, Result};
use std::io::Write;

impl Repository {
    /// Create a branch at the HEAD commit, or list branches when no name is given
    pub fn branch(&self, branch_name: Option<&str>) -> Result<Vec<BranchName>> {
        self.ensure_initialized()?;

        match branch_name {
            Some(branch_name) => {
                let branch_name = self.create_branch(branch_name)?;
                Ok(vec![branch_name])
            }
            None => self.list_branches(),
        }
    }

    fn create_branch(&self, branch_name: &str) -> Result<BranchName> {
        let branch_name = BranchName::try_parse(branch_name.to_string())?;

        let source_oid = self.refs().read_head()?.ok_or_else(|| {
            Error::NoCommitsYet(format!("cannot create branch '{branch_name}' before the first commit"))
        })?;

        self.refs().create_branch(&branch_name, &source_oid)?;

        tracing::info!(branch = %branch_name, at = %source_oid, "created branch");
        writeln!(
            self.writer(),
            "Created branch '{}' at {}",
            branch_name,
            source_oid.to_short_oid()
        )?;

        Ok(branch_name)
    }

    fn list_branches(&self) -> Result<Vec<BranchName>> {
        let branches = self.refs().list_branches()?;
        let head = self.refs().head()?;

        for branch in &branches {
            let marker = if head.branch() == Some(branch) { "*" } else { " " };
            writeln!(self.writer(), "{marker} {branch}")?;
        }

        Ok(branches)
    }
}
