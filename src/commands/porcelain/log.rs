use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::Result;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Walk the parent chain from HEAD, newest first
    pub fn log(&self) -> Result<Vec<Commit>> {
        self.ensure_initialized()?;

        let mut commits = Vec::new();
        let mut current_oid = self.refs().read_head()?;

        if current_oid.is_none() {
            writeln!(self.writer(), "No commits yet.")?;
            return Ok(commits);
        }

        while let Some(commit_oid) = current_oid {
            let commit = self.database().get_commit(&commit_oid)?;

            self.show_commit(&commit)?;

            current_oid = commit.parent().cloned();
            commits.push(commit);
        }

        Ok(commits)
    }

    fn show_commit(&self, commit: &Commit) -> Result<()> {
        let commit_oid = commit.oid().map(|oid| oid.to_string()).unwrap_or_default();

        writeln!(self.writer(), "{}", format!("commit {commit_oid}").yellow())?;
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer())?;
        writeln!(self.writer(), "    {}", commit.message())?;
        writeln!(self.writer())?;

        Ok(())
    }
}
