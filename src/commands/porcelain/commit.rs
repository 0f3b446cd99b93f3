use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, FileBlobs};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use std::io::Write;

impl Repository {
    /// Record the staged snapshot as a new commit on top of HEAD
    pub fn commit(&self, message: &str) -> Result<ObjectId> {
        self.ensure_initialized()?;

        let files = {
            let mut index = self.index();
            index.rehydrate()?;

            if index.is_empty() {
                return Err(Error::NothingToCommit);
            }
            index.snapshot()
        };

        // the stored format keeps the message on a single line
        let message = if message.contains(['\n', '\r']) {
            message
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            message.to_string()
        };

        let commit_id = self.write_commit(files, message.clone())?;

        writeln!(
            self.writer(),
            "Committed: {} {}",
            commit_id.to_short_oid(),
            message
        )?;

        Ok(commit_id)
    }

    /// Store a commit of `files` whose parent is HEAD, advance HEAD to it and
    /// clear the staging area
    pub(crate) fn write_commit(&self, files: FileBlobs, message: String) -> Result<ObjectId> {
        let parent = self.refs().read_head()?;
        let timestamp = self.config().commit_timestamp();

        let mut commit = Commit::new(parent, timestamp, message, files);
        let commit_id = self.database().put_commit(&mut commit)?;
        self.refs().update_head(&commit_id)?;

        let mut index = self.index();
        index.clear();
        index.write_updates()?;

        tracing::info!(
            commit = %commit_id,
            parent = ?commit.parent().map(ObjectId::as_ref),
            files = commit.files().len(),
            "created commit"
        );

        Ok(commit_id)
    }
}
