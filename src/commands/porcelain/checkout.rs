use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;

const DETACHMENT_NOTICE: &str = r#"
You are in 'detached HEAD' state. You can look around, make experimental
changes and commit them, and you can discard any commits you make in this
state without impacting any branches by performing another checkout.

If you want to create a new branch to retain commits you create, you may
do so (now or later) by using the branch command. Example:

    minigit branch <new-branch-name>
"#;

impl Repository {
    /// Switch to a branch, or detach HEAD at a commit
    ///
    /// The working tree is replaced exactly: files the target commit does not
    /// track are deleted, whether or not they were ever committed.
    pub fn checkout(&self, target: &str) -> Result<Head> {
        self.ensure_initialized()?;

        let (new_head, target_oid) = self.resolve_checkout_target(target)?;
        let target_commit = self.database().get_commit(&target_oid)?;

        // HEAD moves only once the working tree matches the target
        self.replace_working_tree(&target_commit)?;
        self.refs().set_head(&new_head)?;

        let mut index = self.index();
        index.clear();
        index.write_updates()?;
        drop(index);

        tracing::info!(%target, commit = %target_oid, "checked out");
        self.print_new_head(&new_head, target, &target_commit)?;

        Ok(new_head)
    }

    /// A branch name wins over a commit hash with the same spelling
    fn resolve_checkout_target(&self, target: &str) -> Result<(Head, ObjectId)> {
        if let Ok(branch) = BranchName::try_parse(target.to_string())
            && self.refs().branch_exists(&branch)
        {
            let oid = self.refs().read_branch(&branch)?.ok_or_else(|| {
                Error::NoCommitsYet(format!("branch '{branch}' has no commits to check out"))
            })?;
            return Ok((Head::Symbolic(branch), oid));
        }

        let not_found = || Error::BranchOrCommitNotFound(target.to_string());
        let oid = ObjectId::try_parse(target.to_string()).map_err(|_| not_found())?;

        // only a stored commit qualifies, not a blob or a missing object
        match self.database().get_commit(&oid) {
            Ok(_) => Ok((Head::Detached(oid.clone()), oid)),
            Err(Error::ObjectNotFound(_) | Error::CorruptObject { .. }) => Err(not_found()),
            Err(e) => Err(e),
        }
    }

    fn replace_working_tree(&self, target_commit: &Commit) -> Result<()> {
        let tracked = target_commit
            .files()
            .keys()
            .map(PathBuf::from)
            .collect::<HashSet<_>>();

        // everything that can fail on read happens before the tree is touched
        let stale_paths = self
            .workspace()
            .list_paths()?
            .into_iter()
            .filter(|path| !tracked.contains(path))
            .collect::<Vec<_>>();
        let contents = target_commit
            .files()
            .iter()
            .map(|(key, blob_id)| -> Result<_> { Ok((key, self.database().get_blob(blob_id)?)) })
            .collect::<Result<Vec<_>>>()?;

        for path in stale_paths {
            tracing::debug!(path = %path.display(), "removing untracked file");
            self.workspace().remove_file(&path)?;
        }

        for (key, blob) in contents {
            self.workspace().write_file(key, blob.content())?;
        }

        Ok(())
    }

    fn print_new_head(&self, new_head: &Head, target: &str, commit: &Commit) -> Result<()> {
        match new_head {
            Head::Symbolic(branch) => {
                writeln!(self.writer(), "Switched to branch '{branch}'")?;
            }
            Head::Detached(oid) => {
                writeln!(self.writer(), "Note: checking out '{target}'.\n{DETACHMENT_NOTICE}")?;
                writeln!(
                    self.writer(),
                    "HEAD is now at {} {}",
                    oid.to_short_oid(),
                    commit.message()
                )?;
            }
        }

        Ok(())
    }
}
