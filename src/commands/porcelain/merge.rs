use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::merge::conflict::ConflictMarkers;
use crate::artifacts::merge::lca_finder::LcaFinder;
use crate::artifacts::merge::resolution::Resolution;
use crate::artifacts::objects::commit::{Commit, FileBlobs};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use bytes::Bytes;
use std::collections::BTreeSet;
use std::io::Write;

/// How a merge ended
///
/// A conflicted merge is a valid stopping point, not a failure: the working
/// tree holds marker-bearing files and the user finishes with `add` and
/// `commit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// HEAD already points at the target tip
    AlreadyUpToDate,
    /// Every file merged cleanly into this merge commit
    Merged(ObjectId),
    /// These paths hold conflict markers; nothing was committed
    Conflicted(Vec<String>),
}

impl Repository {
    /// Three-way merge of a branch into the current HEAD
    pub fn merge(&self, branch_name: &str) -> Result<MergeOutcome> {
        self.ensure_initialized()?;

        let branch = BranchName::try_parse(branch_name.to_string())
            .map_err(|_| Error::BranchMissing(branch_name.to_string()))?;
        let merge_oid = self.refs().read_branch(&branch)?;
        let head_oid = self.refs().read_head()?;

        let (head_oid, merge_oid) = match (head_oid, merge_oid) {
            (Some(head_oid), Some(merge_oid)) => (head_oid, merge_oid),
            (None, _) => {
                return Err(Error::NoCommitsYet(
                    "the current branch has no commits to merge into".to_string(),
                ));
            }
            (_, None) => {
                return Err(Error::NoCommitsYet(format!("branch '{branch}' has no commits")));
            }
        };

        if head_oid == merge_oid {
            writeln!(self.writer(), "Already up to date.")?;
            return Ok(MergeOutcome::AlreadyUpToDate);
        }

        let base_oid = {
            let database = self.database();
            let lca_finder = LcaFinder::new(|oid| Ok(database.get_commit(oid)?.parent().cloned()));

            lca_finder
                .find_lca(&head_oid, &merge_oid)?
                .ok_or_else(|| Error::NoCommonAncestor(head_oid.clone(), merge_oid.clone()))?
        };

        tracing::info!(
            %branch,
            head = %head_oid,
            target = %merge_oid,
            base = %base_oid,
            "merging branch"
        );

        let base = self.database().get_commit(&base_oid)?;
        let current = self.database().get_commit(&head_oid)?;
        let target = self.database().get_commit(&merge_oid)?;

        let (merged_paths, conflicts) = self.apply_merge(&base, &current, &target, &branch)?;

        if !conflicts.is_empty() {
            for path in &conflicts {
                writeln!(self.writer(), "CONFLICT (content): Merge conflict in {path}")?;
            }
            writeln!(
                self.writer(),
                "Automatic merge failed; fix conflicts and then commit the result."
            )?;

            return Ok(MergeOutcome::Conflicted(conflicts));
        }

        let files = self.stage_merged_files(merged_paths)?;
        let message = format!("Merge branch '{branch}' into {head_oid}");
        let commit_oid = self.write_commit(files, message)?;

        writeln!(self.writer(), "Merge successful.")?;

        Ok(MergeOutcome::Merged(commit_oid))
    }

    /// Resolve every path of the three snapshots into the working tree
    ///
    /// Returns the paths that now hold merged content and the paths that hold
    /// conflict markers.
    fn apply_merge(
        &self,
        base: &Commit,
        current: &Commit,
        target: &Commit,
        branch: &BranchName,
    ) -> Result<(Vec<String>, Vec<String>)> {
        let paths = base
            .files()
            .keys()
            .chain(current.files().keys())
            .chain(target.files().keys())
            .collect::<BTreeSet<_>>();
        let markers = ConflictMarkers::new(branch.as_ref());

        let mut merged = Vec::new();
        let mut conflicts = Vec::new();

        for path in paths {
            let base_content = self.blob_content(base, path)?;
            let current_content = self.blob_content(current, path)?;
            let target_content = self.blob_content(target, path)?;

            let resolution = Resolution::resolve(
                base_content.as_ref(),
                current_content.as_ref(),
                target_content.as_ref(),
            );
            tracing::debug!(%path, ?resolution, "resolved file");

            match resolution {
                Resolution::Clean(content) => {
                    self.workspace().write_file(path, &content)?;
                    self.database().put_blob(content)?;
                    merged.push(path.clone());
                }
                Resolution::Conflict { current, target } => {
                    let content = markers.wrap(&current, &target);
                    self.workspace().write_file(path, &content)?;
                    self.database().put_blob(content)?;
                    conflicts.push(path.clone());
                }
                Resolution::Delete => self.workspace().remove_file(path)?,
                Resolution::Absent => {}
            }
        }

        Ok((merged, conflicts))
    }

    fn blob_content(&self, commit: &Commit, path: &str) -> Result<Option<Bytes>> {
        commit
            .blob_for(path)
            .map(|blob_id| self.database().get_blob(blob_id).map(|blob| blob.into_content()))
            .transpose()
    }

    /// Re-read the merged files from disk and make them the staged snapshot
    fn stage_merged_files(&self, paths: Vec<String>) -> Result<FileBlobs> {
        let mut files = FileBlobs::new();
        for path in paths {
            let content = self.workspace().read_file(&path)?;
            let blob_id = self.database().put_blob(content)?;
            files.insert(path, blob_id);
        }

        let mut index = self.index();
        index.replace(files.clone());
        index.write_updates()?;

        Ok(files)
    }
}
