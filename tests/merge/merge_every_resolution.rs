use crate::common::command::{
    init_repository_dir, minigit_commit, minigit_merge, run_minigit_command,
};
use crate::common::file::{FileSpec, write_file};
use crate::common::{commit_field, head_commit_id};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeSet;
use std::path::Path;

/// Write, stage and commit a whole snapshot; anything left out is untracked
fn commit_snapshot(dir: &Path, files: &[(&str, &str)], message: &str) {
    for (name, content) in files {
        write_file(FileSpec::new(dir.join(name), content.to_string()));
        run_minigit_command(dir, &["add", name]).assert().success();
    }
    minigit_commit(dir, message).assert().success();
}

fn committed_paths(dir: &Path) -> Result<BTreeSet<String>, Box<dyn std::error::Error>> {
    let files = commit_field(dir, &head_commit_id(dir)?, "files")?;

    Ok(files
        .split(',')
        .filter_map(|entry| entry.split_once('=').map(|(path, _)| path.to_string()))
        .collect())
}

/// Every non-conflicting outcome at once: each file takes a different path
/// through base, master (current) and feature (target)
#[rstest]
fn merge_every_resolution(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    commit_snapshot(
        dir,
        &[
            ("same.txt", "base"),
            ("current_edit.txt", "base"),
            ("target_edit.txt", "base"),
            ("current_delete.txt", "base"),
            ("target_delete.txt", "base"),
            ("current_delete_target_edit.txt", "base"),
            ("current_edit_target_delete.txt", "base"),
            ("both_delete.txt", "base"),
        ],
        "base",
    );
    run_minigit_command(dir, &["branch", "feature"])
        .assert()
        .success();

    commit_snapshot(
        dir,
        &[
            ("same.txt", "both"),
            ("current_edit.txt", "current"),
            ("target_edit.txt", "base"),
            ("target_delete.txt", "base"),
            ("current_edit_target_delete.txt", "current"),
        ],
        "master work",
    );

    run_minigit_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_snapshot(
        dir,
        &[
            ("same.txt", "both"),
            ("current_edit.txt", "base"),
            ("target_edit.txt", "target"),
            ("current_delete.txt", "base"),
            ("current_delete_target_edit.txt", "target"),
            ("target_only.txt", "target"),
        ],
        "feature work",
    );

    run_minigit_command(dir, &["checkout", "master"])
        .assert()
        .success();
    let master_head = head_commit_id(dir)?;

    minigit_merge(dir, "feature")
        .assert()
        .success()
        .stdout(predicate::str::contains("Merge successful."))
        .stdout(predicate::str::contains("CONFLICT").not());

    // same change on both sides
    init_repository_dir.child("same.txt").assert("both");
    // one side changed, the other kept the base
    init_repository_dir.child("current_edit.txt").assert("current");
    init_repository_dir.child("target_edit.txt").assert("target");
    // deleted on one side, untouched on the other
    init_repository_dir
        .child("current_delete.txt")
        .assert(predicate::path::missing());
    init_repository_dir
        .child("target_delete.txt")
        .assert(predicate::path::missing());
    // deleted on one side, modified on the other: the modification wins
    init_repository_dir
        .child("current_delete_target_edit.txt")
        .assert("target");
    init_repository_dir
        .child("current_edit_target_delete.txt")
        .assert("current");
    // added only on the target
    init_repository_dir.child("target_only.txt").assert("target");
    // gone from both sides
    init_repository_dir
        .child("both_delete.txt")
        .assert(predicate::path::missing());

    let expected = [
        "current_delete_target_edit.txt",
        "current_edit.txt",
        "current_edit_target_delete.txt",
        "same.txt",
        "target_edit.txt",
        "target_only.txt",
    ]
    .into_iter()
    .map(str::to_string)
    .collect::<BTreeSet<_>>();
    assert_eq!(committed_paths(dir)?, expected);
    assert_eq!(commit_field(dir, &head_commit_id(dir)?, "parent")?, master_head);

    Ok(())
}
