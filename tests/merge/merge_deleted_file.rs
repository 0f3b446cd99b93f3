use crate::common::command::{
    commit_file, init_repository_dir, minigit_merge, run_minigit_command,
};
use crate::common::{commit_field, head_commit_id};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;

/// `b.txt` exists at the merge base and on master, unchanged; feature's
/// snapshot no longer has it
#[rstest]
fn merge_deleted_file(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    // the merge base snapshot tracks b.txt
    commit_file(dir, "b.txt", "bee", "base");
    run_minigit_command(dir, &["branch", "feature"])
        .assert()
        .success();

    // master keeps b.txt as it was and changes a.txt
    run_minigit_command(dir, &["add", "b.txt"])
        .assert()
        .success();
    commit_file(dir, "a.txt", "moon", "master work");

    // feature's snapshot only tracks c.txt
    run_minigit_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir, "c.txt", "sea", "feature work");

    run_minigit_command(dir, &["checkout", "master"])
        .assert()
        .success();
    init_repository_dir.child("b.txt").assert("bee");

    minigit_merge(dir, "feature")
        .assert()
        .success()
        .stdout(predicate::str::contains("Merge successful."));

    init_repository_dir
        .child("b.txt")
        .assert(predicate::path::missing());
    let files = commit_field(dir, &head_commit_id(dir)?, "files")?;
    assert!(!files.contains("b.txt="));
    assert!(files.contains("c.txt="));

    Ok(())
}
