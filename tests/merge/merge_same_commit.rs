use crate::common::command::{init_repository_dir, minigit_merge, run_minigit_command};
use crate::common::{count_objects, head_commit_id};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merge_same_commit(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = head_commit_id(dir)?;
    let objects = count_objects(dir)?;

    run_minigit_command(dir, &["branch", "same"])
        .assert()
        .success();

    minigit_merge(dir, "same")
        .assert()
        .success()
        .stdout(predicate::eq("Already up to date.\n"));

    // merging a branch with itself is a no-op too
    minigit_merge(dir, "master")
        .assert()
        .success()
        .stdout(predicate::eq("Already up to date.\n"));

    assert_eq!(head_commit_id(dir)?, head);
    assert_eq!(count_objects(dir)?, objects);
    init_repository_dir.child("a.txt").assert("hello");

    Ok(())
}
