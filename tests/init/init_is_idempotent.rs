use crate::common::command::{init_repository_dir, run_minigit_command};
use crate::common::{REPOSITORY_DIR, head_commit_id};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_is_idempotent(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let head_before = head_commit_id(init_repository_dir.path())?;

    run_minigit_command(init_repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));

    // existing history is left alone
    assert_eq!(head_commit_id(init_repository_dir.path())?, head_before);
    init_repository_dir
        .child(REPOSITORY_DIR)
        .child("refs/HEAD")
        .assert("ref: refs/heads/master\n");

    Ok(())
}
