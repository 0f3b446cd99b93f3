use crate::common::command::{commit_file, init_repository_dir, run_minigit_command};
use crate::common::{REPOSITORY_DIR, branch_commit_id, head_commit_id};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_commit_detaches_head(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = head_commit_id(dir)?;
    commit_file(dir, "a.txt", "world", "second");
    let second = head_commit_id(dir)?;

    run_minigit_command(dir, &["checkout", &first])
        .assert()
        .success()
        .stdout(predicate::str::contains("detached HEAD"))
        .stdout(predicate::str::contains(format!(
            "HEAD is now at {} first",
            &first[..7]
        )));

    init_repository_dir
        .child(REPOSITORY_DIR)
        .child("refs/HEAD")
        .assert(format!("{first}\n"));
    init_repository_dir.child("a.txt").assert("hello");
    // the branch is left where it was
    assert_eq!(branch_commit_id(dir, "master")?, second);

    Ok(())
}

#[rstest]
fn commits_on_a_detached_head_move_only_head(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = head_commit_id(dir)?;

    run_minigit_command(dir, &["checkout", &first])
        .assert()
        .success();
    commit_file(dir, "b.txt", "bee", "detached work");

    let detached = head_commit_id(dir)?;
    assert_ne!(detached, first);
    assert_eq!(branch_commit_id(dir, "master")?, first);
    init_repository_dir
        .child(REPOSITORY_DIR)
        .child("refs/HEAD")
        .assert(format!("{detached}\n"));

    Ok(())
}
