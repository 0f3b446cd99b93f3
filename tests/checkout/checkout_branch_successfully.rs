use crate::common::command::{commit_file, init_repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::{REPOSITORY_DIR, head_commit_id};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_branch_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_minigit_command(dir, &["branch", "feature"])
        .assert()
        .success();
    commit_file(dir, "a.txt", "moon", "moon on master");
    let master_head = head_commit_id(dir)?;

    run_minigit_command(dir, &["checkout", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to branch 'feature'"));

    init_repository_dir.child("a.txt").assert("hello");
    init_repository_dir
        .child(REPOSITORY_DIR)
        .child("refs/HEAD")
        .assert("ref: refs/heads/feature\n");

    run_minigit_command(dir, &["checkout", "master"])
        .assert()
        .success();

    init_repository_dir.child("a.txt").assert("moon");
    assert_eq!(head_commit_id(dir)?, master_head);

    Ok(())
}

#[rstest]
fn checkout_replaces_the_working_tree_exactly(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_minigit_command(dir, &["branch", "feature"])
        .assert()
        .success();

    // never committed anywhere, still swept away
    write_file(FileSpec::new(dir.join("scratch.txt"), "notes".to_string()));
    write_file(FileSpec::new(
        dir.join("nested").join("deep").join("draft.txt"),
        "draft".to_string(),
    ));
    // staged but not committed
    write_file(FileSpec::new(dir.join("staged.txt"), "staged".to_string()));
    run_minigit_command(dir, &["add", "staged.txt"])
        .assert()
        .success();

    run_minigit_command(dir, &["checkout", "feature"])
        .assert()
        .success();

    init_repository_dir.child("a.txt").assert("hello");
    init_repository_dir
        .child("scratch.txt")
        .assert(predicate::path::missing());
    init_repository_dir
        .child("nested/deep/draft.txt")
        .assert(predicate::path::missing());
    init_repository_dir
        .child("staged.txt")
        .assert(predicate::path::missing());
    // the repository itself survives the sweep, with an empty staging area
    init_repository_dir
        .child(REPOSITORY_DIR)
        .child("index")
        .assert("");
    assert!(!head_commit_id(dir)?.is_empty());

    Ok(())
}

#[rstest]
fn checkout_restores_nested_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    commit_file(dir, "src/lib/mod.txt", "module", "nested file");
    run_minigit_command(dir, &["branch", "nested"])
        .assert()
        .success();

    std::fs::remove_dir_all(dir.join("src"))?;

    run_minigit_command(dir, &["checkout", "nested"])
        .assert()
        .success();

    init_repository_dir.child("src/lib/mod.txt").assert("module");
    // only the last commit's snapshot is tracked on this branch
    init_repository_dir
        .child("a.txt")
        .assert(predicate::path::missing());

    Ok(())
}
