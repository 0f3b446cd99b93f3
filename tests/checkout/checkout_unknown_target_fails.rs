use crate::common::command::{init_repository_dir, run_minigit_command};
use crate::common::{REPOSITORY_DIR, head_commit_id};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::unknown_branch("nope")]
#[case::unknown_commit("0123456789abcdef")]
#[case::blob_hash("000000310f923099")]
fn checkout_unknown_target_fails(
    init_repository_dir: TempDir,
    #[case] target: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = head_commit_id(dir)?;

    run_minigit_command(dir, &["checkout", target])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "neither branch '{target}' nor commit '{target}' found"
        )));

    // nothing moved
    assert_eq!(head_commit_id(dir)?, head);
    init_repository_dir
        .child(REPOSITORY_DIR)
        .child("refs/HEAD")
        .assert("ref: refs/heads/master\n");
    init_repository_dir.child("a.txt").assert("hello");

    Ok(())
}
