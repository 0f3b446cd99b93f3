use crate::common::command::{commit_file, init_repository_dir, run_minigit_command};
use crate::common::{COMMIT_DATE, head_commit_id};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_linear_history_newest_first(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = head_commit_id(dir)?;
    commit_file(dir, "b.txt", "bee", "second");
    let second = head_commit_id(dir)?;

    let assert = run_minigit_command(dir, &["log"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;

    let expected = format!(
        "commit {second}\nDate:   {COMMIT_DATE}\n\n    second\n\n\
         commit {first}\nDate:   {COMMIT_DATE}\n\n    first\n\n"
    );
    pretty_assertions::assert_eq!(stdout, expected);

    Ok(())
}
