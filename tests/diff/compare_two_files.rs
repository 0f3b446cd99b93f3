use crate::common::command::{repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn identical_files(repository_dir: TempDir) {
    let dir = repository_dir.path();
    write_file(FileSpec::new(dir.join("left.txt"), "same\nlines\n".to_string()));
    write_file(FileSpec::new(dir.join("right.txt"), "same\nlines\n".to_string()));

    // no repository needed
    run_minigit_command(dir, &["diff", "left.txt", "right.txt"])
        .assert()
        .success()
        .stdout(predicate::eq("Files are identical.\n"));
}

#[rstest]
fn differing_lines_are_listed_by_position(repository_dir: TempDir) {
    let dir = repository_dir.path();
    write_file(FileSpec::new(dir.join("left.txt"), "a\nb\nc\n".to_string()));
    write_file(FileSpec::new(dir.join("right.txt"), "a\nB\n".to_string()));

    run_minigit_command(dir, &["diff", "left.txt", "right.txt"])
        .assert()
        .success()
        .stdout(predicate::eq("Line 2:\n< b\n> B\nLine 3:\n< c\n"));
}

#[rstest]
fn missing_file_fails(repository_dir: TempDir) {
    let dir = repository_dir.path();
    write_file(FileSpec::new(dir.join("left.txt"), "a\n".to_string()));

    run_minigit_command(dir, &["diff", "left.txt", "right.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found: right.txt"));
}
