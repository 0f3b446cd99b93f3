use crate::common::COMMIT_DATE;
use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository holding a single commit "first" with `a.txt` = "hello"
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hello".to_string(),
    ));

    run_minigit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    minigit_commit(repository_dir.path(), "first")
        .assert()
        .success();

    repository_dir
}

pub fn run_minigit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("minigit").expect("Failed to find minigit binary");
    cmd.env_remove("MINIGIT_DIR");
    cmd.env_remove("MINIGIT_HASH");
    cmd.envs(vec![("NO_COLOR", "1"), ("CLICOLOR", "0"), ("MINIGIT_LOG", "warn")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn minigit_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_minigit_command(dir, &["commit", "-m", message]);
    cmd.env("MINIGIT_COMMIT_DATE", COMMIT_DATE); // %Y-%m-%d %H:%M:%S
    cmd
}

/// Write a file, stage it and commit it
pub fn commit_file(dir: &Path, file_name: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(file_name), content.to_string()));

    run_minigit_command(dir, &["add", file_name])
        .assert()
        .success();
    minigit_commit(dir, message).assert().success();
}

pub fn minigit_merge(dir: &Path, branch: &str) -> Command {
    let mut cmd = run_minigit_command(dir, &["merge", branch]);
    cmd.env("MINIGIT_COMMIT_DATE", COMMIT_DATE);
    cmd
}
