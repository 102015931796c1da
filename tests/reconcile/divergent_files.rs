use crate::common::command::{
    git, git_commit, git_stdout, init_repository_dir, premerge_stdout, write,
};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// `a.txt` is "base" on `main`; `dev` changes it to "theirs" and adds `b.txt`.
#[fixture]
fn repository_with_dev(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir.path();

    write(dir, "a.txt", "base");
    git_commit(dir, "Initial commit");
    git(dir, &["checkout", "-q", "-b", "dev"]);
    write(dir, "a.txt", "theirs");
    write(dir, "b.txt", "I'm alive");
    git_commit(dir, "Change on dev");
    git(dir, &["checkout", "-q", "main"]);

    init_repository_dir
}

fn rev_parse(dir: &std::path::Path, rev: &str) -> String {
    git_stdout(dir, &["rev-parse", rev]).trim().to_string()
}

#[rstest]
fn warn_on_three_way_divergence(repository_with_dev: TempDir) {
    let dir = repository_with_dev.path();
    write(dir, "a.txt", "ours");
    let local = git_stdout(dir, &["hash-object", "a.txt"]).trim().to_string();
    let target = rev_parse(dir, "dev:a.txt");
    let head = rev_parse(dir, "HEAD:a.txt");

    let stdout = premerge_stdout(dir, &["dev"]);

    assert_eq!(
        stdout,
        format!(
            "[I] comparing against dev\n\
             [!] a.txt: local {local} differs from dev {target} (HEAD {head})\n\
             [I] reverted 0, removed 0, restored 0, warnings 1, errors 0\n"
        )
    );
    repository_with_dev.child("a.txt").assert("ours");
}

#[rstest]
fn skip_when_head_matches_target(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write(dir, "a.txt", "base");
    git_commit(dir, "Initial commit");
    git(dir, &["checkout", "-q", "-b", "dev"]);
    write(dir, "c.txt", "unrelated");
    git_commit(dir, "Unrelated change");
    git(dir, &["checkout", "-q", "main"]);
    write(dir, "a.txt", "ours");

    let stdout = premerge_stdout(dir, &["dev"]);

    assert_eq!(
        stdout,
        "[I] comparing against dev\n\
         [I] reverted 0, removed 0, restored 0, warnings 0, errors 0\n"
    );
    init_repository_dir.child("a.txt").assert("ours");
}

#[rstest]
fn warn_on_untracked_collision(repository_with_dev: TempDir) {
    let dir = repository_with_dev.path();
    write(dir, "b.txt", "I'm dead");

    let stdout = premerge_stdout(dir, &["dev"]);

    let warnings = stdout
        .lines()
        .filter(|line| line.starts_with("[!] b.txt: local "))
        .count();
    assert_eq!(warnings, 1);
    assert!(!stdout.contains("(HEAD "));
    repository_with_dev.child("b.txt").assert("I'm dead");
}

#[rstest]
fn untracked_file_absent_from_target_is_left_alone(repository_with_dev: TempDir) {
    let dir = repository_with_dev.path();
    write(dir, "notes.txt", "mine");

    let stdout = premerge_stdout(dir, &["dev"]);

    assert!(!stdout.contains("notes.txt"));
    repository_with_dev.child("notes.txt").assert("mine");
}

#[rstest]
fn ignored_files_are_not_candidates(repository_with_dev: TempDir) {
    let dir = repository_with_dev.path();
    write(dir, ".git/info/exclude", "b.txt\n");
    write(dir, "b.txt", "I'm alive");

    let stdout = premerge_stdout(dir, &["dev"]);

    assert!(!stdout.contains("b.txt"));
    repository_with_dev.child("b.txt").assert("I'm alive");
}

#[rstest]
fn tracked_file_missing_from_target_is_reported(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write(dir, "a.txt", "base");
    write(dir, "gone.txt", "soon gone");
    git_commit(dir, "Initial commit");
    git(dir, &["checkout", "-q", "-b", "dev"]);
    git(dir, &["rm", "-q", "gone.txt"]);
    git(dir, &["commit", "-q", "-m", "Drop gone.txt"]);
    git(dir, &["checkout", "-q", "main"]);
    write(dir, "gone.txt", "still here");

    let stdout = premerge_stdout(dir, &["dev"]);

    assert!(stdout.contains("[E] gone.txt: tracked file not found on dev\n"));
    assert!(stdout.ends_with("warnings 0, errors 1\n"));
    init_repository_dir.child("gone.txt").assert("still here");
}
