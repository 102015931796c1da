use crate::common::command::{
    diverged_repository_dir, git, git_commit, git_stdout, init_repository_dir, premerge_stdout,
    repository_dir, run_git_command, run_premerge_command, write,
};
use crate::common::file::{read_file, write_file, write_generated_files};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_is_blocked_by_local_copies_of_incoming_changes(diverged_repository_dir: TempDir) {
    run_git_command(diverged_repository_dir.path(), &["merge", "--ff-only", "dev"])
        .assert()
        .failure();
}

#[rstest]
fn revert_and_remove_files_matching_target(
    diverged_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_repository_dir.path();

    let stdout = premerge_stdout(dir, &["dev"]);

    assert_eq!(
        stdout,
        "[I] comparing against dev\n\
         [C] revert a.txt\n\
         [R] remove b.txt\n\
         [I] reverted 1, removed 1, restored 0, warnings 0, errors 0\n"
    );
    diverged_repository_dir.child("a.txt").assert("Hello World");
    diverged_repository_dir
        .child("b.txt")
        .assert(predicates::path::missing());
    assert_eq!(git_stdout(dir, &["status", "--porcelain"]), "");

    git(dir, &["merge", "-q", "--ff-only", "dev"]);
    diverged_repository_dir.child("a.txt").assert("Hello, World");
    diverged_repository_dir.child("b.txt").assert("I'm alive");

    Ok(())
}

#[rstest]
fn second_run_is_a_no_op(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();

    premerge_stdout(dir, &["dev"]);
    let stdout = premerge_stdout(dir, &["dev"]);

    assert_eq!(
        stdout,
        "[I] comparing against dev\n\
         [I] reverted 0, removed 0, restored 0, warnings 0, errors 0\n"
    );
}

#[rstest]
fn emptied_directories_are_pruned(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write(dir, "a.txt", "Hello World");
    git_commit(dir, "Initial commit");
    git(dir, &["checkout", "-q", "-b", "dev"]);
    write(dir, "docs/guide/intro.md", "# Intro");
    git_commit(dir, "Add docs");
    git(dir, &["checkout", "-q", "main"]);
    write(dir, "docs/guide/intro.md", "# Intro");

    let stdout = premerge_stdout(dir, &["dev"]);

    assert!(stdout.contains("[R] remove docs/guide/intro.md\n"));
    init_repository_dir
        .child("docs")
        .assert(predicates::path::missing());
    init_repository_dir.child("a.txt").assert("Hello World");
}

#[rstest]
fn runs_from_a_subdirectory(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write(dir, "src/lib.rs", "pub mod old;");
    git_commit(dir, "Initial commit");
    git(dir, &["checkout", "-q", "-b", "dev"]);
    write(dir, "src/new.rs", "pub fn new() {}");
    git_commit(dir, "Add new module");
    git(dir, &["checkout", "-q", "main"]);
    write(dir, "src/new.rs", "pub fn new() {}");

    run_premerge_command(&dir.join("src"), &["dev"])
        .assert()
        .success()
        .stdout(predicates::str::contains("[R] remove src/new.rs\n"));

    init_repository_dir
        .child("src/new.rs")
        .assert(predicates::path::missing());
    init_repository_dir.child("src/lib.rs").assert("pub mod old;");
}

#[rstest]
fn staged_changes_matching_target_are_reverted(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    git(dir, &["add", "a.txt"]);

    let stdout = premerge_stdout(dir, &["dev"]);

    assert!(stdout.contains("[C] revert a.txt\n"));
    diverged_repository_dir.child("a.txt").assert("Hello World");
    assert_eq!(git_stdout(dir, &["diff", "--cached", "--name-only"]), "");
}

#[rstest]
fn outside_a_repository_fails_with_fatal_status(repository_dir: TempDir) {
    run_premerge_command(repository_dir.path(), &["dev"])
        .assert()
        .code(128)
        .stdout("")
        .stderr(predicates::str::contains("not a git repository"));
}

#[rstest]
fn every_copy_of_an_incoming_file_is_removed(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write(dir, "a.txt", "Hello World");
    git_commit(dir, "Initial commit");
    git(dir, &["checkout", "-q", "-b", "dev"]);
    let files = write_generated_files(&dir.join("generated"), 8);
    git_commit(dir, "Add generated files");
    git(dir, &["checkout", "-q", "main"]);
    for file in &files {
        write_file(file.clone());
    }

    let stdout = premerge_stdout(dir, &["dev"]);

    assert!(stdout.ends_with("removed 8, restored 0, warnings 0, errors 0\n"));
    init_repository_dir
        .child("generated")
        .assert(predicates::path::missing());

    git(dir, &["merge", "-q", "--ff-only", "dev"]);
    for file in files {
        let expected = file.content.clone();
        assert_eq!(read_file(file.path), expected);
    }
}

#[rstest]
fn staged_work_found_nowhere_else_is_kept(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    write(dir, "a.txt", "precious staged work");
    git(dir, &["add", "a.txt"]);
    write(dir, "a.txt", "Hello, World");
    let staged = git_stdout(dir, &["rev-parse", ":a.txt"]).trim().to_string();

    let stdout = premerge_stdout(dir, &["dev"]);

    assert!(stdout.contains(&format!(
        "[!] a.txt: staged {staged} matches neither HEAD nor dev\n"
    )));
    assert!(!stdout.contains("[C] revert a.txt"));
    assert_eq!(
        git_stdout(dir, &["show", ":a.txt"]),
        "precious staged work"
    );
    diverged_repository_dir.child("a.txt").assert("Hello, World");
}
