//! Backend implementation driving the `git` binary
//!
//! Every call runs from the repository top level with `--literal-pathspecs`,
//! so paths are never interpreted as glob patterns. Path listings are
//! requested with `-z` and decoded as NUL-terminated records, which keeps file
//! names containing spaces, quotes or newlines intact.

use crate::areas::backend::{Backend, HEAD, RepositoryState};
use crate::artifacts::errors::BackendError;
use crate::artifacts::objects::object_id::ObjectId;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Exit status git uses for "not found" in quiet verification modes
const NOT_FOUND_EXIT_CODE: i32 = 1;

#[derive(Debug)]
pub struct GitCli {
    /// Top level of the working tree
    root: Box<Path>,
}

impl GitCli {
    /// Locate the repository containing `dir`.
    ///
    /// Returns `Ok(None)` when `dir` is not inside a git working tree.
    pub fn discover(dir: &Path) -> Result<Option<Self>, BackendError> {
        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .current_dir(dir)
            .output()?;

        if !output.status.success() {
            tracing::debug!(
                dir = %dir.display(),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "not inside a git working tree"
            );
            return Ok(None);
        }

        let stdout = output.stdout.strip_suffix(b"\n").unwrap_or(&output.stdout);
        let root = bytes_to_path(stdout);
        tracing::debug!(root = %root.display(), "discovered repository");

        Ok(Some(Self::new(root.into_boxed_path())))
    }

    pub fn new(root: Box<Path>) -> Self {
        GitCli { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run git with `args`, returning the raw output whatever the exit status.
    fn git_output<I, S>(&self, args: I) -> Result<(String, Output), BackendError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_os_string())
            .collect::<Vec<_>>();
        let command = describe_command(&args);
        tracing::debug!(%command, "running");

        let output = Command::new("git")
            .arg("--literal-pathspecs")
            .args(&args)
            .current_dir(&self.root)
            .output()?;

        tracing::debug!(%command, status = ?output.status.code(), "finished");
        Ok((command, output))
    }

    /// Run git with `args` and return its stdout, failing on a non-zero exit.
    fn git_stdout<I, S>(&self, args: I) -> Result<Vec<u8>, BackendError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let (command, output) = self.git_output(args)?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            Err(command_failed(command, &output))
        }
    }

    /// Run a quiet verification command: exit 0 is `true`, exit 1 is `false`.
    fn git_verify<I, S>(&self, args: I) -> Result<Option<Vec<u8>>, BackendError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let (command, output) = self.git_output(args)?;

        match output.status.code() {
            Some(0) => Ok(Some(output.stdout)),
            Some(NOT_FOUND_EXIT_CODE) => Ok(None),
            _ => Err(command_failed(command, &output)),
        }
    }

    /// Resolve an object name to its id, `None` when it names nothing.
    fn verify_object(&self, spec: &OsStr) -> Result<Option<ObjectId>, BackendError> {
        self.git_verify([
            OsStr::new("rev-parse"),
            OsStr::new("--verify"),
            OsStr::new("--quiet"),
            spec,
        ])?
        .map(|stdout| ObjectId::try_parse_bytes(&stdout))
        .transpose()
    }
}

impl RepositoryState for GitCli {
    fn current_branch(&self) -> Result<Option<String>, BackendError> {
        let branch = self.git_verify(["symbolic-ref", "--quiet", "--short", HEAD])?;

        Ok(branch
            .map(|raw| String::from_utf8_lossy(&raw).trim().to_string())
            .filter(|name| !name.is_empty()))
    }

    fn upstream_of(&self, branch: &str) -> Result<Option<String>, BackendError> {
        let pattern = format!("refs/heads/{branch}");
        let stdout = self.git_stdout(["for-each-ref", "--format=%(upstream)", pattern.as_str()])?;
        let upstream = String::from_utf8_lossy(&stdout).trim().to_string();

        Ok((!upstream.is_empty()).then_some(upstream))
    }

    fn has_ref(&self, full_ref: &str) -> Result<bool, BackendError> {
        // rev-parse rather than show-ref: malformed names are "not found"
        // instead of a fatal error, and the symbolic name it prints rules out
        // a match through some other ref.
        let resolved = self.git_verify([
            "rev-parse",
            "--verify",
            "--quiet",
            "--symbolic-full-name",
            full_ref,
        ])?;

        Ok(resolved.is_some_and(|raw| String::from_utf8_lossy(&raw).trim() == full_ref))
    }

    fn resolve_blob(&self, rev: &str, path: &Path) -> Result<Option<ObjectId>, BackendError> {
        let mut spec = OsString::from(format!("{rev}:"));
        spec.push(path.as_os_str());

        self.verify_object(&spec)
    }

    fn staged_blob(&self, path: &Path) -> Result<Option<ObjectId>, BackendError> {
        // `:<path>` names the stage 0 entry; unmerged paths make git fail.
        let mut spec = OsString::from(":");
        spec.push(path.as_os_str());

        self.verify_object(&spec)
    }

    fn hash_file(&self, path: &Path) -> Result<ObjectId, BackendError> {
        let stdout = self.git_stdout([
            OsStr::new("hash-object"),
            OsStr::new("--"),
            path.as_os_str(),
        ])?;

        ObjectId::try_parse_bytes(&stdout)
    }

    fn modified_paths(&self) -> Result<Vec<PathBuf>, BackendError> {
        let stdout = self.git_stdout([
            "diff",
            "--name-only",
            "-z",
            "--no-renames",
            "--diff-filter=MTD",
            HEAD,
            "--",
        ])?;

        Ok(split_records(&stdout).collect())
    }

    fn untracked_paths(&self) -> Result<Vec<PathBuf>, BackendError> {
        let stdout = self.git_stdout(["ls-files", "-z", "--others", "--exclude-standard"])?;

        Ok(split_records(&stdout).collect())
    }

    fn is_deleted(&self, path: &Path) -> Result<bool, BackendError> {
        let stdout = self.git_stdout([
            OsStr::new("status"),
            OsStr::new("--porcelain=v1"),
            OsStr::new("-z"),
            OsStr::new("--no-renames"),
            OsStr::new("--untracked-files=no"),
            OsStr::new("--"),
            path.as_os_str(),
        ])?;

        Ok(split_status_entries(&stdout)
            .any(|(status, entry)| entry == path && status.contains(&b'D')))
    }
}

impl Backend for GitCli {
    fn checkout_from_head(&self, path: &Path) -> Result<(), BackendError> {
        self.git_stdout([
            OsStr::new("checkout"),
            OsStr::new(HEAD),
            OsStr::new("--"),
            path.as_os_str(),
        ])?;

        Ok(())
    }
}

fn describe_command(args: &[OsString]) -> String {
    let args = args
        .iter()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ");
    format!("git {args}")
}

fn command_failed(command: String, output: &Output) -> BackendError {
    BackendError::GitCommand {
        command,
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        exit_code: output.status.code(),
    }
}

/// Decode NUL-terminated path records.
pub(crate) fn split_records(raw: &[u8]) -> impl Iterator<Item = PathBuf> + '_ {
    raw.split(|byte| *byte == 0)
        .filter(|record| !record.is_empty())
        .map(bytes_to_path)
}

/// Decode `git status --porcelain=v1 -z` entries into `(XY, path)` pairs.
fn split_status_entries(raw: &[u8]) -> impl Iterator<Item = (&[u8], PathBuf)> {
    raw.split(|byte| *byte == 0)
        .filter(|record| record.len() > 3)
        .map(|record| (&record[..2], bytes_to_path(&record[3..])))
}

#[cfg(unix)]
fn bytes_to_path(raw: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(raw))
}

#[cfg(not(unix))]
fn bytes_to_path(raw: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(raw).into_owned())
}
