// File: crates/history-core/src/history.rs
// Summary: History access seam; `HistorySource` trait and the `git` command-line backend.

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Revision;
use crate::window::DateWindow;

/// Snapshot file tracked by default, relative to the repository root.
pub const DEFAULT_SNAPSHOT_FILE: &str = "price.json";

/// Read access to the recorded history of one file.
pub trait HistorySource {
    /// Revisions that modified `file`, oldest first. Implementations may
    /// over-approximate the window; callers filter again.
    fn list_revisions(&self, file: &Path, window: &DateWindow) -> Result<Vec<Revision>>;

    /// Raw content of `file` as recorded at `revision`.
    fn read_file(&self, revision: &str, file: &Path) -> Result<String>;
}

/// History backed by the `git` executable on `PATH`.
#[derive(Clone, Debug)]
pub struct GitCli {
    repo: PathBuf,
}

impl GitCli {
    /// Open `repo`, which must contain a `.git` entry (directory or worktree file).
    pub fn open(repo: impl AsRef<Path>) -> Result<Self> {
        let repo = repo.as_ref();
        let repo = repo.canonicalize().unwrap_or_else(|_| repo.to_path_buf());
        if !repo.join(".git").exists() {
            return Err(Error::NotARepository(repo));
        }
        Ok(Self { repo })
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }

    fn run(&self, args: &[String]) -> Result<String> {
        debug!(repo = %self.repo.display(), ?args, "git");
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.repo)
            .args(args)
            .output()
            .map_err(|e| Error::HistoryAccess(format!("failed to launch git: {e}")))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::HistoryAccess(format!(
                "git {} exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }
        String::from_utf8(output.stdout)
            .map_err(|e| Error::HistoryAccess(format!("git output is not UTF-8: {e}")))
    }
}

impl HistorySource for GitCli {
    fn list_revisions(&self, file: &Path, window: &DateWindow) -> Result<Vec<Revision>> {
        let mut args = vec!["log".to_string(), "--reverse".to_string(), "--format=%H|%cI".to_string()];
        if let Some(since) = window.since {
            args.push(format!("--since={since} 00:00:00 +0000"));
        }
        if let Some(until) = window.until {
            args.push(format!("--until={until} 23:59:59 +0000"));
        }
        args.push("--".to_string());
        args.push(git_path(file));

        let out = self.run(&args)?;
        out.lines()
            .filter(|line| !line.trim().is_empty())
            .map(parse_log_line)
            .collect()
    }

    fn read_file(&self, revision: &str, file: &Path) -> Result<String> {
        self.run(&["show".to_string(), format!("{revision}:{}", git_path(file))])
    }
}

/// Parse one `%H|%cI` line of `git log` output.
fn parse_log_line(line: &str) -> Result<Revision> {
    let (sha, iso) = line
        .split_once('|')
        .ok_or_else(|| Error::HistoryAccess(format!("unexpected git log line: {line}")))?;
    let timestamp = DateTime::parse_from_rfc3339(iso.trim())
        .map_err(|e| Error::HistoryAccess(format!("bad commit time '{iso}': {e}")))?
        .with_timezone(&Utc);
    Ok(Revision::new(sha.trim(), timestamp))
}

/// Git pathspecs and `rev:path` always use forward slashes.
fn git_path(file: &Path) -> String {
    file.to_string_lossy().replace('\\', "/")
}
