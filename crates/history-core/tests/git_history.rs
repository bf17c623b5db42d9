// File: crates/history-core/tests/git_history.rs
// Purpose: GitCli against a real throwaway repository. Skips when `git` is not installed.

use std::path::Path;
use std::process::Command;

use chrono::{NaiveDate, TimeZone, Utc};
use history_core::{
    aggregate, BundleMultipliers, Cadence, CollectOptions, DateWindow, GitCli, HistorySource, SeriesBuilder,
};

fn git_available() -> bool {
    Command::new("git").arg("--version").output().map(|o| o.status.success()).unwrap_or(false)
}

fn git(repo: &Path, args: &[&str], date: Option<&str>) {
    let mut cmd = Command::new("git");
    cmd.arg("-C").arg(repo).args(["-c", "user.name=tester", "-c", "user.email=tester@example.com"]).args(args);
    if let Some(date) = date {
        cmd.env("GIT_AUTHOR_DATE", date).env("GIT_COMMITTER_DATE", date);
    }
    let out = cmd.output().expect("spawn git");
    assert!(out.status.success(), "git {args:?}: {}", String::from_utf8_lossy(&out.stderr));
}

fn commit_snapshot(repo: &Path, body: &str, date: &str) {
    std::fs::write(repo.join("price.json"), body).unwrap();
    git(repo, &["add", "price.json"], None);
    git(repo, &["commit", "-q", "-m", "snapshot"], Some(date));
}

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    git(dir.path(), &["init", "-q"], None);
    commit_snapshot(dir.path(), r#"[{"name":"老式钢盔","price":100}]"#, "2025-09-01T09:00:00+00:00");
    commit_snapshot(dir.path(), r#"[{"name":"老式钢盔","price":200}]"#, "2025-09-01T18:00:00+00:00");
    // Unrelated change: not a revision of price.json.
    std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
    git(dir.path(), &["add", "notes.txt"], None);
    git(dir.path(), &["commit", "-q", "-m", "notes"], Some("2025-09-02T09:00:00+00:00"));
    commit_snapshot(dir.path(), r#"[{"name":"老式钢盔","price":90}]"#, "2025-09-03T08:00:00+08:00");
    dir
}

#[test]
fn lists_file_revisions_oldest_first() {
    if !git_available() {
        eprintln!("[git_history] git not found; skipping");
        return;
    }
    let dir = fixture();
    let git = GitCli::open(dir.path()).unwrap();
    let revs = git.list_revisions(Path::new("price.json"), &DateWindow::unbounded()).unwrap();
    assert_eq!(revs.len(), 3);
    assert_eq!(revs[0].timestamp, Utc.with_ymd_and_hms(2025, 9, 1, 9, 0, 0).unwrap());
    // +08:00 commit time normalized to UTC.
    assert_eq!(revs[2].timestamp, Utc.with_ymd_and_hms(2025, 9, 3, 0, 0, 0).unwrap());

    let content = git.read_file(&revs[1].id, Path::new("price.json")).unwrap();
    assert!(content.contains("200"));
}

#[test]
fn daily_series_from_git() {
    if !git_available() {
        eprintln!("[git_history] git not found; skipping");
        return;
    }
    let dir = fixture();
    let git = GitCli::open(dir.path()).unwrap();
    let items = vec!["老式钢盔".to_string()];
    let multipliers = BundleMultipliers::classify(&items, 60);
    let report = SeriesBuilder::new(&git, &multipliers, CollectOptions::default()).collect(&items).unwrap();

    let table = aggregate(&report.series, Cadence::Daily, &DateWindow::unbounded()).unwrap();
    assert_eq!(table.column("老式钢盔").unwrap(), &[Some(150.0), None, Some(90.0)]);
}

#[test]
fn window_bounds_are_applied_to_git_log() {
    if !git_available() {
        eprintln!("[git_history] git not found; skipping");
        return;
    }
    let dir = fixture();
    let git = GitCli::open(dir.path()).unwrap();
    let day = NaiveDate::from_ymd_opt(2025, 9, 3).unwrap();
    let window = DateWindow::new(Some(day), Some(day)).unwrap();
    let options = CollectOptions { window, ..CollectOptions::default() };
    let items = vec!["老式钢盔".to_string()];
    let multipliers = BundleMultipliers::classify(&items, 60);
    let report = SeriesBuilder::new(&git, &multipliers, options).collect(&items).unwrap();
    assert_eq!(report.revisions_scanned, 1);
    assert_eq!(report.series[0].samples[0].price, 90);
}
