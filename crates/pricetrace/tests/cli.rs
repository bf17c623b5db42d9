// File: crates/pricetrace/tests/cli.rs
// Purpose: Run the built binary and check exit codes and outputs.

use std::path::Path;
use std::process::{Command, Output};

fn pricetrace(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pricetrace"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("spawn pricetrace")
}

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

fn snapshot_repo() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    git(dir.path(), &["init", "-q"], None);
    let snapshots = [
        (r#"[{"name":"老式钢盔","price":100},{"name":"9x19mm FMJ","price":10}]"#, "2025-09-01T09:00:00+00:00"),
        (r#"[{"name":"老式钢盔","price":200},{"name":"9x19mm FMJ","price":11}]"#, "2025-09-01T18:00:00+00:00"),
        (r#"[{"name":"老式钢盔","price":90}]"#, "2025-09-03T08:00:00+00:00"),
    ];
    for (body, date) in snapshots {
        std::fs::write(dir.path().join("price.json"), body).unwrap();
        git(dir.path(), &["add", "price.json"], None);
        git(dir.path(), &["commit", "-q", "-m", "snapshot"], Some(date));
    }
    dir
}

#[test]
fn plain_directory_is_not_a_repository() {
    let dir = tempfile::tempdir().unwrap();
    let out = pricetrace(&["--repo", dir.path().to_str().unwrap(), "--item", "a"]);
    assert_eq!(out.status.code(), Some(3));
}

#[test]
fn blank_item_names_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    let out = pricetrace(&["--repo", dir.path().to_str().unwrap(), "--item", "  ", "--item", ""]);
    assert_eq!(out.status.code(), Some(4));
}

#[test]
fn omitted_items_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    let out = pricetrace(&["--repo", dir.path().to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(4));
}

#[test]
fn inverted_window_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    let out = pricetrace(&[
        "--repo", dir.path().to_str().unwrap(), "--item", "a", "--since", "2025-09-10", "--until", "2025-09-01",
    ]);
    assert_eq!(out.status.code(), Some(6));
}

#[test]
fn daily_chart_and_csv_end_to_end() {
    if !git_available() {
        eprintln!("[cli] git not found; skipping");
        return;
    }
    let repo = snapshot_repo();
    let work = tempfile::tempdir().unwrap();
    let png = work.path().join("charts/daily.png");
    let csv = work.path().join("daily.csv");
    let out = pricetrace(&[
        "--repo", repo.path().to_str().unwrap(),
        "--item", "老式钢盔",
        "--item", "9x19mm FMJ",
        "--out", png.to_str().unwrap(),
        "--csv", csv.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(std::fs::metadata(&png).unwrap().len() > 0);

    let text = std::fs::read_to_string(&csv).unwrap();
    let lines: Vec<&str> = text.trim_start_matches('\u{feff}').lines().collect();
    assert_eq!(lines[0], "date,老式钢盔,9x19mm FMJ");
    assert_eq!(lines[1], "2025-09-01,150.0,630.0");
    assert_eq!(lines[2], "2025-09-02,,");
    assert_eq!(lines[3], "2025-09-03,90.0,");
}

#[test]
fn missing_items_exit_codes() {
    if !git_available() {
        eprintln!("[cli] git not found; skipping");
        return;
    }
    let repo = snapshot_repo();
    let work = tempfile::tempdir().unwrap();
    let png = work.path().join("out.png");
    let repo_arg = repo.path().to_str().unwrap();

    let only_missing = pricetrace(&["--repo", repo_arg, "--item", "不存在", "--out", png.to_str().unwrap()]);
    assert_eq!(only_missing.status.code(), Some(2));

    let one_missing = pricetrace(&["--repo", repo_arg, "--item", "老式钢盔", "--item", "不存在", "--out", png.to_str().unwrap()]);
    assert!(one_missing.status.success());
    assert!(String::from_utf8_lossy(&one_missing.stderr).contains("warning: no price data for '不存在'"));

    let empty_window = pricetrace(&["--repo", repo_arg, "--item", "老式钢盔", "--since", "2030-01-01", "--out", png.to_str().unwrap()]);
    assert_eq!(empty_window.status.code(), Some(1));
}

#[test]
fn skipped_revisions_are_reported_when_every_item_is_missing() {
    if !git_available() {
        eprintln!("[cli] git not found; skipping");
        return;
    }
    let repo = tempfile::tempdir().unwrap();
    git(repo.path(), &["init", "-q"], None);
    std::fs::write(repo.path().join("price.json"), "{not json").unwrap();
    git(repo.path(), &["add", "price.json"], None);
    git(repo.path(), &["commit", "-q", "-m", "broken"], Some("2025-09-01T09:00:00+00:00"));

    let work = tempfile::tempdir().unwrap();
    let png = work.path().join("out.png");
    let out = pricetrace(&["--repo", repo.path().to_str().unwrap(), "--item", "a", "--out", png.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("warning: revision"), "stderr: {stderr}");
    assert!(stderr.contains("skipped"), "stderr: {stderr}");
}

#[test]
fn plot_renderer_and_weekly_cadence() {
    if !git_available() {
        eprintln!("[cli] git not found; skipping");
        return;
    }
    let repo = snapshot_repo();
    let work = tempfile::tempdir().unwrap();
    let png = work.path().join("weekly.png");
    let out = pricetrace(&[
        "--repo", repo.path().to_str().unwrap(),
        "--item", "钢盔",
        "--fuzzy",
        "--cadence", "weekly",
        "--renderer", "plot",
        "--out", png.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(png.exists());
}
