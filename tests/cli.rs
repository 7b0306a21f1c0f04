#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

fn write_revisions(texts: &[&str]) -> (TempDir, Vec<PathBuf>) {
    let temp_dir = TempDir::new().expect("temp dir");
    let paths = texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let path = temp_dir.path().join(format!("rev{}.txt", i + 1));
            std::fs::write(&path, text).expect("write revision");
            path
        })
        .collect();
    (temp_dir, paths)
}

fn run(args: &[&str], files: &[PathBuf]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linestack"))
        .args(args)
        .args(files)
        .env_remove("LINESTACK_TRACK_DEPS")
        .output()
        .expect("run linestack")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn show_prints_requested_revision() {
    let (_temp, files) = write_revisions(&["a\nb\nc\n", "a\nx\nc\n"]);
    assert_eq!(stdout(&run(&["show"], &files)), "a\nx\nc\n");
    assert_eq!(stdout(&run(&["show", "--rev", "1"], &files)), "a\nb\nc\n");
}

#[test]
fn show_rejects_unknown_revision() {
    let (_temp, files) = write_revisions(&["a\n"]);
    let output = run(&["show", "--rev", "5"], &files);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of range"));
}

#[test]
fn blame_prefixes_introducing_revision() {
    let (_temp, files) = write_revisions(&["a\nb\nc\n", "a\nx\nc"]);
    assert_eq!(
        stdout(&run(&["blame"], &files)),
        "   1: a\n   2: x\n   2: c\n"
    );
}

#[test]
fn flatten_json_lists_revision_sets() {
    let (_temp, files) = write_revisions(&["a\nb\nc\n", "a\nx\nc\n"]);
    let json: serde_json::Value =
        serde_json::from_str(&stdout(&run(&["flatten", "--json"], &files))).expect("json");
    assert_eq!(
        json,
        serde_json::json!([
            {"revs": [1, 2], "data": "a\n"},
            {"revs": [2], "data": "x\n"},
            {"revs": [1], "data": "b\n"},
            {"revs": [1, 2], "data": "c\n"},
        ])
    );
}

#[test]
fn deps_reports_dependencies() {
    let (_temp, files) = write_revisions(&["a\nb\nc\n", "a\nx\nc\n"]);
    assert_eq!(stdout(&run(&["deps"], &files)), "1: \n2: 1\n");
}

#[test]
fn missing_file_is_reported() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = run(&["show"], &[temp_dir.path().join("missing.txt")]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}
