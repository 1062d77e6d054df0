// tests/integration/end_to_end.rs
use std::{fs, path::Path};

use clap::Parser;
use serde_json::Value;
use treesnap::args::Args;
use treesnap::config;
use treesnap_core::RunReport;

#[path = "../common/mod.rs"]
mod common;
use common::TempDir;

fn run_on(root: &Path, extra: &[&str]) -> RunReport {
    let mut argv = vec!["treesnap".to_string(), root.display().to_string()];
    argv.extend(extra.iter().map(|s| (*s).to_string()));
    let args = Args::parse_from(argv);
    let config = config::resolve(&args).expect("config resolves");
    treesnap_core::run(&config).expect("run succeeds")
}

fn read_document(path: &Path) -> Value {
    let raw = fs::read_to_string(path).expect("output exists");
    serde_json::from_str(&raw).expect("valid JSON")
}

#[test]
fn small_tree_produces_the_expected_document() {
    let temp = TempDir::new("e2e_small_tree");
    temp.write_file("a.txt", "hello");
    temp.write_file("sub/b.txt", "world");
    temp.write_file("node_modules/c.txt", "ignored");
    temp.write_file("files.json", "stale");

    let report = run_on(temp.path(), &[]);
    assert_eq!(report.entries, 2);

    let doc = read_document(&temp.path().join("files.json"));
    let files = doc["files"].as_array().expect("files array");
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["path"], "a.txt");
    assert_eq!(files[0]["content"], "hello");
    assert_eq!(files[0]["status"], "completed");
    assert_eq!(files[1]["path"], "sub/b.txt");
    assert_eq!(files[1]["content"], "world");
    assert_eq!(files[1]["status"], "completed");
}

#[test]
fn empty_tree_yields_an_empty_files_array() {
    let temp = TempDir::new("e2e_empty");

    let report = run_on(temp.path(), &[]);
    assert_eq!(report.entries, 0);

    let doc = read_document(&temp.path().join("files.json"));
    assert_eq!(doc["files"], serde_json::json!([]));
}

#[test]
fn reruns_over_an_unchanged_tree_are_byte_identical() {
    let temp = TempDir::new("e2e_idempotent");
    temp.write_file("a.txt", "hello");
    temp.write_file("sub/b.txt", "world");
    temp.write_file("z/nested/deep.txt", "deep");

    run_on(temp.path(), &[]);
    let first = fs::read(temp.path().join("files.json")).expect("first output");

    run_on(temp.path(), &[]);
    let second = fs::read(temp.path().join("files.json")).expect("second output");

    assert_eq!(first, second);
}

#[test]
fn utf8_content_round_trips_exactly() {
    let temp = TempDir::new("e2e_round_trip");
    let text = "línea uno\n日本語の行\nemoji \u{1F980}\n";
    temp.write_file("unicode.txt", text);

    run_on(temp.path(), &[]);

    let doc = read_document(&temp.path().join("files.json"));
    assert_eq!(doc["files"][0]["content"], text);
}

#[test]
fn invalid_utf8_is_dropped_not_replaced() {
    let temp = TempDir::new("e2e_lossy");
    temp.write_bytes("mixed.bin", b"he\xFF\xFEllo");

    let report = run_on(temp.path(), &[]);
    assert_eq!(report.entries, 1);
    assert_eq!(report.lossy, 1);

    let doc = read_document(&temp.path().join("files.json"));
    assert_eq!(doc["files"][0]["content"], "hello");
}

#[test]
fn records_follow_sorted_traversal_order() {
    let temp = TempDir::new("e2e_order");
    temp.write_file("zeta.txt", "z");
    temp.write_file("alpha.txt", "a");
    temp.write_file("mid/inner.txt", "m");

    run_on(temp.path(), &[]);

    let doc = read_document(&temp.path().join("files.json"));
    let paths: Vec<&str> = doc["files"]
        .as_array()
        .expect("files array")
        .iter()
        .map(|f| f["path"].as_str().expect("path string"))
        .collect();
    assert_eq!(paths, vec!["alpha.txt", "mid/inner.txt", "zeta.txt"]);
}

#[test]
fn exclude_dir_flag_prunes_extra_directories() {
    let temp = TempDir::new("e2e_exclude_dir");
    temp.write_file("a.txt", "keep");
    temp.write_file("target/debug/app", "drop");

    let report = run_on(temp.path(), &["--exclude-dir", "target"]);
    assert_eq!(report.entries, 1);

    let doc = read_document(&temp.path().join("files.json"));
    assert_eq!(doc["files"][0]["path"], "a.txt");
}

#[test]
fn exclude_path_glob_filters_relative_paths() {
    let temp = TempDir::new("e2e_exclude_path");
    temp.write_file("keep.txt", "keep");
    temp.write_file("server.log", "drop");
    temp.write_file("logs/old.log", "drop");

    let report = run_on(temp.path(), &["--exclude-path", "*.log"]);
    assert_eq!(report.entries, 1);

    let doc = read_document(&temp.path().join("files.json"));
    assert_eq!(doc["files"][0]["path"], "keep.txt");
}

#[test]
fn no_default_exclude_captures_dot_git() {
    let temp = TempDir::new("e2e_no_defaults");
    temp.write_file(".git/HEAD", "ref: refs/heads/main\n");
    temp.write_file("a.txt", "hello");

    let report = run_on(temp.path(), &["--no-default-exclude"]);
    assert_eq!(report.entries, 2);

    let doc = read_document(&temp.path().join("files.json"));
    assert_eq!(doc["files"][0]["path"], ".git/HEAD");
}

#[test]
fn custom_output_lands_under_the_root_and_is_never_captured() {
    let temp = TempDir::new("e2e_custom_output");
    temp.write_file("a.txt", "hello");

    run_on(temp.path(), &["-o", "snap.json"]);
    run_on(temp.path(), &["-o", "snap.json"]);

    let doc = read_document(&temp.path().join("snap.json"));
    let files = doc["files"].as_array().expect("files array");
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["path"], "a.txt");
}

#[test]
fn nested_output_path_creates_missing_parents() {
    let temp = TempDir::new("e2e_nested_output");
    temp.write_file("a.txt", "hello");

    run_on(temp.path(), &["-o", "build/out/snap.json"]);

    let doc = read_document(&temp.path().join("build/out/snap.json"));
    assert_eq!(doc["files"][0]["path"], "a.txt");
}

#[test]
fn document_is_pretty_printed_with_literal_unicode() {
    let temp = TempDir::new("e2e_format");
    temp.write_file("u.txt", "日本語");

    run_on(temp.path(), &[]);

    let raw = fs::read_to_string(temp.path().join("files.json")).expect("output exists");
    assert!(raw.contains("  \"files\""));
    assert!(raw.contains("日本語"));
    assert!(!raw.contains("\\u"));
    assert!(raw.ends_with("}\n"));
}
