// Entry-point flow: OS gate, snapshot file, console output, failure mapping

mod common;

use common::*;
use hostfacts::app::{Status, ensure_supported, execute, run};
use hostfacts::config::AppConfig;
use hostfacts::error::Error;
use hostfacts::report::read_snapshot;
use std::path::Path;

fn config_in(dir: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.output.directory = dir.to_path_buf();
    config
}

fn json_files(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".json"))
        .collect()
}

#[test]
fn test_supported_families() {
    assert!(ensure_supported("Linux").is_ok());
    assert!(ensure_supported("Windows").is_ok());
    assert!(matches!(ensure_supported("Darwin"), Err(Error::UnsupportedOs(f)) if f == "Darwin"));
    assert!(ensure_supported("linux").is_err());
}

#[test]
fn test_run_writes_snapshot_named_after_host() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut out = Vec::new();

    let output = run(&FakeHost::linux(), &config_in(dir.path()), &mut out).expect("run");

    assert_eq!(
        output.snapshot_path,
        dir.path().join("system_info_build_host.json")
    );
    assert!(output.missing.is_none());
    assert_eq!(json_files(dir.path()), vec!["system_info_build_host.json"]);

    let text = String::from_utf8(out).unwrap();
    let saved = text.find("Data saved to file: ").expect("saved line");
    let report = text.find("=== System Information ===").expect("report");
    assert!(saved < report);
}

#[test]
fn test_snapshot_matches_printed_record() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut out = Vec::new();

    let output = run(&FakeHost::linux(), &config_in(dir.path()), &mut out).expect("run");
    let back = read_snapshot(&output.snapshot_path).expect("read back");
    assert_eq!(back, output.facts);
}

#[test]
fn test_unsupported_os_writes_nothing() {
    let dir = tempfile::TempDir::new().unwrap();
    let host = FakeHost::linux().with_os("Darwin");
    let mut out = Vec::new();

    let status = execute(&host, &config_in(dir.path()), &mut out);

    assert_eq!(status, Status::UnsupportedOs);
    assert_eq!(String::from_utf8(out).unwrap(), "Unsupported OS: Darwin\n");
    assert!(json_files(dir.path()).is_empty());
    assert_eq!(host.queries.get(), 0);
}

#[test]
fn test_missing_section_is_reported_not_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let host = FakeHost::linux().failing(MEMORY);
    let mut out = Vec::new();

    let status = execute(&host, &config_in(dir.path()), &mut out);

    assert_eq!(status, Status::Success);
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("Missing key: 'memory'\n"), "{text}");
    assert_eq!(json_files(dir.path()).len(), 1);
}

#[test]
fn test_missing_system_section_uses_unknown_host() {
    let dir = tempfile::TempDir::new().unwrap();
    let host = FakeHost::linux().failing(SYSTEM);
    let mut out = Vec::new();

    let output = run(&host, &config_in(dir.path()), &mut out).expect("run");
    assert_eq!(output.missing, Some("system"));
    assert!(output.snapshot_path.ends_with("system_info_unknown.json"));
    assert!(output.snapshot_path.exists());
}

#[test]
fn test_unwritable_output_is_generic_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = config_in(&dir.path().join("does-not-exist"));
    let mut out = Vec::new();

    let status = execute(&FakeHost::linux(), &config, &mut out);

    assert_eq!(status, Status::Failed);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Execution failed. See system_info.log.\n"
    );
}
