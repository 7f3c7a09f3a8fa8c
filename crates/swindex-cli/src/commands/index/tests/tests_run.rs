//! Tests for the index command

#![allow(clippy::expect_used)]

use crate::commands::index::run;
use std::fs;
use swindex_core::{IndexerConfig, read_index};
use tempfile::TempDir;

#[test]
fn test_run_returns_output_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(temp_dir.path().join("index")).expect("Failed to create index dir");
    fs::write(
        temp_dir.path().join("Foo.swift"),
        "class Foo { func bar() {} }",
    )
    .expect("Failed to write file");

    let output = run(&IndexerConfig::new(temp_dir.path())).expect("Run failed");

    assert_eq!(output, temp_dir.path().join("index").join("index.json"));
    let index = read_index(&output).expect("Failed to read index");
    assert_eq!(index.classes["Foo"].methods, Some(vec!["bar".to_string()]));
}

#[test]
fn test_run_rejects_missing_root() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let err = run(&IndexerConfig::new(temp_dir.path().join("absent"))).expect_err("should fail");

    assert!(err.to_string().contains("Not a directory"));
}

#[test]
fn test_run_write_failure_is_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let err = run(&IndexerConfig::new(temp_dir.path())).expect_err("should fail");

    assert!(err.to_string().contains("Failed to index"));
    assert!(format!("{:#}", err).contains("Failed to write index"));
}
