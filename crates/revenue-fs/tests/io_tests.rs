use assert_fs::prelude::*;
use predicates::prelude::*;
use revenue_fs::{NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("content.xml"));

    io::write_atomic(&path, b"<content/>").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "<content/>");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("content.xml");
    fs::write(&file_path, "original").unwrap();

    let path = NormalizedPath::new(&file_path);
    io::write_atomic(&path, b"updated").unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "updated");
}

#[test]
fn test_write_atomic_creates_missing_parents() {
    let temp = assert_fs::TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path()).join("backup/sync/20230101-000000.json");

    io::write_text(&path, "{}").unwrap();

    temp.child("backup/sync/20230101-000000.json").assert("{}");
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path()).join("settings.toml");

    io::write_text(&path, "a = 1").unwrap();
    io::write_text(&path, "a = 2").unwrap();

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["settings.toml".to_string()]);
    temp.child("settings.toml").assert("a = 2");
}

#[test]
fn test_read_text_existing_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("payload.json");
    fs::write(&file_path, "hello").unwrap();

    let content = io::read_text(&NormalizedPath::new(&file_path)).unwrap();
    assert_eq!(content, "hello");
}

#[test]
fn test_read_text_nonexistent_file() {
    let path = NormalizedPath::new("/nonexistent/file.txt");
    let result = io::read_text(&path);
    assert!(matches!(result, Err(revenue_fs::Error::Io { .. })));
}

#[test]
fn test_copy_file_copies_content() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("Invoice.gpdx").write_str("template").unwrap();
    let root = NormalizedPath::new(temp.path());

    let bytes = io::copy_file(&root.join("Invoice.gpdx"), &root.join("copy.gpdx")).unwrap();

    assert_eq!(bytes, "template".len() as u64);
    temp.child("copy.gpdx").assert("template");
}

#[test]
fn test_copy_file_missing_source_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = NormalizedPath::new(temp.path());

    let result = io::copy_file(&root.join("missing.gpdx"), &root.join("copy.gpdx"));

    assert!(result.is_err());
    temp.child("copy.gpdx").assert(predicate::path::missing());
}

#[test]
fn test_copy_file_rejects_directory_source() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("templates").create_dir_all().unwrap();
    let root = NormalizedPath::new(temp.path());

    let result = io::copy_file(&root.join("templates"), &root.join("copy"));
    assert!(result.is_err());
}

#[test]
fn test_create_dir_all_nested() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = NormalizedPath::new(temp.path());

    io::create_dir_all(&root.join("templates/email/reminder")).unwrap();

    temp.child("templates/email/reminder")
        .assert(predicate::path::is_dir());
}
