//! End-to-end tests across the workspace
//!
//! Each test walks a user-level flow: settings load -> project creation ->
//! saves and syncs with backups -> CSV values read back.

use chrono::{Datelike, NaiveDate};
use predicates::prelude::*;
use revenue_core::{
    BackupManager, BackupStream, Settings, create_new_project, create_project_backup,
    create_sync_backup, is_valid_project, oldest_sync_backup_date, project_dir_of,
};
use revenue_csv::{CsvSeparator, NumberFormat, coerce_bool_with, coerce_date, coerce_float_with};
use revenue_fs::{CONTENT_FILE, NormalizedPath, ProjectPath};
use revenue_test_utils::{FakeApplication, TestProject};
use std::fs;

#[test]
fn test_new_project_backup_flow() {
    let parent = TestProject::new();
    let app = FakeApplication::new();

    let settings_path = parent.root().join("settings.toml");
    fs::write(
        &settings_path,
        "[backup]\nmax_project_backups = 10\nmax_sync_backups = 12\n",
    )
    .unwrap();
    let settings = Settings::load_or_default(&settings_path);

    let project_dir = create_new_project(parent.root(), "Acme", app.root()).unwrap();
    let content = project_dir.join(CONTENT_FILE);
    assert!(is_valid_project(&content));

    // Seed more history than either stream may keep
    let manager = BackupManager::for_content_file(&content).unwrap();
    let start = NaiveDate::from_ymd_opt(2021, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    for day in 0..20 {
        let at = start + chrono::Duration::days(day);
        manager.write_project_snapshot(&content, at).unwrap();
        manager.write_sync_snapshot("{}", at).unwrap();
    }

    create_project_backup(&content, settings.backup.max_project_backups).unwrap();
    let sync_payload = serde_json::json!({ "invoices": [{ "number": "2024-001" }] }).to_string();
    let sync = create_sync_backup(&content, &sync_payload, settings.backup.max_sync_backups)
        .unwrap();

    let projects = manager.list_snapshots(BackupStream::Project).unwrap();
    let syncs = manager.list_snapshots(BackupStream::Sync).unwrap();
    assert_eq!(projects.len(), 10);
    assert_eq!(syncs.len(), 12);
    assert_eq!(syncs[0].path, sync);

    // 20 seeded + 1 new, 12 kept: the oldest survivor is day 9
    assert_eq!(
        oldest_sync_backup_date(&content),
        Some(start + chrono::Duration::days(9))
    );

    // The project is still valid after all of that
    assert_eq!(project_dir_of(&content), Some(project_dir));
}

#[test]
fn test_project_survives_round_trip_through_backup_dir() {
    let parent = TestProject::new();
    let app = FakeApplication::new();
    let project_dir = create_new_project(parent.root(), "Acme", app.root()).unwrap();
    let content = project_dir.join(CONTENT_FILE);

    fs::write(&content, "<content><invoice number=\"1\"/></content>").unwrap();
    let backup = create_project_backup(&content, 10).unwrap();

    let saved = fs::read_to_string(&backup).unwrap();
    assert!(predicate::str::contains("invoice number=\"1\"").eval(saved.as_str()));

    let backup_dir = NormalizedPath::new(&project_dir).join(ProjectPath::ProjectBackups.as_str());
    assert_eq!(
        NormalizedPath::new(backup.parent().unwrap()).as_str(),
        backup_dir.as_str()
    );
}

#[test]
fn test_csv_settings_drive_value_coercion() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("settings.yaml");
    fs::write(
        &path,
        "csv:\n  separator: 1\nlocalization:\n  yes: Ja\n  no: Nee\n",
    )
    .unwrap();
    let settings = Settings::load(&path).unwrap();

    assert_eq!(settings.csv.separator, CsvSeparator::Comma);
    let row = "Ja,1.234,5,20240315";
    let fields: Vec<&str> = row.split(settings.csv.separator.as_char()).collect();

    assert!(coerce_bool_with(fields.first().copied(), false, settings.bool_words()));

    let dutch = NumberFormat::new(',', '.');
    let amount = format!("{},{}", fields[1], fields[2]);
    assert_eq!(coerce_float_with(Some(&amount), &dutch), Some(1234.5));

    let date = coerce_date(fields.get(3).copied()).unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 15));
}
