//! Project backups
//!
//! A project keeps two independent backup streams, each a flat directory
//! of snapshots named by the UTC time they were taken:
//!
//! - `backup/project/<yyyyMMdd-HHmmss>.xml`: copies of `content.xml`
//! - `backup/sync/<yyyyMMdd-HHmmss>.json`: sync payloads
//!
//! The fixed-width names sort chronologically. After every new snapshot the
//! stream is trimmed to its maximum count, oldest first. Files in a stream
//! directory that are not named like snapshots are left alone.
//!
//! The free functions here are the autosave entry points: they never fail,
//! they log and return `None`. Use [`BackupManager`] directly for errors or
//! an explicit clock.

mod manager;
mod snapshot;

pub use manager::BackupManager;
pub use snapshot::{BackupStream, Snapshot, TIMESTAMP_FORMAT};

use chrono::{NaiveDateTime, Utc};
use std::path::{Path, PathBuf};

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn manager_for(content_xml: &Path) -> Option<BackupManager> {
    match BackupManager::for_content_file(content_xml) {
        Ok(manager) => Some(manager),
        Err(e) => {
            tracing::error!("Cannot back up project: {}", e);
            None
        }
    }
}

/// Snapshot the project content file and keep at most `max_backups`
/// project snapshots.
pub fn create_project_backup(content_xml: impl AsRef<Path>, max_backups: usize) -> Option<PathBuf> {
    let content_xml = content_xml.as_ref();
    manager_for(content_xml)?.backup_project_at(content_xml, max_backups, now())
}

/// Store a sync payload next to the project and keep at most `max_backups`
/// sync snapshots.
pub fn create_sync_backup(
    content_xml: impl AsRef<Path>,
    sync_json: &str,
    max_backups: usize,
) -> Option<PathBuf> {
    manager_for(content_xml.as_ref())?.backup_sync_at(sync_json, max_backups, now())
}

/// Timestamp of the oldest surviving sync snapshot.
pub fn oldest_sync_backup_date(content_xml: impl AsRef<Path>) -> Option<NaiveDateTime> {
    let manager = manager_for(content_xml.as_ref())?;
    match manager.oldest_snapshot(BackupStream::Sync) {
        Ok(snapshot) => snapshot.map(|s| s.timestamp),
        Err(e) => {
            tracing::warn!("Failed to list sync backups: {}", e);
            None
        }
    }
}
