//! Snapshot writing, listing and retention for one project

use super::snapshot::{BackupStream, Snapshot};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use revenue_fs::{NormalizedPath, io};
use std::fs;
use std::path::{Path, PathBuf};

/// Manages the backup streams of a project directory.
///
/// Holds no state beyond the project location: every call lists the stream
/// directory afresh. Concurrent use on the same project is not coordinated;
/// two writers in the same second produce one snapshot.
#[derive(Debug, Clone)]
pub struct BackupManager {
    project_dir: NormalizedPath,
}

impl BackupManager {
    /// Manager for the project rooted at `project_dir`.
    pub fn new(project_dir: NormalizedPath) -> Self {
        Self { project_dir }
    }

    /// Manager for the project that owns `content_xml`.
    pub fn for_content_file(content_xml: &Path) -> Result<Self> {
        if content_xml.file_name().is_none() {
            return Err(Error::InvalidContentFile {
                path: content_xml.to_path_buf(),
            });
        }

        let project_dir = match content_xml.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Ok(Self::new(NormalizedPath::new(project_dir)))
    }

    /// Root of the managed project.
    pub fn project_dir(&self) -> &NormalizedPath {
        &self.project_dir
    }

    /// Directory holding the snapshots of `stream`.
    pub fn stream_dir(&self, stream: BackupStream) -> NormalizedPath {
        self.project_dir.join(stream.dir().as_str())
    }

    /// Path a snapshot of `stream` taken at `timestamp` is written to.
    ///
    /// Two snapshots in the same second share a path.
    pub fn snapshot_path(&self, stream: BackupStream, timestamp: NaiveDateTime) -> NormalizedPath {
        self.stream_dir(stream).join(&stream.file_name(timestamp))
    }

    /// Copy the content file into the project stream.
    pub fn write_project_snapshot(
        &self,
        content_xml: &Path,
        timestamp: NaiveDateTime,
    ) -> Result<PathBuf> {
        io::create_dir_all(&self.stream_dir(BackupStream::Project))?;

        let target = self.snapshot_path(BackupStream::Project, timestamp);
        io::copy_file(&NormalizedPath::new(content_xml), &target)?;
        Ok(target.to_native())
    }

    /// Write a sync payload into the sync stream.
    pub fn write_sync_snapshot(&self, sync_json: &str, timestamp: NaiveDateTime) -> Result<PathBuf> {
        let target = self.snapshot_path(BackupStream::Sync, timestamp);
        io::write_text(&target, sync_json)?;
        Ok(target.to_native())
    }

    /// Snapshots of a stream, newest first.
    ///
    /// A missing stream directory has no snapshots. Files that are not
    /// snapshots of the stream are skipped.
    pub fn list_snapshots(&self, stream: BackupStream) -> Result<Vec<Snapshot>> {
        let dir = self.stream_dir(stream);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries =
            fs::read_dir(dir.to_native()).map_err(|e| revenue_fs::Error::io(dir.to_native(), e))?;

        let mut snapshots = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            match Snapshot::from_path(stream, &path) {
                Some(snapshot) => snapshots.push(snapshot),
                None => tracing::trace!(path = %path.display(), "Not a snapshot, skipping"),
            }
        }

        snapshots.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(snapshots)
    }

    /// Delete every snapshot of `stream` beyond the `max_backups` newest.
    ///
    /// A failed deletion is logged and the remaining ones still run.
    /// Returns the paths that were deleted.
    pub fn prune(&self, stream: BackupStream, max_backups: usize) -> Result<Vec<PathBuf>> {
        let snapshots = self.list_snapshots(stream)?;
        if snapshots.len() <= max_backups {
            return Ok(Vec::new());
        }

        let mut deleted = Vec::new();
        for snapshot in snapshots.into_iter().skip(max_backups) {
            match fs::remove_file(&snapshot.path) {
                Ok(()) => {
                    tracing::debug!(path = %snapshot.path.display(), "Deleted old backup");
                    deleted.push(snapshot.path);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to delete old backup {}: {}",
                        snapshot.path.display(),
                        e
                    );
                }
            }
        }

        Ok(deleted)
    }

    /// Oldest snapshot of `stream`, or `None` if it has none.
    pub fn oldest_snapshot(&self, stream: BackupStream) -> Result<Option<Snapshot>> {
        Ok(self.list_snapshots(stream)?.pop())
    }

    /// Newest snapshot of `stream`, or `None` if it has none.
    pub fn newest_snapshot(&self, stream: BackupStream) -> Result<Option<Snapshot>> {
        Ok(self.list_snapshots(stream)?.into_iter().next())
    }

    /// Snapshot the content file at `timestamp` and apply retention.
    ///
    /// Returns the new snapshot, or `None` if it could not be written or
    /// retention removed it again (`max_backups == 0`). A retention failure
    /// is logged but does not undo the snapshot.
    pub fn backup_project_at(
        &self,
        content_xml: &Path,
        max_backups: usize,
        timestamp: NaiveDateTime,
    ) -> Option<PathBuf> {
        let written = self.write_project_snapshot(content_xml, timestamp);
        self.finish(BackupStream::Project, written, max_backups)
    }

    /// Write a sync payload at `timestamp` and apply retention.
    ///
    /// Returns `None` under the same conditions as [`Self::backup_project_at`].
    pub fn backup_sync_at(
        &self,
        sync_json: &str,
        max_backups: usize,
        timestamp: NaiveDateTime,
    ) -> Option<PathBuf> {
        let written = self.write_sync_snapshot(sync_json, timestamp);
        self.finish(BackupStream::Sync, written, max_backups)
    }

    fn finish(
        &self,
        stream: BackupStream,
        written: Result<PathBuf>,
        max_backups: usize,
    ) -> Option<PathBuf> {
        let path = match written {
            Ok(path) => path,
            Err(e) => {
                tracing::error!("Failed to create {:?} backup: {}", stream, e);
                return None;
            }
        };

        match self.prune(stream, max_backups) {
            // Every deleted path lives in the stream directory
            Ok(deleted) if deleted.iter().any(|d| d.file_name() == path.file_name()) => {
                tracing::warn!(
                    path = %path.display(),
                    "New {:?} backup removed by retention limit {}",
                    stream,
                    max_backups
                );
                None
            }
            Ok(_) => Some(path),
            Err(e) => {
                tracing::warn!("Failed to clean up {:?} backups: {}", stream, e);
                Some(path)
            }
        }
    }
}
