//! Snapshot naming

use chrono::NaiveDateTime;
use revenue_fs::ProjectPath;
use std::path::{Path, PathBuf};

/// chrono layout of a snapshot file stem (`yyyyMMdd-HHmmss`).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

const STEM_LEN: usize = 15;

/// One of the two independent backup lineages of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackupStream {
    /// Copies of `content.xml`, taken on save
    Project,
    /// JSON payloads written on sync
    Sync,
}

impl BackupStream {
    /// Project directory the stream's snapshots live in.
    pub fn dir(&self) -> ProjectPath {
        match self {
            Self::Project => ProjectPath::ProjectBackups,
            Self::Sync => ProjectPath::SyncBackups,
        }
    }

    /// Extension of the stream's snapshot files, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Project => "xml",
            Self::Sync => "json",
        }
    }

    /// File name of the snapshot taken at `timestamp`.
    pub fn file_name(&self, timestamp: NaiveDateTime) -> String {
        format!(
            "{}.{}",
            timestamp.format(TIMESTAMP_FORMAT),
            self.extension()
        )
    }
}

/// A snapshot file found in a stream directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Stream the snapshot belongs to
    pub stream: BackupStream,
    /// Full path of the snapshot file
    pub path: PathBuf,
    /// When the snapshot was taken, parsed from the file stem
    pub timestamp: NaiveDateTime,
}

impl Snapshot {
    /// Interpret `path` as a snapshot of `stream`.
    ///
    /// `None` unless the extension matches the stream and the stem is a
    /// complete `yyyyMMdd-HHmmss` timestamp.
    pub fn from_path(stream: BackupStream, path: &Path) -> Option<Self> {
        if path.extension()?.to_str()? != stream.extension() {
            return None;
        }

        let timestamp = parse_stem(path.file_stem()?.to_str()?)?;
        Some(Self {
            stream,
            path: path.to_path_buf(),
            timestamp,
        })
    }
}

fn parse_stem(stem: &str) -> Option<NaiveDateTime> {
    let bytes = stem.as_bytes();
    let well_formed = bytes.len() == STEM_LEN
        && bytes[8] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 8 || b.is_ascii_digit());
    if !well_formed {
        return None;
    }

    NaiveDateTime::parse_from_str(stem, TIMESTAMP_FORMAT).ok()
}
