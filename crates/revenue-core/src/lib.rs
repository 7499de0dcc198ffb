//! Core layer for Glasspath Revenue
//!
//! This crate holds the parts of the application that work directly on a
//! project directory:
//!
//! - **Project lifecycle**: create a project skeleton seeded with bundled
//!   templates, validate and locate existing projects
//! - **Backups**: timestamped snapshots of the project content and of sync
//!   payloads, each stream with its own retention count
//! - **Templates**: template categories and file classification
//! - **Settings**: application settings passed explicitly to consumers
//! - **Geo**: great-circle distances over recorded coordinates
//!
//! # Architecture
//!
//! ```text
//!            application shell
//!                    |
//!              revenue-core
//!                    |
//!          +---------+---------+
//!          |                   |
//!     revenue-fs          revenue-csv
//! ```
//!
//! Public entry points that run from autosave or user actions never
//! return errors: they log and report absence. The `try_*` and
//! [`BackupManager`] methods return [`Result`] for callers that want details.

pub mod backup;
pub mod error;
pub mod geo;
pub mod logging;
pub mod project;
pub mod settings;
pub mod templates;

pub use backup::{
    BackupManager, BackupStream, Snapshot, create_project_backup, create_sync_backup,
    oldest_sync_backup_date,
};
pub use error::{Error, Result};
pub use geo::Coordinate;
pub use project::{
    content_file_of, create_new_project, dir_for_new_project, is_valid_parent_path,
    is_valid_project, missing_project_dirs, project_dir_of, try_create_new_project,
};
pub use settings::Settings;
pub use templates::{TemplateCategory, TemplateFileType};
