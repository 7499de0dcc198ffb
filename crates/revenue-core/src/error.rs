//! Error types for revenue-core

use std::path::PathBuf;

/// Result type for revenue-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in revenue-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Project name cannot be used as a directory name
    #[error("Invalid project name: {message}")]
    InvalidProjectName { message: String },

    /// Parent directory for a new project does not exist
    #[error("Project location not found: {path}")]
    ParentNotFound { path: PathBuf },

    /// Target directory for a new project is already taken
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Application install directory with bundled templates is missing
    #[error("Application directory not found: {path}")]
    ApplicationDirNotFound { path: PathBuf },

    /// Path is not the content file of a valid project
    #[error("Not a project content file: {path}")]
    InvalidContentFile { path: PathBuf },

    /// Filesystem error from revenue-fs
    #[error(transparent)]
    Fs(#[from] revenue_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
