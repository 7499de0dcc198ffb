//! Filesystem layer for Glasspath Revenue
//!
//! Provides the fixed project layout, file-name validation, and safe I/O
//! operations used by the project lifecycle and backup code.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use constants::{CONTENT_FILE, PROJECT_DIRS, ProjectPath};
pub use error::{Error, Result};
pub use path::{NormalizedPath, is_valid_file_name, validate_file_name};
