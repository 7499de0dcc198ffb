//! Project directory lifecycle
//!
//! A project is a directory holding `content.xml` plus a fixed set of
//! subdirectories (see [`revenue_fs::PROJECT_DIRS`]). This module creates
//! new projects, seeds them with the bundled templates, and checks whether
//! an existing directory is a project.

mod lifecycle;
mod validation;

pub use lifecycle::{DEFAULT_CONTENT, create_new_project, dir_for_new_project, try_create_new_project};
pub use validation::{
    content_file_of, is_valid_parent_path, is_valid_project, missing_project_dirs, project_dir_of,
};
