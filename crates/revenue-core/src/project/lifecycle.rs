//! Creating new projects

use super::validation::is_valid_parent_path;
use crate::templates::TemplateCategory;
use crate::{Error, Result};
use revenue_fs::{CONTENT_FILE, NormalizedPath, PROJECT_DIRS, io, validate_file_name};
use std::fs;
use std::path::{Path, PathBuf};

/// Content written to `content.xml` of a new project.
pub const DEFAULT_CONTENT: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<content/>\n";

fn resolve_new_project_dir(parent: &Path, name: &str) -> Result<PathBuf> {
    validate_file_name(name, "Project name")
        .map_err(|message| Error::InvalidProjectName { message })?;

    if !is_valid_parent_path(parent) {
        return Err(Error::ParentNotFound {
            path: parent.to_path_buf(),
        });
    }

    let project_dir = parent.join(name);
    if project_dir.exists() {
        return Err(Error::ProjectExists { path: project_dir });
    }

    Ok(project_dir)
}

/// Directory a new project named `name` would get under `parent`.
///
/// `None` if the name is not a valid file name, the parent does not exist,
/// or the target already exists.
pub fn dir_for_new_project(parent: impl AsRef<Path>, name: &str) -> Option<PathBuf> {
    resolve_new_project_dir(parent.as_ref(), name).ok()
}

/// Create a new project, logging any failure.
///
/// Returns the project directory, or `None` if the project could not be
/// created. See [`try_create_new_project`].
pub fn create_new_project(
    parent: impl AsRef<Path>,
    name: &str,
    application_dir: impl AsRef<Path>,
) -> Option<PathBuf> {
    let parent = parent.as_ref();
    match try_create_new_project(parent, name, application_dir.as_ref()) {
        Ok(project_dir) => {
            tracing::info!(path = %project_dir.display(), "Created project");
            Some(project_dir)
        }
        Err(e) => {
            tracing::error!(
                "Failed to create project {:?} in {}: {}",
                name,
                parent.display(),
                e
            );
            None
        }
    }
}

/// Prefix of the hidden directory a project is assembled in.
const STAGING_PREFIX: &str = ".revenue-creating-";

/// Create a new project under `parent`.
///
/// Creates every project directory, copies the bundled default template of
/// each [`TemplateCategory`] from `application_dir`, and writes an empty
/// `content.xml`.
///
/// The project is assembled in a hidden staging directory next to the
/// target and renamed into place once complete, so a failure leaves
/// nothing behind. The staging name does not depend on `name`, so every
/// name accepted by [`dir_for_new_project`] can be created.
pub fn try_create_new_project(
    parent: &Path,
    name: &str,
    application_dir: &Path,
) -> Result<PathBuf> {
    let project_dir = resolve_new_project_dir(parent, name)?;

    if !application_dir.is_dir() {
        return Err(Error::ApplicationDirNotFound {
            path: application_dir.to_path_buf(),
        });
    }

    // Removed on drop unless renamed away
    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(parent)
        .map_err(|e| revenue_fs::Error::io(parent, e))?;

    populate(staging.path(), application_dir)?;
    move_into_place(staging.path(), &project_dir)?;

    Ok(project_dir)
}

/// Rename a finished staging directory to `project_dir`.
///
/// `rename` replaces an empty directory on Unix, so a target that appeared
/// after the initial checks is reported rather than overwritten.
fn move_into_place(staging_dir: &Path, project_dir: &Path) -> Result<()> {
    if project_dir.exists() {
        return Err(Error::ProjectExists {
            path: project_dir.to_path_buf(),
        });
    }

    fs::rename(staging_dir, project_dir)
        .map_err(|e| revenue_fs::Error::io(project_dir, e).into())
}

fn populate(root: &Path, application_dir: &Path) -> Result<()> {
    let root = NormalizedPath::new(root);
    let application_dir = NormalizedPath::new(application_dir);

    for dir in PROJECT_DIRS {
        io::create_dir_all(&root.join(dir.as_str()))?;
    }

    for category in TemplateCategory::ALL {
        let relative = category.default_template_path();
        io::copy_file(&application_dir.join(&relative), &root.join(&relative))?;
        tracing::debug!(template = %relative, "Copied bundled template");
    }

    io::write_text(&root.join(CONTENT_FILE), DEFAULT_CONTENT)?;
    Ok(())
}
