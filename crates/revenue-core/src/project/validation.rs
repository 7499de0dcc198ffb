//! Checks on existing project directories

use revenue_fs::{CONTENT_FILE, PROJECT_DIRS, ProjectPath};
use std::path::{Path, PathBuf};

/// Whether `path` can hold a new project: non-empty and an existing directory.
pub fn is_valid_parent_path(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    !path.as_os_str().is_empty() && path.is_dir()
}

/// Location of the content file inside a project directory.
pub fn content_file_of(project_dir: impl AsRef<Path>) -> PathBuf {
    project_dir.as_ref().join(CONTENT_FILE)
}

/// Required project directories that are missing under `project_dir`.
pub fn missing_project_dirs(project_dir: impl AsRef<Path>) -> Vec<ProjectPath> {
    let project_dir = project_dir.as_ref();
    PROJECT_DIRS
        .iter()
        .copied()
        .filter(|dir| !project_dir.join(dir).is_dir())
        .collect()
}

/// Parent of a content file; a bare file name resolves to the current directory.
fn parent_dir(content_file: &Path) -> Option<&Path> {
    match content_file.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Some(Path::new(".")),
        other => other,
    }
}

/// Whether `content_file` is the content file of a valid project.
///
/// The file must have the `xml` extension and exist, and its directory must
/// contain every required project directory.
pub fn is_valid_project(content_file: impl AsRef<Path>) -> bool {
    let content_file = content_file.as_ref();

    let is_xml = content_file.extension().is_some_and(|e| e == "xml");
    if !is_xml || !content_file.exists() {
        return false;
    }

    match parent_dir(content_file) {
        Some(project_dir) => missing_project_dirs(project_dir).is_empty(),
        None => false,
    }
}

/// Project directory of a valid content file.
pub fn project_dir_of(content_file: impl AsRef<Path>) -> Option<PathBuf> {
    let content_file = content_file.as_ref();
    if !is_valid_project(content_file) {
        return None;
    }
    parent_dir(content_file).map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn skeleton() -> TempDir {
        let temp = TempDir::new().unwrap();
        for dir in PROJECT_DIRS {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
        }
        fs::write(temp.path().join(CONTENT_FILE), "<content/>").unwrap();
        temp
    }

    #[test]
    fn test_empty_path_is_not_a_parent() {
        assert!(!is_valid_parent_path(""));
    }

    #[test]
    fn test_file_is_not_a_parent() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes.txt");
        fs::write(&file, "x").unwrap();
        assert!(!is_valid_parent_path(&file));
        assert!(is_valid_parent_path(temp.path()));
    }

    #[test]
    fn test_skeleton_is_valid() {
        let temp = skeleton();
        let content = content_file_of(temp.path());
        assert!(is_valid_project(&content));
        assert_eq!(project_dir_of(&content), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn test_each_missing_dir_is_reported() {
        for dir in PROJECT_DIRS {
            let temp = skeleton();
            fs::remove_dir(temp.path().join(dir)).unwrap();

            assert_eq!(missing_project_dirs(temp.path()), vec![dir], "{}", dir);
            assert!(!is_valid_project(content_file_of(temp.path())), "{}", dir);
        }
    }

    #[test]
    fn test_uppercase_extension_is_rejected() {
        let temp = skeleton();
        let content = temp.path().join("CONTENT.XML");
        fs::write(&content, "<content/>").unwrap();
        assert!(!is_valid_project(&content));
    }
}
