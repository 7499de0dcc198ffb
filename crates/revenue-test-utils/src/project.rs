//! [`TestProject`] builder for project directories

use revenue_fs::{CONTENT_FILE, PROJECT_DIRS, ProjectPath};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary parent directory, optionally holding a project skeleton.
///
/// # Example
///
/// ```rust,no_run
/// use revenue_test_utils::TestProject;
///
/// let project = TestProject::skeleton();
/// project.write_snapshots(revenue_fs::ProjectPath::SyncBackups, "json", &["20230101-000000"]);
/// project.assert_file_exists("backup/sync/20230101-000000.json");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Empty directory, with nothing project-like in it.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Every project directory plus a minimal `content.xml`.
    pub fn skeleton() -> Self {
        let project = Self::new();
        for dir in PROJECT_DIRS {
            fs::create_dir_all(project.root().join(dir)).unwrap();
        }
        fs::write(project.content_file(), "<content/>").unwrap();
        project
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn content_file(&self) -> PathBuf {
        self.root().join(CONTENT_FILE)
    }

    pub fn dir(&self, dir: ProjectPath) -> PathBuf {
        self.root().join(dir)
    }

    /// Write one file named `<stamp>.<extension>` per stamp into `dir`.
    pub fn write_snapshots(&self, dir: ProjectPath, extension: &str, stamps: &[&str]) {
        let dir = self.dir(dir);
        fs::create_dir_all(&dir).unwrap();
        for stamp in stamps {
            fs::write(dir.join(format!("{}.{}", stamp, extension)), stamp).unwrap();
        }
    }

    /// Sorted file names in `dir`.
    pub fn file_names(&self, dir: ProjectPath) -> Vec<String> {
        let mut names: Vec<String> = match fs::read_dir(self.dir(dir)) {
            Ok(entries) => entries
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
