//! Application directory fixtures

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Bundled default templates, relative to the application directory.
pub const BUNDLED_TEMPLATES: [&str; 7] = [
    "templates/invoice/Invoice.gpdx",
    "templates/report/Report.gpdx",
    "templates/timesheet/TimeSheet.gpdx",
    "templates/email/invoice/Invoice.gpex",
    "templates/email/reminder/Reminder.gpex",
    "templates/email/report/Report.gpex",
    "templates/email/timesheet/TimeSheet.gpex",
];

/// The workspace `test-fixtures` directory.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("test-fixtures")
}

/// A throwaway copy of the application directory.
///
/// Tests that break the installation (remove a bundled template, say) work
/// on their own copy instead of the shared fixture.
pub struct FakeApplication {
    temp_dir: TempDir,
}

impl Default for FakeApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeApplication {
    /// Copy the bundled templates from `test-fixtures/application`.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let source = fixtures_dir().join("application");

        for template in BUNDLED_TEMPLATES {
            let target = temp_dir.path().join(template);
            fs::create_dir_all(target.parent().unwrap()).unwrap();
            fs::copy(source.join(template), &target).unwrap_or_else(|e| {
                panic!("FakeApplication: cannot copy bundled {}: {}", template, e)
            });
        }

        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Delete one bundled template.
    pub fn remove_template(&self, template: &str) {
        fs::remove_file(self.root().join(template)).unwrap();
    }

    /// Content of a bundled template.
    pub fn template_content(&self, template: &str) -> String {
        fs::read_to_string(self.root().join(template)).unwrap()
    }
}
