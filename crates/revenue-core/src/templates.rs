//! Template categories and template file classification
//!
//! Every project carries document templates (invoice, report, time sheet)
//! and email templates (invoice, reminder, report, time sheet), each in its
//! own directory. New projects receive one bundled default file per
//! category from the application directory.

use revenue_fs::ProjectPath;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the per-template preferences file linked to a template.
pub const TEMPLATE_PREFERENCES_EXTENSION: &str = "prefs";

/// Kind of template file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateFileType {
    /// Native document template (`.gpdx`)
    Document,
    /// Native email template (`.gpex`)
    Email,
    /// Word document (`.docx`)
    Word,
    /// OpenOffice document (`.odt`)
    OpenOffice,
    Unknown,
}

impl TemplateFileType {
    /// Classify a file by its extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Self {
        let extension = match file_name.rfind('.') {
            Some(idx) if idx > 0 => file_name[idx + 1..].to_ascii_lowercase(),
            _ => return Self::Unknown,
        };

        match extension.as_str() {
            "gpdx" => Self::Document,
            "gpex" => Self::Email,
            "docx" => Self::Word,
            "odt" => Self::OpenOffice,
            _ => Self::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(Self::from_file_name)
            .unwrap_or(Self::Unknown)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Document => "Template",
            Self::Email => "Email Template",
            Self::Word => "Word Template",
            Self::OpenOffice => "Open Office Template",
            Self::Unknown => "Unknown",
        }
    }
}

/// A template category of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateCategory {
    Invoice,
    Report,
    TimeSheet,
    InvoiceEmail,
    ReminderEmail,
    ReportEmail,
    TimeSheetEmail,
}

impl TemplateCategory {
    /// All categories, document templates first.
    pub const ALL: [TemplateCategory; 7] = [
        Self::Invoice,
        Self::Report,
        Self::TimeSheet,
        Self::InvoiceEmail,
        Self::ReminderEmail,
        Self::ReportEmail,
        Self::TimeSheetEmail,
    ];

    /// Directory of this category, relative to a project or application root.
    pub fn dir(&self) -> ProjectPath {
        match self {
            Self::Invoice => ProjectPath::InvoiceTemplates,
            Self::Report => ProjectPath::ReportTemplates,
            Self::TimeSheet => ProjectPath::TimeSheetTemplates,
            Self::InvoiceEmail => ProjectPath::InvoiceEmailTemplates,
            Self::ReminderEmail => ProjectPath::ReminderEmailTemplates,
            Self::ReportEmail => ProjectPath::ReportEmailTemplates,
            Self::TimeSheetEmail => ProjectPath::TimeSheetEmailTemplates,
        }
    }

    /// File name of the bundled default template.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Invoice => "Invoice.gpdx",
            Self::Report => "Report.gpdx",
            Self::TimeSheet => "TimeSheet.gpdx",
            Self::InvoiceEmail => "Invoice.gpex",
            Self::ReminderEmail => "Reminder.gpex",
            Self::ReportEmail => "Report.gpex",
            Self::TimeSheetEmail => "TimeSheet.gpex",
        }
    }

    /// Root-relative path of the bundled default template.
    pub fn default_template_path(&self) -> String {
        format!("{}/{}", self.dir().as_str(), self.default_file_name())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Invoice => "Invoice templates",
            Self::Report => "Report templates",
            Self::TimeSheet => "Time sheet templates",
            Self::InvoiceEmail => "Invoice email templates",
            Self::ReminderEmail => "Reminder email templates",
            Self::ReportEmail => "Report email templates",
            Self::TimeSheetEmail => "Time sheet email templates",
        }
    }

    pub fn is_email(&self) -> bool {
        matches!(
            self,
            Self::InvoiceEmail | Self::ReminderEmail | Self::ReportEmail | Self::TimeSheetEmail
        )
    }

    /// Whether a file with this name is a template of this category.
    pub fn accepts(&self, file_name: &str) -> bool {
        match TemplateFileType::from_file_name(file_name) {
            TemplateFileType::Email => self.is_email(),
            TemplateFileType::Document | TemplateFileType::Word | TemplateFileType::OpenOffice => {
                !self.is_email()
            }
            TemplateFileType::Unknown => false,
        }
    }
}

/// List the templates of `category` in a project, sorted by file name.
///
/// A missing or unreadable directory yields an empty list.
pub fn list_templates(project_dir: &Path, category: TemplateCategory) -> Vec<PathBuf> {
    let dir = project_dir.join(category.dir());
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Cannot list templates in {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut templates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| category.accepts(name))
        })
        .collect();

    templates.sort();
    templates
}

/// Path of the preferences file linked to a template (`Invoice.gpdx` ->
/// `Invoice.gpdx.prefs`).
pub fn template_preferences_path(template: &Path) -> PathBuf {
    let mut name = template.as_os_str().to_owned();
    name.push(".");
    name.push(TEMPLATE_PREFERENCES_EXTENSION);
    PathBuf::from(name)
}
