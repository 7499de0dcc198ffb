//! Constants and enums for project filesystem paths.

use std::path::Path;

/// Name of the project root content file.
pub const CONTENT_FILE: &str = "content.xml";

/// Standard project directories, relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectPath {
    /// Generated invoices
    Invoices,
    /// Generated reports
    Reports,
    /// Generated time sheets
    TimeSheets,
    /// Invoice document templates
    InvoiceTemplates,
    /// Report document templates
    ReportTemplates,
    /// Time sheet document templates
    TimeSheetTemplates,
    /// Invoice email templates
    InvoiceEmailTemplates,
    /// Payment reminder email templates
    ReminderEmailTemplates,
    /// Report email templates
    ReportEmailTemplates,
    /// Time sheet email templates
    TimeSheetEmailTemplates,
    /// Snapshots of `content.xml`
    ProjectBackups,
    /// Snapshots of sync payloads
    SyncBackups,
}

/// Every directory a project must contain, in creation order.
pub const PROJECT_DIRS: [ProjectPath; 12] = [
    ProjectPath::Invoices,
    ProjectPath::Reports,
    ProjectPath::TimeSheets,
    ProjectPath::InvoiceTemplates,
    ProjectPath::ReportTemplates,
    ProjectPath::TimeSheetTemplates,
    ProjectPath::InvoiceEmailTemplates,
    ProjectPath::ReminderEmailTemplates,
    ProjectPath::ReportEmailTemplates,
    ProjectPath::TimeSheetEmailTemplates,
    ProjectPath::ProjectBackups,
    ProjectPath::SyncBackups,
];

impl ProjectPath {
    /// Get the project-relative path, always with forward slashes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invoices => "invoices",
            Self::Reports => "reports",
            Self::TimeSheets => "timesheets",
            Self::InvoiceTemplates => "templates/invoice",
            Self::ReportTemplates => "templates/report",
            Self::TimeSheetTemplates => "templates/timesheet",
            Self::InvoiceEmailTemplates => "templates/email/invoice",
            Self::ReminderEmailTemplates => "templates/email/reminder",
            Self::ReportEmailTemplates => "templates/email/report",
            Self::TimeSheetEmailTemplates => "templates/email/timesheet",
            Self::ProjectBackups => "backup/project",
            Self::SyncBackups => "backup/sync",
        }
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
