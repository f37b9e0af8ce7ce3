use crate::application::read_models::AuditReportView;
use crate::shared::Result;

/// ReportFormatter port for rendering an audit report
pub trait ReportFormatter {
    fn format(&self, report: &AuditReportView) -> Result<String>;
}
