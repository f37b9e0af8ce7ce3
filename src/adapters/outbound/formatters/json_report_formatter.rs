use crate::application::read_models::AuditReportView;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonReportFormatter adapter emitting the audit result as pretty JSON
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &AuditReportView) -> Result<String> {
        Ok(serde_json::to_string_pretty(&report.audit)?)
    }
}
