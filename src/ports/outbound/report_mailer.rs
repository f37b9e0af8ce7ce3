use crate::audit::domain::AuditResult;
use crate::leads::Lead;
use crate::shared::Result;
use async_trait::async_trait;

/// Everything needed to e-mail one audit report
#[derive(Debug, Clone, PartialEq)]
pub struct AuditReportEmail {
    pub to: String,
    pub name: String,
    pub business_name: String,
    pub website_url: String,
    pub audit_results: AuditResult,
}

impl AuditReportEmail {
    /// `None` until the lead has been audited
    pub fn for_lead(lead: &Lead) -> Option<Self> {
        let audit_results = lead.audit_results.clone()?;
        Some(Self {
            to: lead.email.clone(),
            name: lead.name.clone(),
            business_name: lead.business_name.clone(),
            website_url: lead.website_url.clone(),
            audit_results,
        })
    }
}

/// ReportMailer port for outbound e-mail delivery
#[async_trait]
pub trait ReportMailer: Send + Sync {
    /// # Errors
    /// Returns [`crate::shared::error::AuditError::EmailDelivery`] when the
    /// provider rejects the message or cannot be reached.
    async fn send_audit_report(&self, email: &AuditReportEmail) -> Result<()>;
}
