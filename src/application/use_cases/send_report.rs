use crate::application::dto::SendReportResponse;
use crate::leads::LeadId;
use crate::ports::outbound::{AuditReportEmail, LeadRepository, ProgressReporter, ReportMailer};
use crate::shared::error::AuditError;
use crate::shared::Result;

/// SendReportUseCase - re-sends the stored audit report of a lead
pub struct SendReportUseCase<R, M, PR> {
    repository: R,
    mailer: M,
    progress_reporter: PR,
}

impl<R, M, PR> SendReportUseCase<R, M, PR>
where
    R: LeadRepository,
    M: ReportMailer,
    PR: ProgressReporter,
{
    pub fn new(repository: R, mailer: M, progress_reporter: PR) -> Self {
        Self {
            repository,
            mailer,
            progress_reporter,
        }
    }

    /// # Errors
    /// - blank or malformed id (client error)
    /// - [`AuditError::LeadNotFound`]
    /// - [`AuditError::MissingAuditResults`] for a lead that was never audited
    /// - [`AuditError::EmailDelivery`] when the mailer fails
    pub async fn execute(&self, lead_id: &str) -> Result<SendReportResponse> {
        let id = LeadId::parse(lead_id)?;

        let mut lead = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AuditError::LeadNotFound { id: id.to_string() })?;

        let email = AuditReportEmail::for_lead(&lead)
            .ok_or_else(|| AuditError::MissingAuditResults { id: id.to_string() })?;

        self.progress_reporter
            .report(&format!("📧 Sending report for {} to {}", email.website_url, email.to));

        if let Err(e) = self.mailer.send_audit_report(&email).await {
            tracing::warn!(lead_id = %id, error = %format!("{:#}", e), "report re-send failed");
            return Err(into_delivery_error(e));
        }

        lead.mark_email_sent();
        self.repository.save(&lead).await?;

        self.progress_reporter
            .report_completion(&format!("✅ Report sent to {}", email.to));
        Ok(SendReportResponse::sent())
    }
}

fn into_delivery_error(err: anyhow::Error) -> anyhow::Error {
    match err.downcast::<AuditError>() {
        Ok(delivery @ AuditError::EmailDelivery { .. }) => delivery.into(),
        Ok(other) => AuditError::EmailDelivery {
            details: other.to_string(),
        }
        .into(),
        Err(err) => AuditError::EmailDelivery {
            details: format!("{:#}", err),
        }
        .into(),
    }
}
