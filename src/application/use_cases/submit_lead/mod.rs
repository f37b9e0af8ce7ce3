use crate::application::dto::SubmitLeadResponse;
use crate::leads::{Lead, LeadSubmission};
use crate::ports::inbound::SiteAuditPort;
use crate::ports::outbound::{AuditReportEmail, LeadRepository, ProgressReporter, ReportMailer};
use crate::shared::error::AuditError;
use crate::shared::Result;

/// SubmitLeadUseCase - validate, store, audit and e-mail one lead
///
/// The lead is persisted before the audit runs, so an audit failure still
/// leaves a record behind and the error carries its id. E-mail delivery is
/// best effort and never fails the submission.
///
/// # Type Parameters
/// * `R` - LeadRepository implementation
/// * `A` - SiteAuditPort implementation
/// * `M` - ReportMailer implementation (absent when e-mail is disabled)
/// * `PR` - ProgressReporter implementation
pub struct SubmitLeadUseCase<R, A, M, PR> {
    repository: R,
    auditor: A,
    mailer: Option<M>,
    progress_reporter: PR,
}

impl<R, A, M, PR> SubmitLeadUseCase<R, A, M, PR>
where
    R: LeadRepository,
    A: SiteAuditPort,
    M: ReportMailer,
    PR: ProgressReporter,
{
    pub fn new(repository: R, auditor: A, mailer: Option<M>, progress_reporter: PR) -> Self {
        Self {
            repository,
            auditor,
            mailer,
            progress_reporter,
        }
    }

    /// # Errors
    /// - [`AuditError::Validation`] for a malformed submission (nothing stored)
    /// - [`AuditError::AuditFailed`] when the site cannot be audited
    /// - storage errors from the repository
    pub async fn execute(&self, submission: LeadSubmission) -> Result<SubmitLeadResponse> {
        let new_lead = submission.validate()?;

        let mut lead = self.repository.create(new_lead).await?;
        self.progress_reporter.report(&format!(
            "📝 Lead {} recorded for {}",
            lead.id, lead.business_name
        ));

        self.progress_reporter
            .report(&format!("🔍 Auditing {}...", lead.website_url));
        let audit = match self.auditor.perform_full_audit(&lead.website_url).await {
            Ok(audit) => audit,
            Err(e) => {
                let details = format!("{:#}", e);
                tracing::error!(lead_id = %lead.id, error = %details, "audit failed");
                self.progress_reporter
                    .report_error(&format!("❌ Audit failed for {}", lead.website_url));
                return Err(AuditError::AuditFailed {
                    lead_id: lead.id.to_string(),
                    details,
                }
                .into());
            }
        };

        lead.attach_audit(audit.clone());
        self.repository.save(&lead).await?;
        self.progress_reporter.report(&format!(
            "✅ Audit complete: overall score {}/100",
            audit.overall_score
        ));

        let email_sent = self.deliver_report(&mut lead).await;

        Ok(SubmitLeadResponse {
            success: true,
            lead_id: lead.id,
            audit_results: audit,
            email_sent,
        })
    }

    async fn deliver_report(&self, lead: &mut Lead) -> bool {
        let Some(mailer) = &self.mailer else {
            tracing::debug!(lead_id = %lead.id, "e-mail delivery disabled");
            return false;
        };
        let Some(email) = AuditReportEmail::for_lead(lead) else {
            return false;
        };

        let outcome = async {
            mailer.send_audit_report(&email).await?;
            lead.mark_email_sent();
            self.repository.save(lead).await
        }
        .await;

        match outcome {
            Ok(()) => {
                self.progress_reporter
                    .report(&format!("📧 Report e-mailed to {}", email.to));
                true
            }
            Err(e) => {
                tracing::warn!(lead_id = %lead.id, error = %format!("{:#}", e), "e-mail delivery failed");
                self.progress_reporter
                    .report_error("⚠️  Report could not be e-mailed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests;
