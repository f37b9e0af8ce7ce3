use crate::audit::domain::AuditResult;
use crate::ports::inbound::SiteAuditPort;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;

/// RunAuditUseCase - audits a URL without recording a lead
pub struct RunAuditUseCase<A, PR> {
    auditor: A,
    progress_reporter: PR,
}

impl<A, PR> RunAuditUseCase<A, PR>
where
    A: SiteAuditPort,
    PR: ProgressReporter,
{
    pub fn new(auditor: A, progress_reporter: PR) -> Self {
        Self {
            auditor,
            progress_reporter,
        }
    }

    pub async fn execute(&self, url: &str) -> Result<AuditResult> {
        self.progress_reporter
            .report(&format!("🔍 Auditing {} (SEO, performance, security)...", url.trim()));

        match self.auditor.perform_full_audit(url).await {
            Ok(audit) => {
                self.progress_reporter.report_completion(&format!(
                    "✅ Audit complete: overall score {}/100",
                    audit.overall_score
                ));
                Ok(audit)
            }
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("❌ Audit failed for {}", url.trim()));
                Err(e)
            }
        }
    }
}
