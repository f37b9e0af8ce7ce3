use crate::audit::domain::AuditResult;
use crate::shared::Result;
use async_trait::async_trait;

/// SiteAuditPort - Inbound port for running a full website audit
///
/// This is the entry point the use cases call; the engine behind it fans
/// out to the SEO, performance and security auditors.
#[async_trait]
pub trait SiteAuditPort: Send + Sync {
    /// Audits one website.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The URL cannot be normalised into an http(s) address
    /// - The page itself cannot be fetched (non-2xx or unreachable)
    ///
    /// Performance and security problems never fail the audit; they show
    /// up as degraded scores and issues instead.
    async fn perform_full_audit(&self, url: &str) -> Result<AuditResult>;
}
