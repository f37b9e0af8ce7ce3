use super::performance_analyzer::PerformanceAnalyzer;
use super::security_analyzer::SecurityAnalyzer;
use super::seo_analyzer::SeoAnalyzer;
use crate::audit::domain::{normalize_target, with_scheme, AuditResult};
use crate::ports::inbound::SiteAuditPort;
use crate::ports::outbound::{PageSpeedClient, WebClient};
use crate::shared::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// AuditEngine runs the three auditors concurrently and folds their
/// results into one [`AuditResult`].
///
/// Only the SEO auditor can fail the audit; the other two degrade.
pub struct AuditEngine<W: WebClient, P: PageSpeedClient> {
    seo: SeoAnalyzer<W>,
    performance: PerformanceAnalyzer<P>,
    security: SecurityAnalyzer<W>,
}

impl<W: WebClient, P: PageSpeedClient> AuditEngine<W, P> {
    pub fn new(web_client: W, page_speed_client: P) -> Self {
        Self::from_shared(Arc::new(web_client), Arc::new(page_speed_client))
    }

    pub fn from_shared(web_client: Arc<W>, page_speed_client: Arc<P>) -> Self {
        Self {
            seo: SeoAnalyzer::new(Arc::clone(&web_client)),
            performance: PerformanceAnalyzer::new(page_speed_client),
            security: SecurityAnalyzer::new(web_client),
        }
    }
}

#[async_trait]
impl<W: WebClient, P: PageSpeedClient> SiteAuditPort for AuditEngine<W, P> {
    async fn perform_full_audit(&self, url: &str) -> Result<AuditResult> {
        let target = normalize_target(url)?;
        tracing::info!(url = %target, "starting audit");

        let (seo, performance, security) = tokio::try_join!(
            self.seo.analyze(&target),
            async { Ok::<_, anyhow::Error>(self.performance.analyze(&target).await) },
            async { Ok::<_, anyhow::Error>(self.security.analyze(&target).await) },
        )?;

        let result = AuditResult::assemble(with_scheme(url), seo, performance, security, Utc::now());
        tracing::info!(
            url = %target,
            overall = result.overall_score,
            seo = result.seo_score,
            performance = result.performance_score,
            security = result.security_score,
            "audit complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::domain::{IssueKind, PageSpeedReport};
    use crate::ports::outbound::WebResponse;
    use crate::shared::error::AuditError;
    use std::collections::BTreeMap;

    /// Serves one HTML page for every GET; HEAD mirrors GET without a body
    struct StaticSite {
        status: u16,
        body: &'static str,
    }

    #[async_trait]
    impl WebClient for StaticSite {
        async fn get(&self, _url: &str) -> Result<WebResponse> {
            Ok(WebResponse {
                status: self.status,
                headers: BTreeMap::new(),
                body: self.body.to_string(),
            })
        }

        async fn head(&self, url: &str) -> Result<WebResponse> {
            let mut response = self.get(url).await?;
            response.body.clear();
            Ok(response)
        }
    }

    struct Unreachable;

    #[async_trait]
    impl WebClient for Unreachable {
        async fn get(&self, _url: &str) -> Result<WebResponse> {
            anyhow::bail!("dns error: no such host")
        }

        async fn head(&self, _url: &str) -> Result<WebResponse> {
            anyhow::bail!("dns error: no such host")
        }
    }

    struct FixedSpeed(Option<f64>);

    #[async_trait]
    impl PageSpeedClient for FixedSpeed {
        async fn analyze(&self, _url: &str) -> Result<PageSpeedReport> {
            match self.0 {
                Some(score) => Ok(PageSpeedReport {
                    performance_score: Some(score),
                    ..Default::default()
                }),
                None => anyhow::bail!("quota exceeded"),
            }
        }
    }

    #[tokio::test]
    async fn test_overall_score_is_weighted() {
        let engine = AuditEngine::new(
            StaticSite {
                status: 200,
                body: "<html><head><title>Hello</title></head></html>",
            },
            FixedSpeed(Some(0.8)),
        );

        let result = engine.perform_full_audit("example.com").await.unwrap();
        assert_eq!(result.website_url, "https://example.com");
        assert_eq!(result.performance_score, 80);
        let expected = (f64::from(result.seo_score) * 0.35
            + 80.0 * 0.35
            + f64::from(result.security_score) * 0.30)
            .round() as u8;
        assert_eq!(result.overall_score, expected);
    }

    #[tokio::test]
    async fn test_page_fetch_failure_fails_the_audit() {
        let engine = AuditEngine::new(
            StaticSite {
                status: 503,
                body: "",
            },
            FixedSpeed(Some(0.9)),
        );
        let err = engine
            .perform_full_audit("https://example.com")
            .await
            .unwrap_err();
        let audit_error = err.downcast_ref::<AuditError>().unwrap();
        assert!(
            matches!(audit_error, AuditError::PageFetch { details, .. } if details == "Failed to fetch page: 503")
        );
    }

    #[tokio::test]
    async fn test_unreachable_site_fails_the_audit() {
        let engine = AuditEngine::new(Unreachable, FixedSpeed(None));
        assert!(engine.perform_full_audit("example.com").await.is_err());
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected_before_fetching() {
        let engine = AuditEngine::new(Unreachable, FixedSpeed(None));
        let err = engine.perform_full_audit("http://").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AuditError>(),
            Some(AuditError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_speed_service_outage_degrades() {
        let engine = AuditEngine::new(
            StaticSite {
                status: 200,
                body: "<html></html>",
            },
            FixedSpeed(None),
        );
        let result = engine.perform_full_audit("example.com").await.unwrap();
        assert_eq!(result.performance_score, 50);
        let kinds: Vec<IssueKind> = result.performance.issues.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![IssueKind::Info, IssueKind::Warning]);
    }
}
