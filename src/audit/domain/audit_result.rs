use super::issue::Issue;
use super::performance_result::PerformanceResult;
use super::security_result::SecurityResult;
use super::seo_result::SeoResult;
use crate::audit::policies::OverallWeighting;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// AuditResult - the outcome of one full audit.
///
/// Built once by [`AuditResult::assemble`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub seo_score: u8,
    pub performance_score: u8,
    pub security_score: u8,
    pub overall_score: u8,
    pub seo: SeoResult,
    pub performance: PerformanceResult,
    pub security: SecurityResult,
    pub audit_date: DateTime<Utc>,
    pub website_url: String,
}

impl AuditResult {
    pub fn assemble(
        website_url: String,
        seo: SeoResult,
        performance: PerformanceResult,
        security: SecurityResult,
        audit_date: DateTime<Utc>,
    ) -> Self {
        let overall_score = OverallWeighting::overall(seo.score, performance.score, security.score);

        Self {
            seo_score: seo.score,
            performance_score: performance.score,
            security_score: security.score,
            overall_score,
            seo,
            performance,
            security,
            audit_date,
            website_url,
        }
    }

    /// All issues in SEO → performance → security order
    pub fn all_issues(&self) -> impl Iterator<Item = &Issue> {
        self.seo
            .issues
            .iter()
            .chain(self.performance.issues.iter())
            .chain(self.security.issues.iter())
    }
}
