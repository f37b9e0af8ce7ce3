//! Builder for constructing AuditReportView from an AuditResult

use super::audit_report_view::{
    AuditReportView, FindingSection, KeyFinding, RecipientView, ScoreView,
};
use crate::audit::domain::{AuditResult, Issue, SecurityHeaders};
use crate::audit::policies::ScoreBand;

pub const MAX_TOP_ISSUES: usize = 5;
const TITLE_PREVIEW_CHARS: usize = 50;

/// Builder for constructing AuditReportView from an audit result
pub struct AuditReportViewBuilder;

impl AuditReportViewBuilder {
    pub fn build(audit: &AuditResult, recipient: Option<RecipientView>) -> AuditReportView {
        AuditReportView {
            website_url: audit.website_url.clone(),
            recipient,
            overall: Self::score_view(audit.overall_score),
            seo: Self::score_view(audit.seo_score),
            performance: Self::score_view(audit.performance_score),
            security: Self::score_view(audit.security_score),
            top_issues: Self::top_issues(audit),
            key_findings: Self::key_findings(audit),
            generated_on: audit.audit_date.format("%B %-d, %Y").to_string(),
            audit: audit.clone(),
        }
    }

    fn score_view(score: u8) -> ScoreView {
        let band = ScoreBand::from_score(score);
        ScoreView {
            score,
            label: band.label(),
            color: band.color(),
        }
    }

    fn top_issues(audit: &AuditResult) -> Vec<Issue> {
        audit
            .all_issues()
            .filter(|issue| issue.kind.is_actionable())
            .take(MAX_TOP_ISSUES)
            .cloned()
            .collect()
    }

    fn key_findings(audit: &AuditResult) -> Vec<FindingSection> {
        let seo = &audit.seo;
        let performance = &audit.performance;
        let security = &audit.security;

        let title = match &seo.title.content {
            Some(content) => content.chars().take(TITLE_PREVIEW_CHARS).collect(),
            None => "Missing".to_string(),
        };

        let mut performance_findings = Vec::new();
        if let Some(lcp) = performance.core_web_vitals.lcp {
            performance_findings.push(finding(
                "Largest Contentful Paint",
                format!("{:.1}s", lcp / 1000.0),
            ));
        }
        if let Some(cls) = performance.core_web_vitals.cls {
            performance_findings.push(finding("Cumulative Layout Shift", format!("{:.3}", cls)));
        }
        if performance.page_size > 0 {
            performance_findings.push(finding(
                "Page size",
                format!("{:.2} MB", performance.page_size as f64 / 1_000_000.0),
            ));
        }

        vec![
            FindingSection {
                title: "SEO",
                findings: vec![
                    finding("Page title", title),
                    finding(
                        "Meta description",
                        present_or_missing(seo.meta_description.exists),
                    ),
                    finding("H1 headings", seo.headings.h1_count.to_string()),
                    finding(
                        "Images with alt text",
                        format!("{}/{}", seo.images.with_alt, seo.images.total),
                    ),
                ],
            },
            FindingSection {
                title: "Performance",
                findings: performance_findings,
            },
            FindingSection {
                title: "Security",
                findings: vec![
                    finding(
                        "HTTPS",
                        if security.https { "Enabled" } else { "Not enabled" }.to_string(),
                    ),
                    finding(
                        "SSL certificate",
                        if security.ssl.valid { "Valid" } else { "Not verified" }.to_string(),
                    ),
                    finding(
                        "Security headers",
                        format!(
                            "{}/{} configured",
                            security.headers.configured_count(),
                            SecurityHeaders::TRACKED
                        ),
                    ),
                ],
            },
        ]
    }
}

fn finding(label: &'static str, value: String) -> KeyFinding {
    KeyFinding { label, value }
}

fn present_or_missing(present: bool) -> String {
    if present { "Present" } else { "Missing" }.to_string()
}
