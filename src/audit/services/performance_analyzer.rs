use crate::audit::domain::page_speed_report::audit_ids;
use crate::audit::domain::{
    CoreWebVitals, Issue, IssueKind, Opportunity, PageSpeedReport, PerformanceResult,
};
use crate::audit::policies::MetricSourcePriority;
use crate::ports::outbound::PageSpeedClient;
use std::sync::Arc;
use url::Url;

/// Score used when the page-speed service reports nothing
pub const DEFAULT_PERFORMANCE_SCORE: u8 = 50;
pub const MAX_OPPORTUNITIES: usize = 5;
const PAGE_SIZE_LIMIT_BYTES: u64 = 3_000_000;

/// Optimisation audits surfaced as opportunities, in report order
pub const OPPORTUNITY_AUDITS: [&str; 9] = [
    "render-blocking-resources",
    "unused-css-rules",
    "unused-javascript",
    "modern-image-formats",
    "offscreen-images",
    "unminified-css",
    "unminified-javascript",
    "efficient-animated-content",
    "uses-responsive-images",
];

/// PerformanceAnalyzer asks the page-speed service about the page.
///
/// Never fails: any upstream problem degrades to the default score, one
/// informational issue and the issue for that score band.
pub struct PerformanceAnalyzer<P: PageSpeedClient> {
    client: Arc<P>,
}

impl<P: PageSpeedClient> PerformanceAnalyzer<P> {
    pub fn new(client: Arc<P>) -> Self {
        Self { client }
    }

    pub async fn analyze(&self, url: &Url) -> PerformanceResult {
        let report = match self.client.analyze(url.as_str()).await {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::warn!(url = %url, error = %format!("{:#}", e), "page-speed analysis unavailable");
                None
            }
        };
        PerformanceScorer::score(report.as_ref())
    }
}

/// Pure mapping from a page-speed report to a [`PerformanceResult`].
///
/// The score comes solely from the service; thresholds only add issues.
pub struct PerformanceScorer;

impl PerformanceScorer {
    pub fn score(report: Option<&PageSpeedReport>) -> PerformanceResult {
        match report {
            Some(report) => Self::from_report(report),
            None => Self::unavailable(),
        }
    }

    fn unavailable() -> PerformanceResult {
        let mut issues = vec![Issue::info(
            "Could not fetch detailed performance metrics",
            "Performance analysis limited. Try again later.",
        )];
        issues.extend(general_issue(DEFAULT_PERFORMANCE_SCORE));

        PerformanceResult {
            score: DEFAULT_PERFORMANCE_SCORE,
            load_time: 0,
            page_size: 0,
            request_count: 0,
            core_web_vitals: CoreWebVitals::default(),
            opportunities: Vec::new(),
            issues,
        }
    }

    fn from_report(report: &PageSpeedReport) -> PerformanceResult {
        let score = report
            .performance_score
            .map(|value| (value * 100.0).round().clamp(0.0, 100.0) as u8)
            .unwrap_or(DEFAULT_PERFORMANCE_SCORE);

        let vitals = MetricSourcePriority::core_web_vitals(report);
        let load_time = rounded_lab_value(report, audit_ids::SPEED_INDEX);
        let page_size = rounded_lab_value(report, audit_ids::TOTAL_BYTE_WEIGHT);
        let request_count = rounded_lab_value(report, audit_ids::NETWORK_REQUESTS);

        let mut issues = threshold_issues(&vitals, page_size);
        if let Some(general) = general_issue(score) {
            issues.push(general);
        }

        PerformanceResult {
            score,
            load_time,
            page_size,
            request_count,
            core_web_vitals: vitals,
            opportunities: opportunities(report),
            issues,
        }
    }
}

fn rounded_lab_value(report: &PageSpeedReport, id: &str) -> u64 {
    report
        .lab_value(id)
        .map(|value| value.round().max(0.0) as u64)
        .unwrap_or(0)
}

fn opportunities(report: &PageSpeedReport) -> Vec<Opportunity> {
    OPPORTUNITY_AUDITS
        .iter()
        .filter_map(|id| {
            let audit = report.audit(id)?;
            let sub_score = audit.score?;
            (sub_score < 1.0).then(|| Opportunity {
                title: audit.title.clone().unwrap_or_else(|| id.to_string()),
                description: audit.description.clone().unwrap_or_default(),
                savings: audit
                    .display_value
                    .clone()
                    .unwrap_or_else(|| "Potential savings available".to_string()),
            })
        })
        .take(MAX_OPPORTUNITIES)
        .collect()
}

/// Picks warning or error depending on which limit `value` exceeds
fn severity(value: f64, error_above: f64) -> IssueKind {
    if value > error_above {
        IssueKind::Error
    } else {
        IssueKind::Warning
    }
}

fn threshold_issues(vitals: &CoreWebVitals, page_size: u64) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Some(lcp) = vitals.lcp.filter(|lcp| *lcp > 2500.0) {
        issues.push(Issue::new(
            severity(lcp, 4000.0),
            format!(
                "Largest Contentful Paint is {:.1}s (should be < 2.5s)",
                lcp / 1000.0
            ),
            "Optimize largest content element loading time",
        ));
    }

    if let Some(cls) = vitals.cls.filter(|cls| *cls > 0.1) {
        issues.push(Issue::new(
            severity(cls, 0.25),
            format!("Cumulative Layout Shift is {:.3} (should be < 0.1)", cls),
            "Add size attributes to images and embeds, avoid inserting content above existing content",
        ));
    }

    if let Some(fcp) = vitals.fcp.filter(|fcp| *fcp > 1800.0) {
        issues.push(Issue::new(
            severity(fcp, 3000.0),
            format!(
                "First Contentful Paint is {:.1}s (should be < 1.8s)",
                fcp / 1000.0
            ),
            "Reduce server response time and eliminate render-blocking resources",
        ));
    }

    if let Some(ttfb) = vitals.ttfb.filter(|ttfb| *ttfb > 800.0) {
        issues.push(Issue::new(
            severity(ttfb, 1800.0),
            format!("Time to First Byte is {}ms (should be < 800ms)", ttfb),
            "Optimize server response time or use a CDN",
        ));
    }

    if page_size > PAGE_SIZE_LIMIT_BYTES {
        issues.push(Issue::warning(
            format!(
                "Page size is {:.1}MB (should be < 3MB)",
                page_size as f64 / 1_000_000.0
            ),
            "Compress images, minify CSS/JS, and remove unused code",
        ));
    }

    issues
}

fn general_issue(score: u8) -> Option<Issue> {
    if score < 50 {
        Some(Issue::error(
            "Overall performance needs significant improvement",
            "Focus on optimizing images, reducing JavaScript, and improving server response time",
        ))
    } else if score < 75 {
        Some(Issue::warning(
            "Performance could be improved",
            "Review the opportunities listed to improve page speed",
        ))
    } else {
        None
    }
}
