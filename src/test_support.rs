//! Fixtures shared by unit tests across the crate.

use crate::audit::domain::{
    AuditResult, CoreWebVitals, HeadingSummary, ImageSummary, Issue, PerformanceResult,
    SecurityHeaders, SecurityResult, SeoResult, SslStatus, TextElement,
};
use crate::ports::inbound::SiteAuditPort;
use crate::ports::outbound::{AuditReportEmail, ProgressReporter, ReportMailer};
use crate::shared::error::AuditError;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::{Arc, Mutex};

/// A plain-http site with a mediocre SEO setup and a fast but heavy page
pub fn sample_audit() -> AuditResult {
    let title = "Acme Plumbing | Emergency Repairs in Springfield and Shelbyville";

    let seo = SeoResult {
        score: 62,
        title: TextElement {
            exists: true,
            content: Some(title.to_string()),
            length: title.chars().count(),
            is_optimal: false,
        },
        meta_description: TextElement::default(),
        headings: HeadingSummary {
            h1_count: 2,
            h2_count: 3,
            ..Default::default()
        },
        images: ImageSummary {
            total: 5,
            with_alt: 3,
            without_alt: 2,
        },
        links: Default::default(),
        canonical: Default::default(),
        open_graph: Default::default(),
        twitter_card: Default::default(),
        robots_txt: true,
        sitemap: false,
        viewport: true,
        issues: vec![
            Issue::error(
                "Missing meta description",
                "Add a meta description between 120-160 characters",
            ),
            Issue::warning(
                "Multiple H1 headings found (2)",
                "Use only one H1 heading per page",
            ),
            Issue::info(
                "No canonical URL specified",
                "Add a canonical URL to prevent duplicate content issues",
            ),
        ],
    };

    let performance = PerformanceResult {
        score: 88,
        load_time: 2900,
        page_size: 1_250_000,
        request_count: 42,
        core_web_vitals: CoreWebVitals {
            lcp: Some(3100.0),
            fid: None,
            cls: Some(0.05),
            fcp: Some(1200.0),
            ttfb: Some(310.0),
        },
        opportunities: Vec::new(),
        issues: vec![Issue::warning(
            "Largest Contentful Paint is 3.1s (should be < 2.5s)",
            "Optimize largest content element loading time",
        )],
    };

    let security = SecurityResult {
        score: 42,
        ssl: SslStatus::default(),
        https: false,
        headers: SecurityHeaders {
            referrer_policy: true,
            ..Default::default()
        },
        mixed_content: false,
        issues: vec![
            Issue::error(
                "Website is not using HTTPS",
                "Install an SSL certificate and redirect HTTP to HTTPS",
            ),
            Issue::warning(
                "Missing Content-Security-Policy header",
                "Add a Content-Security-Policy header to prevent XSS attacks",
            ),
            Issue::warning(
                "Missing or invalid X-Content-Type-Options header",
                "Add \"X-Content-Type-Options: nosniff\" header",
            ),
            Issue::error(
                "Website security needs significant improvement",
                "Prioritize adding HTTPS and security headers",
            ),
        ],
    };

    let audit_date = Utc.with_ymd_and_hms(2025, 3, 5, 10, 0, 0).unwrap();
    AuditResult::assemble(
        "http://acme.example".to_string(),
        seo,
        performance,
        security,
        audit_date,
    )
}

/// Auditor that always returns [`sample_audit`] and records the URLs it saw
#[derive(Clone, Default)]
pub struct FixedAuditor {
    pub urls: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl SiteAuditPort for FixedAuditor {
    async fn perform_full_audit(&self, url: &str) -> Result<AuditResult> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(sample_audit())
    }
}

/// Auditor whose page fetch always fails
pub struct UnreachableAuditor;

#[async_trait]
impl SiteAuditPort for UnreachableAuditor {
    async fn perform_full_audit(&self, url: &str) -> Result<AuditResult> {
        Err(AuditError::PageFetch {
            url: url.to_string(),
            details: "Failed to fetch page: 503".to_string(),
        }
        .into())
    }
}

/// Mailer that records every message, or rejects them all when `failing`
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<AuditReportEmail>>>,
    pub failing: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl ReportMailer for RecordingMailer {
    async fn send_audit_report(&self, email: &AuditReportEmail) -> Result<()> {
        if self.failing {
            return Err(AuditError::EmailDelivery {
                details: "provider rejected the message".to_string(),
            }
            .into());
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Progress reporter that keeps messages in memory
#[derive(Clone, Default)]
pub struct CapturingProgress {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl CapturingProgress {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ProgressReporter for CapturingProgress {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("{}/{} {}", current, total, message.unwrap_or_default()));
    }

    fn report_error(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("Completed: {}", message));
    }
}
