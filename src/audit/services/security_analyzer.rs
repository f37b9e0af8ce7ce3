use super::resource_prober::{PageProbe, ResourceProber};
use crate::audit::domain::{Issue, ScoreCard, SecurityHeaders, SecurityResult, SslStatus};
use crate::ports::outbound::WebClient;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};
use url::Url;

/// Everything the security rubric looks at, collected up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityInputs {
    pub https: bool,
    /// Response headers with lower-cased names; `None` when the site could
    /// not be reached at all
    pub headers: Option<BTreeMap<String, String>>,
    /// Full page fetch, only made for HTTPS targets
    pub page: Option<PageProbe>,
}

/// SecurityAnalyzer inspects scheme, headers and page body.
///
/// Never fails: network problems become deductions and issues.
pub struct SecurityAnalyzer<W: WebClient> {
    prober: ResourceProber<W>,
}

impl<W: WebClient> SecurityAnalyzer<W> {
    pub fn new(client: Arc<W>) -> Self {
        Self {
            prober: ResourceProber::new(client),
        }
    }

    pub async fn analyze(&self, url: &Url) -> SecurityResult {
        let https = url.scheme() == "https";

        let (headers, page) = if https {
            let (headers, page) = tokio::join!(
                self.prober.fetch_headers(url.as_str()),
                self.prober.probe_page(url.as_str())
            );
            (headers, Some(page))
        } else {
            (self.prober.fetch_headers(url.as_str()).await, None)
        };

        let result = SecurityScorer::score(&SecurityInputs {
            https,
            headers,
            page,
        });
        tracing::debug!(url = %url, score = result.score, issues = result.issues.len(), "security audit done");
        result
    }
}

fn mixed_content_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"(?i)(?:src|href)=["']http://"#).unwrap())
}

/// Number of `src=`/`href=` attributes pointing at plain `http://`
pub fn count_insecure_references(body: &str) -> usize {
    mixed_content_pattern().find_iter(body).count()
}

/// Pure security rubric: 100 minus flat deductions, floored at 0
pub struct SecurityScorer;

impl SecurityScorer {
    pub fn score(inputs: &SecurityInputs) -> SecurityResult {
        let mut card = ScoreCard::new();

        if !inputs.https {
            card.deduct(
                30,
                Issue::error(
                    "Website is not using HTTPS",
                    "Install an SSL certificate and redirect HTTP to HTTPS",
                ),
            );
        }

        let headers = match &inputs.headers {
            Some(raw) => check_headers(raw, inputs.https, &mut card),
            None => {
                card.deduct(
                    20,
                    Issue::error(
                        "Could not connect to website",
                        "Ensure the website is accessible",
                    ),
                );
                SecurityHeaders::default()
            }
        };

        let mut mixed_content = false;
        let mut ssl = SslStatus::default();

        if inputs.https {
            match &inputs.page {
                Some(PageProbe::Loaded { status, body }) => {
                    let insecure = count_insecure_references(body);
                    if insecure > 0 {
                        mixed_content = true;
                        card.deduct(
                            10,
                            Issue::warning(
                                format!(
                                    "Potential mixed content detected ({} HTTP resources)",
                                    insecure
                                ),
                                "Update all resource URLs to use HTTPS",
                            ),
                        );
                    }
                    ssl.valid = *status < 500;
                }
                Some(PageProbe::Failed { reason }) if is_certificate_failure(reason) => {
                    card.deduct(
                        20,
                        Issue::error(
                            "SSL certificate issue detected",
                            "Check your SSL certificate validity and configuration",
                        ),
                    );
                }
                Some(PageProbe::Failed { .. }) | None => {}
            }
        }

        if card.current() < 50 {
            card.note(Issue::error(
                "Website security needs significant improvement",
                "Prioritize adding HTTPS and security headers",
            ));
        }
        let (score, issues) = card.finish();

        SecurityResult {
            score,
            ssl,
            https: inputs.https,
            headers,
            mixed_content,
            issues,
        }
    }
}

fn is_certificate_failure(reason: &str) -> bool {
    let reason = reason.to_lowercase();
    reason.contains("certificate") || reason.contains("ssl")
}

fn check_headers(
    raw: &BTreeMap<String, String>,
    https: bool,
    card: &mut ScoreCard,
) -> SecurityHeaders {
    let value = |name: &str| {
        raw.get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    };

    let headers = SecurityHeaders {
        content_security_policy: value("content-security-policy").is_some(),
        x_content_type_options: value("x-content-type-options")
            .is_some_and(|v| v.eq_ignore_ascii_case("nosniff")),
        x_frame_options: value("x-frame-options").is_some_and(|v| {
            v.eq_ignore_ascii_case("deny") || v.eq_ignore_ascii_case("sameorigin")
        }),
        strict_transport_security: value("strict-transport-security").is_some(),
        x_xss_protection: value("x-xss-protection").is_some(),
        referrer_policy: value("referrer-policy").is_some(),
    };

    if !headers.content_security_policy {
        card.deduct(
            10,
            Issue::warning(
                "Missing Content-Security-Policy header",
                "Add a Content-Security-Policy header to prevent XSS attacks",
            ),
        );
    }
    if !headers.x_content_type_options {
        card.deduct(
            5,
            Issue::warning(
                "Missing or invalid X-Content-Type-Options header",
                "Add \"X-Content-Type-Options: nosniff\" header",
            ),
        );
    }
    if !headers.x_frame_options {
        card.deduct(
            5,
            Issue::warning(
                "Missing or invalid X-Frame-Options header",
                "Add \"X-Frame-Options: DENY\" or \"SAMEORIGIN\" to prevent clickjacking",
            ),
        );
    }
    if !headers.strict_transport_security && https {
        card.deduct(
            10,
            Issue::warning(
                "Missing Strict-Transport-Security header",
                "Add HSTS header to enforce HTTPS connections",
            ),
        );
    }
    if !headers.referrer_policy {
        card.deduct(
            3,
            Issue::info(
                "Missing Referrer-Policy header",
                "Add a Referrer-Policy header to control referrer information",
            ),
        );
    }

    headers
}
