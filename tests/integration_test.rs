/// Integration tests for the audit engine and the lead workflow
mod test_utilities;

use site_audit::prelude::*;
use tempfile::TempDir;
use test_utilities::mocks::*;

const SITE: &str = "https://acme.example/";
const BARE_SITE: &str = "http://bare.example/";

/// 45-character title, 140-character description, one H1, every tag set
fn optimised_page() -> String {
    let title = "Acme Plumbing - Emergency Repairs Springfield";
    let description = "a".repeat(140);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>{title}</title>
  <meta name="description" content="{description}">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link rel="canonical" href="https://acme.example/">
  <meta property="og:title" content="Acme Plumbing">
  <meta property="og:description" content="Emergency repairs">
  <meta property="og:image" content="https://acme.example/og.png">
  <meta name="twitter:card" content="summary">
  <meta name="twitter:title" content="Acme Plumbing">
  <meta name="twitter:description" content="Emergency repairs">
</head>
<body>
  <h1>Acme Plumbing</h1>
  <h2>Services</h2>
  <img src="/van.jpg" alt="Our van">
  <a href="/contact">Contact</a>
  <a href="https://maps.example/acme">Directions</a>
</body>
</html>"#
    )
}

/// Five images without alt text and nothing else
fn bare_page() -> &'static str {
    r#"<html><body><img src="a.png"><img src="b.png"><img src="c.png"><img src="d.png"><img src="e.png"></body></html>"#
}

fn hardened_site() -> MockWebClient {
    MockWebClient::new()
        .with_page(SITE, 200, &optimised_page())
        .with_headers(
            SITE,
            &[
                ("Content-Security-Policy", "default-src 'self'"),
                ("X-Content-Type-Options", "nosniff"),
                ("X-Frame-Options", "DENY"),
                ("Strict-Transport-Security", "max-age=63072000"),
                ("Referrer-Policy", "strict-origin-when-cross-origin"),
            ],
        )
        .with_page("https://acme.example/robots.txt", 200, "User-agent: *")
        .with_page("https://acme.example/sitemap.xml", 200, "<urlset/>")
}

fn bare_site() -> MockWebClient {
    MockWebClient::new().with_page(BARE_SITE, 200, bare_page())
}

fn speed(score: f64) -> MockPageSpeedClient {
    MockPageSpeedClient::with_report(PageSpeedReport {
        performance_score: Some(score),
        ..Default::default()
    })
}

fn weighted(seo: u8, performance: u8, security: u8) -> u8 {
    (0.35 * f64::from(seo) + 0.35 * f64::from(performance) + 0.30 * f64::from(security)).round()
        as u8
}

mod audit_properties {
    use super::*;

    #[tokio::test]
    async fn test_optimised_page_scores_full_marks() {
        let engine = AuditEngine::new(hardened_site(), speed(0.95));

        let audit = engine.perform_full_audit("acme.example").await.unwrap();

        assert_eq!(audit.seo_score, 100);
        assert!(audit.seo.issues.is_empty());
        assert_eq!(audit.security_score, 100);
        assert!(audit.security.https);
        assert!(audit.security.ssl.valid);
        assert!(!audit.security.mixed_content);
        assert_eq!(audit.performance_score, 95);
        assert_eq!(audit.overall_score, weighted(100, 95, 100));
        assert_eq!(audit.overall_score, 98);
        assert_eq!(audit.website_url, "https://acme.example");
    }

    #[tokio::test]
    async fn test_bare_page_hits_every_seo_check() {
        let engine = AuditEngine::new(bare_site(), speed(0.5));

        let audit = engine.perform_full_audit(BARE_SITE).await.unwrap();

        // 100 - 15 - 10 - 10 - 10 - 3 - 3 - 2 - 10 - 2 - 2
        assert_eq!(audit.seo_score, 33);
        assert_eq!(audit.seo.issues.len(), 10);
        assert!(!audit.seo.robots_txt);
        assert!(!audit.seo.sitemap);
        assert_eq!(audit.seo.images.without_alt, 5);
    }

    #[tokio::test]
    async fn test_plain_http_without_headers() {
        let engine = AuditEngine::new(bare_site(), speed(0.5));

        let audit = engine.perform_full_audit(BARE_SITE).await.unwrap();

        assert!(!audit.security.https);
        assert!(audit.security_score <= 70);
        // 100 - 30 - 10 - 5 - 5 - 3, no HSTS check without HTTPS
        assert_eq!(audit.security_score, 47);
        assert!(audit
            .security
            .issues
            .iter()
            .any(|issue| issue.kind == IssueKind::Error && issue.message == "Website is not using HTTPS"));
    }

    #[tokio::test]
    async fn test_speed_service_outage_yields_neutral_score() {
        let page_speed = MockPageSpeedClient::unavailable();
        let engine = AuditEngine::new(hardened_site(), page_speed.clone());

        let audit = engine.perform_full_audit(SITE).await.unwrap();

        assert_eq!(page_speed.calls(), 1);
        assert_eq!(audit.performance_score, 50);
        let issues = &audit.performance.issues;
        assert_eq!(
            issues.iter().filter(|i| i.kind == IssueKind::Info).count(),
            1
        );
        assert_eq!(issues[0].message, "Could not fetch detailed performance metrics");
        assert!(issues
            .iter()
            .any(|i| i.kind == IssueKind::Warning && i.message == "Performance could be improved"));
        let vitals = &audit.performance.core_web_vitals;
        assert!(vitals.lcp.is_none());
        assert!(vitals.fid.is_none());
        assert!(vitals.cls.is_none());
        assert!(vitals.fcp.is_none());
        assert!(vitals.ttfb.is_none());
    }

    #[tokio::test]
    async fn test_rerunning_against_unchanged_site_is_identical() {
        let engine = AuditEngine::new(hardened_site(), speed(0.71));

        let first = engine.perform_full_audit(SITE).await.unwrap();
        let second = engine.perform_full_audit(SITE).await.unwrap();

        assert_eq!(first.seo, second.seo);
        assert_eq!(first.performance, second.performance);
        assert_eq!(first.security, second.security);
        assert_eq!(first.overall_score, second.overall_score);
    }

    #[tokio::test]
    async fn test_scores_stay_in_range_and_follow_weights() {
        for (site, url) in [(hardened_site(), SITE), (bare_site(), BARE_SITE)] {
            for score in [0.0, 0.37, 0.5, 0.999, 1.0] {
                let engine = AuditEngine::new(site.clone(), speed(score));
                let audit = engine.perform_full_audit(url).await.unwrap();

                for value in [
                    audit.seo_score,
                    audit.performance_score,
                    audit.security_score,
                    audit.overall_score,
                ] {
                    assert!(value <= 100);
                }
                assert_eq!(
                    audit.overall_score,
                    weighted(audit.seo_score, audit.performance_score, audit.security_score)
                );
            }
        }
    }

    #[tokio::test]
    async fn test_unreachable_page_fails_the_whole_audit() {
        let engine = AuditEngine::new(MockWebClient::new(), speed(0.9));

        let err = engine.perform_full_audit(SITE).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AuditError>(),
            Some(AuditError::PageFetch { .. })
        ));
    }

    #[tokio::test]
    async fn test_error_status_fails_the_whole_audit() {
        let site = MockWebClient::new().with_page(SITE, 500, "oops");
        let engine = AuditEngine::new(site, speed(0.9));

        assert!(engine.perform_full_audit(SITE).await.is_err());
    }

    #[tokio::test]
    async fn test_failing_side_checks_only_degrade() {
        // HEAD refused and no robots/sitemap routes; the page itself loads.
        let site = MockWebClient::new()
            .with_page(SITE, 200, &optimised_page())
            .without_head();
        let engine = AuditEngine::new(site.clone(), MockPageSpeedClient::unavailable());

        let audit = engine.perform_full_audit(SITE).await.unwrap();

        assert_eq!(audit.performance_score, 50);
        assert!(audit.security_score < 100);
        assert!(site
            .call_log()
            .iter()
            .any(|call| call == "HEAD https://acme.example/"));
        assert!(site
            .call_log()
            .iter()
            .any(|call| call == "GET https://acme.example/robots.txt"));
    }
}

mod lead_workflow {
    use super::*;

    fn submission() -> LeadSubmission {
        LeadSubmission {
            name: "Jane Doe".to_string(),
            business_name: "Acme Plumbing".to_string(),
            email: "Jane@Acme.Example".to_string(),
            whatsapp_no: "+15550100".to_string(),
            website_url: "acme.example".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_then_resend_then_list() {
        let data_dir = TempDir::new().unwrap();
        let mailer = MockMailer::new();
        let progress = MockProgressReporter::new();

        let submit = SubmitLeadUseCase::new(
            JsonFileLeadRepository::new(data_dir.path()).unwrap(),
            AuditEngine::new(hardened_site(), speed(0.9)),
            Some(mailer.clone()),
            progress.clone(),
        );
        let response = submit.execute(submission()).await.unwrap();

        assert!(response.success);
        assert!(response.email_sent);
        assert_eq!(response.audit_results.seo_score, 100);
        assert_eq!(mailer.sent().len(), 1);
        assert_eq!(mailer.sent()[0].to, "jane@acme.example");
        assert!(progress
            .get_messages()
            .iter()
            .any(|m| m.contains("Auditing https://acme.example")));

        let resend = SendReportUseCase::new(
            JsonFileLeadRepository::new(data_dir.path()).unwrap(),
            mailer.clone(),
            MockProgressReporter::new(),
        );
        let resent = resend
            .execute(&response.lead_id.to_string())
            .await
            .unwrap();
        assert_eq!(resent.message, "Report sent successfully");
        assert_eq!(mailer.sent().len(), 2);

        let query = LeadQueryUseCase::new(JsonFileLeadRepository::new(data_dir.path()).unwrap());
        let list = query.list(None, None).await.unwrap();
        assert_eq!(list.pagination.total, 1);
        assert_eq!(list.data[0].id, response.lead_id);
        assert!(list.data[0].email_sent);

        let detail = query.get(&response.lead_id.to_string()).await.unwrap();
        assert_eq!(
            detail.data.audit_results.as_ref().map(|a| a.overall_score),
            Some(response.audit_results.overall_score)
        );
    }

    #[tokio::test]
    async fn test_unreachable_site_keeps_the_lead() {
        let data_dir = TempDir::new().unwrap();
        let mailer = MockMailer::new();
        let submit = SubmitLeadUseCase::new(
            JsonFileLeadRepository::new(data_dir.path()).unwrap(),
            AuditEngine::new(MockWebClient::new(), speed(0.9)),
            Some(mailer.clone()),
            MockProgressReporter::new(),
        );

        let err = submit.execute(submission()).await.unwrap_err();
        let payload = ErrorPayload::from_error(&err);

        assert_eq!(payload.class(), ErrorClass::ServerError);
        assert_eq!(
            payload.error,
            "Failed to audit website. Please check the URL and try again."
        );
        let lead_id = payload.lead_id.expect("lead id in payload");

        let query = LeadQueryUseCase::new(JsonFileLeadRepository::new(data_dir.path()).unwrap());
        let stored = query.get(&lead_id).await.unwrap().data;
        assert!(stored.audit_results.is_none());
        assert!(mailer.sent().is_empty());

        let resend = SendReportUseCase::new(
            JsonFileLeadRepository::new(data_dir.path()).unwrap(),
            mailer,
            MockProgressReporter::new(),
        );
        let err = resend.execute(&lead_id).await.unwrap_err();
        let payload = ErrorPayload::from_error(&err);
        assert_eq!(payload.class().status_code(), 400);
        assert_eq!(payload.error, "No audit results found for this lead");
    }

    #[tokio::test]
    async fn test_mail_outage_is_reported_not_raised() {
        let data_dir = TempDir::new().unwrap();
        let submit = SubmitLeadUseCase::new(
            JsonFileLeadRepository::new(data_dir.path()).unwrap(),
            AuditEngine::new(hardened_site(), MockPageSpeedClient::unavailable()),
            Some(MockMailer::with_failure()),
            MockProgressReporter::new(),
        );

        let response = submit.execute(submission()).await.unwrap();

        assert!(!response.email_sent);
        assert_eq!(response.audit_results.performance_score, 50);
    }

    #[tokio::test]
    async fn test_invalid_submission_is_a_client_error() {
        let submit = SubmitLeadUseCase::new(
            InMemoryLeadRepository::new(),
            AuditEngine::new(hardened_site(), speed(0.9)),
            None::<MockMailer>,
            MockProgressReporter::new(),
        );

        let mut bad = submission();
        bad.website_url = "   ".to_string();
        let err = submit.execute(bad).await.unwrap_err();
        let payload = ErrorPayload::from_error(&err);

        assert_eq!(payload.error, "All fields are required");
        assert_eq!(payload.class().status_code(), 400);
        assert!(payload.lead_id.is_none());
    }

    #[tokio::test]
    async fn test_storage_failure_is_a_generic_server_error() {
        let submit = SubmitLeadUseCase::new(
            FailingLeadRepository,
            AuditEngine::new(hardened_site(), speed(0.9)),
            None::<MockMailer>,
            MockProgressReporter::new(),
        );

        let err = submit.execute(submission()).await.unwrap_err();
        let payload = ErrorPayload::from_error(&err);

        assert_eq!(payload.error, "An unexpected error occurred");
        assert_eq!(payload.class(), ErrorClass::ServerError);
    }

    #[tokio::test]
    async fn test_unknown_lead_is_not_found() {
        let query = LeadQueryUseCase::new(InMemoryLeadRepository::new());
        let err = query.get(&LeadId::new().to_string()).await.unwrap_err();
        assert_eq!(ErrorPayload::from_error(&err).class().status_code(), 404);
    }
}
