use super::*;
use crate::adapters::outbound::storage::InMemoryLeadRepository;
use crate::leads::LeadId;
use crate::shared::error::ErrorPayload;
use crate::test_support::{
    sample_audit, CapturingProgress, FixedAuditor, RecordingMailer, UnreachableAuditor,
};

fn submission() -> LeadSubmission {
    LeadSubmission {
        name: " Jane Doe ".to_string(),
        business_name: "Acme Plumbing".to_string(),
        email: "Jane@Acme.Example".to_string(),
        whatsapp_no: "+15550100".to_string(),
        website_url: "acme.example".to_string(),
    }
}

#[tokio::test]
async fn test_submit_audits_stores_and_emails() {
    let repository = InMemoryLeadRepository::new();
    let auditor = FixedAuditor::default();
    let mailer = RecordingMailer::default();
    let use_case = SubmitLeadUseCase::new(
        repository.clone(),
        auditor.clone(),
        Some(mailer.clone()),
        CapturingProgress::default(),
    );

    let response = use_case.execute(submission()).await.unwrap();

    assert!(response.success);
    assert!(response.email_sent);
    assert_eq!(response.audit_results, sample_audit());
    assert_eq!(
        auditor.urls.lock().unwrap().as_slice(),
        ["https://acme.example"]
    );

    let stored = repository
        .find_by_id(&response.lead_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.name, "Jane Doe");
    assert_eq!(stored.email, "jane@acme.example");
    assert!(stored.email_sent);
    assert_eq!(stored.audit_results, Some(sample_audit()));

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "jane@acme.example");
    assert_eq!(sent[0].website_url, "https://acme.example");
}

#[tokio::test]
async fn test_validation_failure_stores_nothing() {
    let repository = InMemoryLeadRepository::new();
    let use_case = SubmitLeadUseCase::new(
        repository.clone(),
        FixedAuditor::default(),
        None::<RecordingMailer>,
        CapturingProgress::default(),
    );

    let mut bad = submission();
    bad.email = "not-an-email".to_string();
    let err = use_case.execute(bad).await.unwrap_err();

    assert_eq!(ErrorPayload::from_error(&err).error, "Invalid email format");
    assert!(repository.is_empty());
}

#[tokio::test]
async fn test_audit_failure_keeps_lead_and_reports_its_id() {
    let repository = InMemoryLeadRepository::new();
    let mailer = RecordingMailer::default();
    let use_case = SubmitLeadUseCase::new(
        repository.clone(),
        UnreachableAuditor,
        Some(mailer.clone()),
        CapturingProgress::default(),
    );

    let err = use_case.execute(submission()).await.unwrap_err();
    let payload = ErrorPayload::from_error(&err);

    assert_eq!(
        payload.error,
        "Failed to audit website. Please check the URL and try again."
    );
    let lead_id = LeadId::parse(payload.lead_id.as_deref().unwrap()).unwrap();
    let stored = repository.find_by_id(&lead_id).await.unwrap().unwrap();
    assert!(stored.audit_results.is_none());
    assert!(!stored.email_sent);
    assert_eq!(mailer.sent_count(), 0);
}

#[tokio::test]
async fn test_email_failure_does_not_fail_submission() {
    let repository = InMemoryLeadRepository::new();
    let progress = CapturingProgress::default();
    let use_case = SubmitLeadUseCase::new(
        repository.clone(),
        FixedAuditor::default(),
        Some(RecordingMailer::failing()),
        progress.clone(),
    );

    let response = use_case.execute(submission()).await.unwrap();

    assert!(response.success);
    assert!(!response.email_sent);
    let stored = repository
        .find_by_id(&response.lead_id)
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.email_sent);
    assert!(stored.audit_results.is_some());
    assert!(progress
        .messages()
        .iter()
        .any(|m| m.contains("could not be e-mailed")));
}

#[tokio::test]
async fn test_without_mailer_email_is_not_sent() {
    let use_case = SubmitLeadUseCase::new(
        InMemoryLeadRepository::new(),
        FixedAuditor::default(),
        None::<RecordingMailer>,
        CapturingProgress::default(),
    );

    let response = use_case.execute(submission()).await.unwrap();
    assert!(!response.email_sent);
}
