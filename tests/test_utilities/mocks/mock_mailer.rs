use async_trait::async_trait;
use site_audit::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ReportMailer recording every message it is asked to send
#[derive(Clone, Default)]
pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<AuditReportEmail>>>,
    pub should_fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<AuditReportEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportMailer for MockMailer {
    async fn send_audit_report(&self, email: &AuditReportEmail) -> Result<()> {
        if self.should_fail {
            return Err(AuditError::EmailDelivery {
                details: "Resend API returned status code 503".to_string(),
            }
            .into());
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}
