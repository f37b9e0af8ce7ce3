use crate::adapters::outbound::formatters::HtmlReportFormatter;
use crate::application::read_models::{AuditReportViewBuilder, RecipientView};
use crate::config::{AppConfig, ENV_RESEND_API_KEY};
use crate::ports::outbound::{AuditReportEmail, ReportFormatter, ReportMailer};
use crate::shared::error::AuditError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Credentials and addressing for the Resend e-mail API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerSettings {
    pub api_key: String,
    pub from: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl MailerSettings {
    /// # Errors
    /// Returns [`AuditError::MissingCredential`] when no API key is configured
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api_key = config
            .resend_api_key
            .clone()
            .ok_or(AuditError::MissingCredential {
                variable: ENV_RESEND_API_KEY,
            })?;

        Ok(Self {
            api_key,
            from: config.email_from.clone(),
            endpoint: config.resend_endpoint.clone(),
            timeout: config.request_timeout,
        })
    }
}

#[derive(Debug, Serialize)]
struct ResendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: String,
    html: String,
}

/// ResendMailer adapter delivering audit reports through the Resend API
pub struct ResendMailer {
    client: reqwest::Client,
    settings: MailerSettings,
    formatter: HtmlReportFormatter,
}

impl ResendMailer {
    pub fn new(settings: MailerSettings) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(format!("site-audit/{}", version))
            .build()?;

        Ok(Self {
            client,
            settings,
            formatter: HtmlReportFormatter::new(),
        })
    }

    fn render(&self, email: &AuditReportEmail) -> Result<String> {
        let view = AuditReportViewBuilder::build(
            &email.audit_results,
            Some(RecipientView {
                name: email.name.clone(),
                business_name: email.business_name.clone(),
            }),
        );
        self.formatter.format(&view)
    }
}

#[async_trait]
impl ReportMailer for ResendMailer {
    async fn send_audit_report(&self, email: &AuditReportEmail) -> Result<()> {
        let request = ResendEmailRequest {
            from: &self.settings.from,
            to: [&email.to],
            subject: format!("Website Audit Report for {}", email.website_url),
            html: self.render(email)?,
        };

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AuditError::EmailDelivery {
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuditError::EmailDelivery {
                details: format!("Resend API returned status code {}: {}", status, body),
            }
            .into());
        }

        tracing::info!(to = %email.to, website = %email.website_url, "audit report e-mailed");
        Ok(())
    }
}
