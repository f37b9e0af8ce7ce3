use super::issue::Issue;
use serde::{Deserialize, Serialize};

/// Certificate status.
///
/// `valid` only reflects that the HTTPS URL answered with a status below 500;
/// the chain is never inspected, so issuer and expiry stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslStatus {
    pub valid: bool,
    pub issuer: Option<String>,
    pub expiry_date: Option<String>,
}

/// Which of the six tracked security headers are correctly configured
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityHeaders {
    pub content_security_policy: bool,
    pub x_content_type_options: bool,
    pub x_frame_options: bool,
    pub strict_transport_security: bool,
    pub x_xss_protection: bool,
    pub referrer_policy: bool,
}

impl SecurityHeaders {
    pub const TRACKED: usize = 6;

    pub fn configured_count(&self) -> usize {
        [
            self.content_security_policy,
            self.x_content_type_options,
            self.x_frame_options,
            self.strict_transport_security,
            self.x_xss_protection,
            self.referrer_policy,
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// Transport and header findings for a site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityResult {
    pub score: u8,
    pub ssl: SslStatus,
    pub https: bool,
    pub headers: SecurityHeaders,
    pub mixed_content: bool,
    pub issues: Vec<Issue>,
}
