use crate::shared::error::AuditError;
use crate::shared::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use url::Url;

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_BUSINESS_NAME_CHARS: usize = 200;

/// Raw lead form as received from the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadSubmission {
    pub name: String,
    pub business_name: String,
    pub email: String,
    pub whatsapp_no: String,
    pub website_url: String,
}

/// A submission that passed validation; fields are trimmed, the e-mail is
/// lower-cased and the website URL carries a scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub name: String,
    pub business_name: String,
    pub email: String,
    pub whatsapp_no: String,
    pub website_url: String,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap())
}

/// Prefixes `https://` unless the address already names http or https.
pub fn normalize_website_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

impl LeadSubmission {
    pub fn validate(&self) -> Result<NewLead> {
        let name = self.name.trim();
        let business_name = self.business_name.trim();
        let email = self.email.trim();
        let whatsapp_no = self.whatsapp_no.trim();
        let website_url = self.website_url.trim();

        if [name, business_name, email, whatsapp_no, website_url]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(AuditError::validation("All fields are required").into());
        }

        if !email_pattern().is_match(email) {
            return Err(AuditError::validation("Invalid email format").into());
        }

        let website_url = normalize_website_url(website_url);
        if Url::parse(&website_url).is_err() {
            return Err(AuditError::validation("Invalid website URL").into());
        }

        if name.chars().count() > MAX_NAME_CHARS {
            return Err(AuditError::validation("Name cannot exceed 100 characters").into());
        }
        if business_name.chars().count() > MAX_BUSINESS_NAME_CHARS {
            return Err(
                AuditError::validation("Business name cannot exceed 200 characters").into(),
            );
        }

        Ok(NewLead {
            name: name.to_string(),
            business_name: business_name.to_string(),
            email: email.to_lowercase(),
            whatsapp_no: whatsapp_no.to_string(),
            website_url,
        })
    }
}
