use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - audit finished (and met the threshold, when one was given)
    Success = 0,
    /// The overall score fell below the `--fail-under` threshold
    BelowThreshold = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (validation, network, storage, e-mail, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::BelowThreshold => write!(f, "Below Threshold (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// How a failure is surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    /// Malformed input from the caller
    ClientError,
    /// The referenced record does not exist
    NotFound,
    /// Anything that went wrong on our side or upstream
    ServerError,
}

impl ErrorClass {
    /// HTTP-style status code for this class
    pub fn status_code(self) -> u16 {
        match self {
            ErrorClass::ClientError => 400,
            ErrorClass::NotFound => 404,
            ErrorClass::ServerError => 500,
        }
    }
}

/// Application-specific errors for lead handling and website audits.
///
/// The `Display` text is meant for logs and may carry upstream details;
/// use [`AuditError::public_message`] for anything shown to a lead.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("{message}")]
    Validation { message: String },

    #[error("Invalid lead ID: {id}")]
    InvalidLeadId { id: String },

    #[error("Lead not found: {id}")]
    LeadNotFound { id: String },

    #[error("No audit results found for lead {id}")]
    MissingAuditResults { id: String },

    #[error("Failed to fetch page {url}: {details}")]
    PageFetch { url: String, details: String },

    #[error("Failed to audit website for lead {lead_id}: {details}")]
    AuditFailed { lead_id: String, details: String },

    #[error("Failed to send email: {details}")]
    EmailDelivery { details: String },

    #[error("{variable} environment variable is not set\n\n💡 Hint: export {variable} or set it in site-audit.config.yml")]
    MissingCredential { variable: &'static str },

    #[error("Lead storage error: {details}")]
    Storage { details: String },

    #[error("Failed to write output file {}: {details}", path.display())]
    FileWrite { path: PathBuf, details: String },
}

impl AuditError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn storage(details: impl Into<String>) -> Self {
        Self::Storage {
            details: details.into(),
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            AuditError::Validation { .. }
            | AuditError::InvalidLeadId { .. }
            | AuditError::MissingAuditResults { .. } => ErrorClass::ClientError,
            AuditError::LeadNotFound { .. } => ErrorClass::NotFound,
            AuditError::PageFetch { .. }
            | AuditError::AuditFailed { .. }
            | AuditError::EmailDelivery { .. }
            | AuditError::MissingCredential { .. }
            | AuditError::Storage { .. }
            | AuditError::FileWrite { .. } => ErrorClass::ServerError,
        }
    }

    /// Message safe to show to the person who submitted the form.
    pub fn public_message(&self) -> String {
        match self {
            AuditError::Validation { message } => message.clone(),
            AuditError::InvalidLeadId { .. } => "Invalid lead ID".to_string(),
            AuditError::LeadNotFound { .. } => "Lead not found".to_string(),
            AuditError::MissingAuditResults { .. } => {
                "No audit results found for this lead".to_string()
            }
            AuditError::PageFetch { .. } | AuditError::AuditFailed { .. } => {
                "Failed to audit website. Please check the URL and try again.".to_string()
            }
            AuditError::EmailDelivery { .. } => "Failed to send email".to_string(),
            AuditError::MissingCredential { .. }
            | AuditError::Storage { .. }
            | AuditError::FileWrite { .. } => {
                "An unexpected error occurred".to_string()
            }
        }
    }

    /// Lead the failure belongs to, when the lead was already created.
    pub fn lead_id(&self) -> Option<&str> {
        match self {
            AuditError::AuditFailed { lead_id, .. } => Some(lead_id),
            _ => None,
        }
    }
}

/// Structured failure payload: `{ "error": "...", "leadId": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
    #[serde(skip)]
    pub class: Option<ErrorClass>,
}

impl ErrorPayload {
    /// Builds the payload for any error, looking through the context chain
    /// for an [`AuditError`]. Unknown errors never leak their details.
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.chain().find_map(|e| e.downcast_ref::<AuditError>()) {
            Some(audit_error) => Self {
                error: audit_error.public_message(),
                lead_id: audit_error.lead_id().map(str::to_string),
                class: Some(audit_error.class()),
            },
            None => Self {
                error: "An unexpected error occurred".to_string(),
                lead_id: None,
                class: Some(ErrorClass::ServerError),
            },
        }
    }

    pub fn class(&self) -> ErrorClass {
        self.class.unwrap_or(ErrorClass::ServerError)
    }
}
