//! site-audit - website lead audits for SEO, performance and security
//!
//! Audits a website with three independent scorers, combines them into a
//! weighted overall score, stores the lead that asked for it and e-mails
//! the report. Built with hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`audit`, `leads`): scorers, result types, policies and the lead record
//! - **Application Layer** (`application`): use cases, DTOs and report read models
//! - **Ports** (`ports`): interfaces for the web, PageSpeed, storage, e-mail and console
//! - **Adapters** (`adapters`): reqwest, Resend, filesystem and console implementations
//! - **Shared** (`shared`): error types, result alias and filesystem guards
//!
//! # Example
//!
//! ```no_run
//! use site_audit::prelude::*;
//! use std::time::Duration;
//!
//! # async fn demo() -> Result<()> {
//! let web_client = ReqwestWebClient::new("SiteAuditBot/1.0", Duration::from_secs(30))?;
//! let page_speed = PageSpeedInsightsClient::new(
//!     "https://www.googleapis.com/pagespeedonline/v5/runPagespeed",
//!     None,
//!     "SiteAuditBot/1.0",
//!     Duration::from_secs(60),
//! )?;
//! let engine = AuditEngine::new(web_client, page_speed);
//!
//! let audit = engine.perform_full_audit("example.com").await?;
//! println!("overall score: {}", audit.overall_score);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod audit;
pub mod cli;
pub mod config;
pub mod leads;
pub mod ports;
pub mod shared;

#[cfg(test)]
mod test_support;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        HtmlReportFormatter, JsonReportFormatter, MarkdownReportFormatter,
    };
    pub use crate::adapters::outbound::network::{
        MailerSettings, PageSpeedInsightsClient, ReqwestWebClient, ResendMailer,
    };
    pub use crate::adapters::outbound::storage::{InMemoryLeadRepository, JsonFileLeadRepository};
    pub use crate::application::dto::{
        LeadDetailResponse, LeadListResponse, OutputFormat, Pagination, SendReportResponse,
        SubmitLeadResponse,
    };
    pub use crate::application::read_models::{AuditReportView, AuditReportViewBuilder};
    pub use crate::application::use_cases::{
        LeadQueryUseCase, RunAuditUseCase, SendReportUseCase, SubmitLeadUseCase,
    };
    pub use crate::audit::domain::{
        AuditResult, CoreWebVitals, FieldMetrics, Issue, IssueKind, LabAudit, PageSpeedReport,
        PerformanceResult, SecurityResult, SeoResult,
    };
    pub use crate::audit::services::{
        AuditEngine, PerformanceScorer, SecurityInputs, SecurityScorer, SeoScorer,
    };
    pub use crate::leads::{Lead, LeadId, LeadSubmission, NewLead};
    pub use crate::ports::inbound::SiteAuditPort;
    pub use crate::ports::outbound::{
        AuditReportEmail, LeadPage, LeadRepository, OutputPresenter, PageSpeedClient,
        ProgressReporter, ReportFormatter, ReportMailer, WebClient, WebResponse,
    };
    pub use crate::shared::error::{AuditError, ErrorClass, ErrorPayload, ExitCode};
    pub use crate::shared::Result;
}
