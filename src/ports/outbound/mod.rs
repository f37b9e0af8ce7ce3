/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the network, the lead store, e-mail and the console.
pub mod lead_repository;
pub mod output_presenter;
pub mod page_speed_client;
pub mod progress_reporter;
pub mod report_formatter;
pub mod report_mailer;
pub mod web_client;

pub use lead_repository::{LeadPage, LeadRepository};
pub use output_presenter::OutputPresenter;
pub use page_speed_client::PageSpeedClient;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use report_mailer::{AuditReportEmail, ReportMailer};
pub use web_client::{WebClient, WebResponse};
