/// Use cases module containing application business logic orchestration
mod lead_query;
mod run_audit;
mod send_report;
mod submit_lead;

pub use lead_query::{LeadQueryUseCase, DEFAULT_PAGE, DEFAULT_PAGE_LIMIT};
pub use run_audit::RunAuditUseCase;
pub use send_report::SendReportUseCase;
pub use submit_lead::SubmitLeadUseCase;
