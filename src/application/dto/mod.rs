/// Data Transfer Objects for application layer
///
/// DTOs carry use case results out to the CLI and serialise into the
/// JSON shapes callers of the lead workflow expect.
mod lead_responses;
mod output_format;

pub use lead_responses::{
    LeadDetailResponse, LeadListResponse, Pagination, SendReportResponse, SubmitLeadResponse,
    REPORT_SENT_MESSAGE,
};
pub use output_format::OutputFormat;
