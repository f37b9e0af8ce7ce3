use crate::audit::domain::AuditResult;
use crate::leads::{Lead, LeadId};
use serde::Serialize;

pub const REPORT_SENT_MESSAGE: &str = "Report sent successfully";

/// Result of a successful lead submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitLeadResponse {
    pub success: bool,
    pub lead_id: LeadId,
    pub audit_results: AuditResult,
    pub email_sent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendReportResponse {
    pub success: bool,
    pub message: String,
}

impl SendReportResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: REPORT_SENT_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub pages: usize,
}

impl Pagination {
    /// `limit` must be at least 1.
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        Self {
            page,
            limit,
            total,
            pages: total.div_ceil(limit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadListResponse {
    pub success: bool,
    pub data: Vec<Lead>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadDetailResponse {
    pub success: bool,
    pub data: Lead,
}
