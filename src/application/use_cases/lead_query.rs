use crate::application::dto::{LeadDetailResponse, LeadListResponse, Pagination};
use crate::leads::LeadId;
use crate::ports::outbound::LeadRepository;
use crate::shared::error::AuditError;
use crate::shared::Result;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_LIMIT: usize = 20;

/// LeadQueryUseCase - read side of the lead store
pub struct LeadQueryUseCase<R> {
    repository: R,
}

impl<R: LeadRepository> LeadQueryUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Newest leads first. Missing or zero `page`/`limit` fall back to
    /// at least 1.
    pub async fn list(&self, page: Option<usize>, limit: Option<usize>) -> Result<LeadListResponse> {
        let page = page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1);

        let result = self.repository.list(page, limit).await?;
        tracing::debug!(page, limit, total = result.total, "leads listed");

        Ok(LeadListResponse {
            success: true,
            pagination: Pagination::new(page, limit, result.total),
            data: result.leads,
        })
    }

    pub async fn get(&self, lead_id: &str) -> Result<LeadDetailResponse> {
        let id = LeadId::parse(lead_id)?;
        let lead = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AuditError::LeadNotFound { id: id.to_string() })?;

        Ok(LeadDetailResponse {
            success: true,
            data: lead,
        })
    }
}
