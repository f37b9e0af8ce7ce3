use async_trait::async_trait;
use site_audit::prelude::*;

/// Mock LeadRepository whose every operation fails like a broken disk
pub struct FailingLeadRepository;

fn broken() -> anyhow::Error {
    AuditError::storage("disk quota exceeded").into()
}

#[async_trait]
impl LeadRepository for FailingLeadRepository {
    async fn create(&self, _new_lead: NewLead) -> Result<Lead> {
        Err(broken())
    }

    async fn find_by_id(&self, _id: &LeadId) -> Result<Option<Lead>> {
        Err(broken())
    }

    async fn save(&self, _lead: &Lead) -> Result<()> {
        Err(broken())
    }

    async fn list(&self, _page: usize, _limit: usize) -> Result<LeadPage> {
        Err(broken())
    }
}
