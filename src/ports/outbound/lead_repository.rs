use crate::leads::{Lead, LeadId, NewLead};
use crate::shared::Result;
use async_trait::async_trait;

/// One page of leads plus the total number stored
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadPage {
    pub leads: Vec<Lead>,
    pub total: usize,
}

/// LeadRepository port for the lead record store
///
/// The store is keyed by an opaque [`LeadId`]; the core never queries it
/// beyond these four operations.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Persists a new lead and returns the stored record
    async fn create(&self, new_lead: NewLead) -> Result<Lead>;

    async fn find_by_id(&self, id: &LeadId) -> Result<Option<Lead>>;

    /// Overwrites the stored record, refreshing `updated_at`
    async fn save(&self, lead: &Lead) -> Result<()>;

    /// Newest first. `page` is 1-based.
    async fn list(&self, page: usize, limit: usize) -> Result<LeadPage>;
}
