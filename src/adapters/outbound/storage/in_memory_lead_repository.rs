use super::page_of;
use crate::leads::{Lead, LeadId, NewLead};
use crate::ports::outbound::{LeadPage, LeadRepository};
use crate::shared::Result;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;

/// InMemoryLeadRepository keeps leads in a concurrent map for the
/// lifetime of the process.
#[derive(Clone, Default)]
pub struct InMemoryLeadRepository {
    leads: Arc<DashMap<LeadId, Lead>>,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn create(&self, new_lead: NewLead) -> Result<Lead> {
        let lead = Lead::create(LeadId::new(), new_lead, Utc::now());
        self.leads.insert(lead.id, lead.clone());
        Ok(lead)
    }

    async fn find_by_id(&self, id: &LeadId) -> Result<Option<Lead>> {
        Ok(self.leads.get(id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, lead: &Lead) -> Result<()> {
        let mut stored = lead.clone();
        stored.touch(Utc::now());
        self.leads.insert(stored.id, stored);
        Ok(())
    }

    async fn list(&self, page: usize, limit: usize) -> Result<LeadPage> {
        let leads = self
            .leads
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        Ok(page_of(leads, page, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn new_lead(name: &str) -> NewLead {
        NewLead {
            name: name.to_string(),
            business_name: format!("{} Co", name),
            email: format!("{}@example.com", name.to_lowercase()),
            whatsapp_no: "+15550100".to_string(),
            website_url: "https://example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let repo = InMemoryLeadRepository::new();
        let lead = repo.create(new_lead("Jane")).await.unwrap();

        let found = repo.find_by_id(&lead.id).await.unwrap().unwrap();
        assert_eq!(found, lead);
        assert!(!found.email_sent);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_find_unknown_id_is_none() {
        let repo = InMemoryLeadRepository::new();
        assert!(repo.find_by_id(&LeadId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_and_refreshes_updated_at() {
        let repo = InMemoryLeadRepository::new();
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut lead = Lead::create(LeadId::new(), new_lead("Jane"), created);
        repo.save(&lead).await.unwrap();

        lead.mark_email_sent();
        repo.save(&lead).await.unwrap();

        let stored = repo.find_by_id(&lead.id).await.unwrap().unwrap();
        assert!(stored.email_sent);
        assert_eq!(stored.created_at, created);
        assert!(stored.updated_at > created);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_paged() {
        let repo = InMemoryLeadRepository::new();
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        for (i, name) in ["Ann", "Bob", "Cat"].iter().enumerate() {
            let lead = Lead::create(
                LeadId::new(),
                new_lead(name),
                base + Duration::minutes(i as i64),
            );
            repo.save(&lead).await.unwrap();
        }

        let first = repo.list(1, 2).await.unwrap();
        assert_eq!(first.total, 3);
        let names: Vec<_> = first.leads.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Cat", "Bob"]);

        let second = repo.list(2, 2).await.unwrap();
        assert_eq!(second.leads.len(), 1);
        assert_eq!(second.leads[0].name, "Ann");

        let beyond = repo.list(5, 2).await.unwrap();
        assert!(beyond.leads.is_empty());
        assert_eq!(beyond.total, 3);
    }
}
