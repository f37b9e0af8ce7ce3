/// Lead storage adapters
mod in_memory_lead_repository;
mod json_file_lead_repository;

pub use in_memory_lead_repository::InMemoryLeadRepository;
pub use json_file_lead_repository::{JsonFileLeadRepository, LEAD_SCHEMA_VERSION};

use crate::leads::Lead;
use crate::ports::outbound::LeadPage;

/// Orders leads newest first and cuts out the requested 1-based page.
fn page_of(mut leads: Vec<Lead>, page: usize, limit: usize) -> LeadPage {
    leads.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.to_string().cmp(&b.id.to_string()))
    });

    let total = leads.len();
    let skip = page.saturating_sub(1).saturating_mul(limit);
    let leads = leads.into_iter().skip(skip).take(limit).collect();

    LeadPage { leads, total }
}
