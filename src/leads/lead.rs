use super::lead_id::LeadId;
use super::submission::NewLead;
use crate::audit::domain::AuditResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A captured lead and, once audited, its audit results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub business_name: String,
    pub email: String,
    pub whatsapp_no: String,
    pub website_url: String,
    pub audit_results: Option<AuditResult>,
    pub email_sent: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lead {
    pub fn create(id: LeadId, new_lead: NewLead, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new_lead.name,
            business_name: new_lead.business_name,
            email: new_lead.email,
            whatsapp_no: new_lead.whatsapp_no,
            website_url: new_lead.website_url,
            audit_results: None,
            email_sent: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn attach_audit(&mut self, results: AuditResult) {
        self.audit_results = Some(results);
    }

    pub fn mark_email_sent(&mut self) {
        self.email_sent = true;
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
