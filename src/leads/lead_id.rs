use crate::shared::error::AuditError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unguessable identifier of a lead record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(Uuid);

impl LeadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a caller-supplied id. Blank input and anything that is not a
    /// UUID are client errors, checked before any store lookup.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AuditError::validation("Lead ID is required").into());
        }

        Uuid::parse_str(trimmed).map(Self).map_err(|_| {
            AuditError::InvalidLeadId {
                id: trimmed.to_string(),
            }
            .into()
        })
    }
}

impl Default for LeadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
