use super::page_of;
use crate::leads::{Lead, LeadId, NewLead};
use crate::ports::outbound::{LeadPage, LeadRepository};
use crate::shared::error::AuditError;
use crate::shared::security::{
    validate_data_dir, validate_document_size, validate_not_symlink, MAX_LEAD_DOCUMENT_SIZE,
};
use crate::shared::Result;
use async_trait::async_trait;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Version written into every stored lead document
pub const LEAD_SCHEMA_VERSION: u32 = 1;

const LEADS_SUBDIR: &str = "leads";
const MAX_CONCURRENT_READS: usize = 16;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLead {
    schema_version: u32,
    lead: Lead,
}

/// JsonFileLeadRepository stores one JSON document per lead under
/// `<data_dir>/leads/<id>.json`.
///
/// # Security
/// The data directory and every document are rejected when they are
/// symbolic links, and documents above [`MAX_LEAD_DOCUMENT_SIZE`] are
/// never read.
pub struct JsonFileLeadRepository {
    leads_dir: PathBuf,
}

impl JsonFileLeadRepository {
    /// # Errors
    /// Fails when `data_dir` exists but is a symlink or not a directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        validate_data_dir(&data_dir)?;
        let leads_dir = data_dir.join(LEADS_SUBDIR);
        validate_data_dir(&leads_dir)?;
        Ok(Self { leads_dir })
    }

    pub fn leads_dir(&self) -> &Path {
        &self.leads_dir
    }

    fn document_path(&self, id: &LeadId) -> PathBuf {
        self.leads_dir.join(format!("{}.json", id))
    }

    async fn write_document(&self, lead: &Lead) -> Result<()> {
        tokio::fs::create_dir_all(&self.leads_dir)
            .await
            .map_err(|e| {
                AuditError::storage(format!(
                    "Failed to create {}: {}",
                    self.leads_dir.display(),
                    e
                ))
            })?;

        let path = self.document_path(&lead.id);
        if tokio::fs::symlink_metadata(&path).await.is_ok() {
            validate_not_symlink(&path, "write")?;
        }

        let document = StoredLead {
            schema_version: LEAD_SCHEMA_VERSION,
            lead: lead.clone(),
        };
        let json = serde_json::to_vec_pretty(&document)?;

        // Write then rename so readers never observe a half-written document.
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json).await.map_err(|e| {
            AuditError::storage(format!("Failed to write {}: {}", tmp_path.display(), e))
        })?;
        tokio::fs::rename(&tmp_path, &path).await.map_err(|e| {
            AuditError::storage(format!("Failed to write {}: {}", path.display(), e))
        })?;

        tracing::debug!(lead_id = %lead.id, path = %path.display(), "lead document written");
        Ok(())
    }

    async fn read_document(path: &Path) -> Result<Option<Lead>> {
        let metadata = match tokio::fs::symlink_metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AuditError::storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                ))
                .into())
            }
        };

        if metadata.is_symlink() {
            validate_not_symlink(path, "read")?;
        }
        validate_document_size(metadata.len(), path, MAX_LEAD_DOCUMENT_SIZE)?;

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AuditError::storage(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let document: StoredLead = serde_json::from_slice(&bytes).map_err(|e| {
            AuditError::storage(format!("Corrupt lead document {}: {}", path.display(), e))
        })?;

        if document.schema_version != LEAD_SCHEMA_VERSION {
            return Err(AuditError::storage(format!(
                "Unsupported schema version {} in {}",
                document.schema_version,
                path.display()
            ))
            .into());
        }

        Ok(Some(document.lead))
    }

    async fn document_paths(&self) -> Result<Vec<PathBuf>> {
        let mut entries = match tokio::fs::read_dir(&self.leads_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AuditError::storage(format!(
                    "Failed to list {}: {}",
                    self.leads_dir.display(),
                    e
                ))
                .into())
            }
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        Ok(paths)
    }
}

#[async_trait]
impl LeadRepository for JsonFileLeadRepository {
    async fn create(&self, new_lead: NewLead) -> Result<Lead> {
        let lead = Lead::create(LeadId::new(), new_lead, Utc::now());
        self.write_document(&lead).await?;
        tracing::info!(lead_id = %lead.id, "lead created");
        Ok(lead)
    }

    async fn find_by_id(&self, id: &LeadId) -> Result<Option<Lead>> {
        Self::read_document(&self.document_path(id)).await
    }

    async fn save(&self, lead: &Lead) -> Result<()> {
        let mut stored = lead.clone();
        stored.touch(Utc::now());
        self.write_document(&stored).await
    }

    async fn list(&self, page: usize, limit: usize) -> Result<LeadPage> {
        let paths = self.document_paths().await?;

        let results: Vec<Result<Option<Lead>>> = stream::iter(paths)
            .map(|path| async move { Self::read_document(&path).await })
            .buffer_unordered(MAX_CONCURRENT_READS)
            .collect()
            .await;

        let mut leads = Vec::with_capacity(results.len());
        for result in results {
            if let Some(lead) = result? {
                leads.push(lead);
            }
        }

        Ok(page_of(leads, page, limit))
    }
}
