use crate::audit::domain::PageSpeedReport;
use crate::shared::Result;
use async_trait::async_trait;

/// PageSpeedClient port for the external page-speed analysis service
///
/// Requests always use the mobile strategy and the performance category.
#[async_trait]
pub trait PageSpeedClient: Send + Sync {
    /// Analyses `url` and returns whatever the service reported.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The service cannot be reached
    /// - It answers with a non-2xx status
    /// - The response body is not a page-speed document
    async fn analyze(&self, url: &str) -> Result<PageSpeedReport>;
}
