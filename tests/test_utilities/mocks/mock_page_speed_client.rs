use async_trait::async_trait;
use site_audit::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock PageSpeedClient returning a fixed report, or failing when empty
#[derive(Clone, Default)]
pub struct MockPageSpeedClient {
    report: Option<PageSpeedReport>,
    pub call_count: Arc<AtomicUsize>,
}

impl MockPageSpeedClient {
    pub fn with_report(report: PageSpeedReport) -> Self {
        Self {
            report: Some(report),
            ..Default::default()
        }
    }

    /// Behaves like an unreachable or failing service
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSpeedClient for MockPageSpeedClient {
    async fn analyze(&self, _url: &str) -> Result<PageSpeedReport> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match &self.report {
            Some(report) => Ok(report.clone()),
            None => anyhow::bail!("PageSpeed API returned status code 500 Internal Server Error"),
        }
    }
}
