use crate::ports::outbound::{WebClient, WebResponse};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Presence of the two well-known sibling resources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WellKnownResources {
    pub robots_txt: bool,
    pub sitemap: bool,
}

/// Outcome of fetching the full page for body inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageProbe {
    Loaded { status: u16, body: String },
    Failed { reason: String },
}

/// ResourceProber issues the auxiliary requests the auditors need and
/// reduces each one to a simple outcome. It never returns an error.
pub struct ResourceProber<W: WebClient> {
    client: Arc<W>,
}

impl<W: WebClient> Clone for ResourceProber<W> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<W: WebClient> ResourceProber<W> {
    pub fn new(client: Arc<W>) -> Self {
        Self { client }
    }

    /// Checks `/robots.txt` and `/sitemap.xml` under `origin` concurrently
    pub async fn well_known(&self, origin: &str) -> WellKnownResources {
        let robots_url = format!("{}/robots.txt", origin);
        let sitemap_url = format!("{}/sitemap.xml", origin);

        let (robots_txt, sitemap) =
            tokio::join!(self.is_reachable(&robots_url), self.is_reachable(&sitemap_url));

        WellKnownResources {
            robots_txt,
            sitemap,
        }
    }

    /// 2xx counts as reachable; anything else, including transport
    /// failures, does not.
    pub async fn is_reachable(&self, url: &str) -> bool {
        match self.client.get(url).await {
            Ok(response) => {
                tracing::debug!(url, status = response.status, "probed resource");
                response.is_success()
            }
            Err(e) => {
                tracing::debug!(url, error = %e, "resource probe failed");
                false
            }
        }
    }

    /// Response headers of `url`: HEAD first, GET when HEAD produced no
    /// response at all. `None` when neither got through.
    pub async fn fetch_headers(&self, url: &str) -> Option<BTreeMap<String, String>> {
        match self.client.head(url).await {
            Ok(response) => return Some(response.headers),
            Err(e) => {
                tracing::debug!(url, error = %e, "HEAD failed, retrying headers with GET");
            }
        }

        match self.client.get(url).await {
            Ok(WebResponse { headers, .. }) => Some(headers),
            Err(e) => {
                tracing::warn!(url, error = %e, "could not fetch response headers");
                None
            }
        }
    }

    pub async fn probe_page(&self, url: &str) -> PageProbe {
        match self.client.get(url).await {
            Ok(response) => PageProbe::Loaded {
                status: response.status,
                body: response.body,
            },
            Err(e) => {
                tracing::warn!(url, error = %e, "page probe failed");
                PageProbe::Failed {
                    reason: format!("{:#}", e),
                }
            }
        }
    }
}
