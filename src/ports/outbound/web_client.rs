use crate::shared::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// A fetched HTTP response, reduced to what the auditors inspect
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebResponse {
    pub status: u16,
    /// Header names are lower-cased; repeated headers keep the first value
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl WebResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// WebClient port for fetching pages and well-known resources
///
/// Implementations perform a single attempt per call; an `Err` means the
/// request never produced a response (DNS, connect, TLS, timeout).
/// Non-2xx statuses are returned as ordinary responses.
#[async_trait]
pub trait WebClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<WebResponse>;

    /// Same as `get` but the body is left empty
    async fn head(&self, url: &str) -> Result<WebResponse>;
}
