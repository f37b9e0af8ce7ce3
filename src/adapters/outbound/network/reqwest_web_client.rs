use crate::ports::outbound::{WebClient, WebResponse};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use std::collections::BTreeMap;
use std::time::Duration;

/// ReqwestWebClient adapter for fetching audited pages
///
/// Sends the configured descriptive user agent on every request and makes
/// exactly one attempt; redirects are followed the way a browser would.
pub struct ReqwestWebClient {
    client: reqwest::Client,
}

impl ReqwestWebClient {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
        let mut collected = BTreeMap::new();
        for (name, value) in headers {
            if let Ok(value) = value.to_str() {
                collected
                    .entry(name.as_str().to_ascii_lowercase())
                    .or_insert_with(|| value.to_string());
            }
        }
        collected
    }
}

#[async_trait]
impl WebClient for ReqwestWebClient {
    async fn get(&self, url: &str) -> Result<WebResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let headers = Self::collect_headers(response.headers());
        let body = response.text().await?;

        Ok(WebResponse {
            status,
            headers,
            body,
        })
    }

    async fn head(&self, url: &str) -> Result<WebResponse> {
        let response = self.client.head(url).send().await?;

        Ok(WebResponse {
            status: response.status().as_u16(),
            headers: Self::collect_headers(response.headers()),
            body: String::new(),
        })
    }
}
