use async_trait::async_trait;
use site_audit::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock WebClient serving canned responses by exact URL.
///
/// Unknown URLs fail like a refused connection. HEAD answers with the GET
/// response minus its body unless HEAD is disabled.
#[derive(Clone, Default)]
pub struct MockWebClient {
    routes: HashMap<String, WebResponse>,
    head_disabled: bool,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockWebClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            url.to_string(),
            WebResponse {
                status,
                headers: BTreeMap::new(),
                body: body.to_string(),
            },
        );
        self
    }

    /// Adds response headers to an already registered URL
    pub fn with_headers(mut self, url: &str, headers: &[(&str, &str)]) -> Self {
        if let Some(response) = self.routes.get_mut(url) {
            for (name, value) in headers {
                response
                    .headers
                    .insert(name.to_lowercase(), value.to_string());
            }
        }
        self
    }

    pub fn without_head(mut self) -> Self {
        self.head_disabled = true;
        self
    }

    pub fn call_log(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn lookup(&self, method: &str, url: &str) -> Result<WebResponse> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} {}", method, url));
        self.routes
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("error sending request for url ({}): connection refused", url))
    }
}

#[async_trait]
impl WebClient for MockWebClient {
    async fn get(&self, url: &str) -> Result<WebResponse> {
        self.lookup("GET", url)
    }

    async fn head(&self, url: &str) -> Result<WebResponse> {
        if self.head_disabled {
            self.calls.lock().unwrap().push(format!("HEAD {}", url));
            anyhow::bail!("HEAD not supported");
        }
        let mut response = self.lookup("HEAD", url)?;
        response.body.clear();
        Ok(response)
    }
}
