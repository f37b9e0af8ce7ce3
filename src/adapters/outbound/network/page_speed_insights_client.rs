use crate::audit::domain::{FieldMetrics, LabAudit, PageSpeedReport};
use crate::ports::outbound::PageSpeedClient;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PsiResponse {
    lighthouse_result: Option<PsiLighthouseResult>,
    loading_experience: Option<PsiLoadingExperience>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PsiLighthouseResult {
    categories: Option<PsiCategories>,
    audits: HashMap<String, PsiAudit>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PsiCategories {
    performance: Option<PsiCategory>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PsiCategory {
    score: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PsiAudit {
    score: Option<f64>,
    numeric_value: Option<f64>,
    display_value: Option<String>,
    title: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PsiLoadingExperience {
    metrics: Option<PsiMetrics>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
struct PsiMetrics {
    largest_contentful_paint_ms: Option<PsiPercentile>,
    first_input_delay_ms: Option<PsiPercentile>,
    cumulative_layout_shift_score: Option<PsiPercentile>,
    first_contentful_paint_ms: Option<PsiPercentile>,
    experimental_time_to_first_byte: Option<PsiPercentile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PsiPercentile {
    percentile: Option<f64>,
}

fn percentile(metric: Option<PsiPercentile>) -> Option<f64> {
    metric.and_then(|m| m.percentile)
}

impl From<PsiResponse> for PageSpeedReport {
    fn from(response: PsiResponse) -> Self {
        let lighthouse = response.lighthouse_result.unwrap_or_default();
        let metrics = response
            .loading_experience
            .and_then(|experience| experience.metrics)
            .unwrap_or_default();

        PageSpeedReport {
            performance_score: lighthouse
                .categories
                .and_then(|categories| categories.performance)
                .and_then(|performance| performance.score),
            audits: lighthouse
                .audits
                .into_iter()
                .map(|(id, audit)| {
                    (
                        id,
                        LabAudit {
                            score: audit.score,
                            numeric_value: audit.numeric_value,
                            display_value: audit.display_value,
                            title: audit.title,
                            description: audit.description,
                        },
                    )
                })
                .collect(),
            field_metrics: FieldMetrics {
                largest_contentful_paint_ms: percentile(metrics.largest_contentful_paint_ms),
                first_input_delay_ms: percentile(metrics.first_input_delay_ms),
                cumulative_layout_shift_scaled: percentile(metrics.cumulative_layout_shift_score),
                first_contentful_paint_ms: percentile(metrics.first_contentful_paint_ms),
                time_to_first_byte_ms: percentile(metrics.experimental_time_to_first_byte),
            },
        }
    }
}

/// PageSpeedInsightsClient adapter for the Google PageSpeed Insights v5 API
///
/// Always requests the mobile strategy and the performance category. The
/// API key is optional; without one the service applies anonymous quotas.
pub struct PageSpeedInsightsClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl PageSpeedInsightsClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    fn request_url(&self, target: &str) -> Result<Url> {
        let mut params = vec![
            ("url", target),
            ("strategy", "mobile"),
            ("category", "performance"),
        ];
        if let Some(key) = &self.api_key {
            params.push(("key", key.as_str()));
        }

        Url::parse_with_params(&self.endpoint, &params)
            .with_context(|| format!("Invalid PageSpeed endpoint: {}", self.endpoint))
    }
}

#[async_trait]
impl PageSpeedClient for PageSpeedInsightsClient {
    async fn analyze(&self, url: &str) -> Result<PageSpeedReport> {
        let request_url = self.request_url(url)?;
        let response = self.client.get(request_url.as_str()).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("PageSpeed API returned status code {}", response.status());
        }

        let body: PsiResponse = response
            .json()
            .await
            .context("PageSpeed API returned an unreadable response")?;
        Ok(body.into())
    }
}
