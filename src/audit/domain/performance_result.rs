use super::issue::Issue;
use serde::{Deserialize, Serialize};

/// Core Web Vitals; any of them may be missing upstream.
///
/// Timings are milliseconds, CLS is unitless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreWebVitals {
    pub lcp: Option<f64>,
    pub fid: Option<f64>,
    pub cls: Option<f64>,
    pub fcp: Option<f64>,
    pub ttfb: Option<f64>,
}

/// A suggested optimisation with its estimated savings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub title: String,
    pub description: String,
    pub savings: String,
}

/// Performance findings derived from the page-speed service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceResult {
    pub score: u8,
    /// Speed index in milliseconds
    pub load_time: u64,
    /// Total byte weight
    pub page_size: u64,
    pub request_count: u64,
    pub core_web_vitals: CoreWebVitals,
    pub opportunities: Vec<Opportunity>,
    pub issues: Vec<Issue>,
}
