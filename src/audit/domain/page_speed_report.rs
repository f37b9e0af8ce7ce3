use std::collections::HashMap;

/// Lab audit identifiers read from a page-speed report
pub mod audit_ids {
    pub const LARGEST_CONTENTFUL_PAINT: &str = "largest-contentful-paint";
    pub const CUMULATIVE_LAYOUT_SHIFT: &str = "cumulative-layout-shift";
    pub const FIRST_CONTENTFUL_PAINT: &str = "first-contentful-paint";
    pub const SERVER_RESPONSE_TIME: &str = "server-response-time";
    pub const SPEED_INDEX: &str = "speed-index";
    pub const TOTAL_BYTE_WEIGHT: &str = "total-byte-weight";
    pub const NETWORK_REQUESTS: &str = "network-requests";
}

/// One lab audit as reported by the page-speed service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabAudit {
    /// 0-1 sub-score
    pub score: Option<f64>,
    pub numeric_value: Option<f64>,
    pub display_value: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Real-user (field) percentiles.
///
/// CLS arrives scaled by 100 (a percentile of 12 means 0.12).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMetrics {
    pub largest_contentful_paint_ms: Option<f64>,
    pub first_input_delay_ms: Option<f64>,
    pub cumulative_layout_shift_scaled: Option<f64>,
    pub first_contentful_paint_ms: Option<f64>,
    pub time_to_first_byte_ms: Option<f64>,
}

/// What the page-speed service reported for one URL.
///
/// Every value is optional; absent data is left as `None` rather than guessed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSpeedReport {
    /// Performance category score, 0-1
    pub performance_score: Option<f64>,
    pub audits: HashMap<String, LabAudit>,
    pub field_metrics: FieldMetrics,
}

impl PageSpeedReport {
    pub fn audit(&self, id: &str) -> Option<&LabAudit> {
        self.audits.get(id)
    }

    /// Numeric value of a lab audit, if the audit and its value are present
    pub fn lab_value(&self, id: &str) -> Option<f64> {
        self.audit(id).and_then(|audit| audit.numeric_value)
    }
}
