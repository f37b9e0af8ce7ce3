use crate::audit::domain::page_speed_report::audit_ids;
use crate::audit::domain::{CoreWebVitals, PageSpeedReport};

/// MetricSourcePriority policy for choosing where a Core Web Vital comes from
///
/// Priority order:
/// 1. Field data (real-user percentile), when present
/// 2. Lab audit numeric value, when present
/// 3. Absent
///
/// A value of zero counts as absent. FID has no lab counterpart and is
/// field-only.
pub struct MetricSourcePriority;

impl MetricSourcePriority {
    /// Applies the field → lab → absent chain to a single metric
    pub fn select(field: Option<f64>, lab: Option<f64>) -> Option<f64> {
        let present = |value: &f64| *value != 0.0;
        match (field.filter(present), lab.filter(present)) {
            (Some(field), _) => Some(field),
            (None, Some(lab)) => Some(lab),
            (None, None) => None,
        }
    }

    pub fn core_web_vitals(report: &PageSpeedReport) -> CoreWebVitals {
        let field = &report.field_metrics;

        CoreWebVitals {
            lcp: Self::select(
                field.largest_contentful_paint_ms,
                report.lab_value(audit_ids::LARGEST_CONTENTFUL_PAINT),
            ),
            fid: field.first_input_delay_ms.filter(|value| *value != 0.0),
            cls: Self::select(
                field.cumulative_layout_shift_scaled.map(|scaled| scaled / 100.0),
                report.lab_value(audit_ids::CUMULATIVE_LAYOUT_SHIFT),
            ),
            fcp: Self::select(
                field.first_contentful_paint_ms,
                report.lab_value(audit_ids::FIRST_CONTENTFUL_PAINT),
            ),
            ttfb: Self::select(
                field.time_to_first_byte_ms,
                report.lab_value(audit_ids::SERVER_RESPONSE_TIME),
            ),
        }
    }
}
