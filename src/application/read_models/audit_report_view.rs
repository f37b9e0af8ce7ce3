//! Audit report read model
//!
//! A presentation-ready view of one [`AuditResult`], shared by the JSON,
//! Markdown and HTML renderers.

use crate::audit::domain::{AuditResult, Issue};

/// A 0-100 score with its band label and colour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreView {
    pub score: u8,
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFinding {
    pub label: &'static str,
    pub value: String,
}

/// Findings grouped under one audit area ("SEO", "Performance", "Security")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindingSection {
    pub title: &'static str,
    pub findings: Vec<KeyFinding>,
}

/// Who the report is addressed to, when it is sent for a lead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientView {
    pub name: String,
    pub business_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditReportView {
    pub website_url: String,
    pub recipient: Option<RecipientView>,
    pub overall: ScoreView,
    pub seo: ScoreView,
    pub performance: ScoreView,
    pub security: ScoreView,
    /// First five errors and warnings, SEO then performance then security
    pub top_issues: Vec<Issue>,
    pub key_findings: Vec<FindingSection>,
    /// e.g. "October 16, 2026"
    pub generated_on: String,
    /// The underlying result, for renderers that emit it verbatim
    pub audit: AuditResult,
}
