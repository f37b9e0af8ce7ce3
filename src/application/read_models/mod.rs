//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that give renderers a denormalized,
//! presentation-ready picture of an audit.

mod audit_report_view;
mod audit_report_view_builder;

pub use audit_report_view::{
    AuditReportView, FindingSection, KeyFinding, RecipientView, ScoreView,
};
pub use audit_report_view_builder::{AuditReportViewBuilder, MAX_TOP_ISSUES};
