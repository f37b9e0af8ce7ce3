pub mod audit_result;
pub mod issue;
pub mod page_speed_report;
pub mod performance_result;
pub mod score_card;
pub mod security_result;
pub mod seo_result;
pub mod target;

pub use audit_result::AuditResult;
pub use issue::{Issue, IssueKind};
pub use page_speed_report::{FieldMetrics, LabAudit, PageSpeedReport};
pub use performance_result::{CoreWebVitals, Opportunity, PerformanceResult};
pub use score_card::ScoreCard;
pub use security_result::{SecurityHeaders, SecurityResult, SslStatus};
pub use seo_result::{
    CanonicalTag, HeadingSummary, ImageSummary, LinkSummary, OpenGraphTags, SeoResult,
    TextElement, TwitterCardTags,
};
pub use target::{normalize_target, origin_of, with_scheme};
