mod audit_engine;
mod performance_analyzer;
mod resource_prober;
mod security_analyzer;
mod seo_analyzer;

pub use audit_engine::AuditEngine;
pub use performance_analyzer::{
    PerformanceAnalyzer, PerformanceScorer, DEFAULT_PERFORMANCE_SCORE, MAX_OPPORTUNITIES,
    OPPORTUNITY_AUDITS,
};
pub use resource_prober::{PageProbe, ResourceProber, WellKnownResources};
pub use security_analyzer::{
    count_insecure_references, SecurityAnalyzer, SecurityInputs, SecurityScorer,
};
pub use seo_analyzer::{SeoAnalyzer, SeoScorer};
