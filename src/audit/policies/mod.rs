mod metric_source_priority;
mod overall_weighting;
mod score_band;

pub use metric_source_priority::MetricSourcePriority;
pub use overall_weighting::OverallWeighting;
pub use score_band::ScoreBand;
