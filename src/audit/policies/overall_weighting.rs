/// OverallWeighting policy for combining the three category scores
///
/// The weights are fixed: SEO 35%, performance 35%, security 30%.
pub struct OverallWeighting;

impl OverallWeighting {
    pub const SEO: f64 = 0.35;
    pub const PERFORMANCE: f64 = 0.35;
    pub const SECURITY: f64 = 0.30;

    /// `round(0.35 * seo + 0.35 * performance + 0.30 * security)`
    pub fn overall(seo: u8, performance: u8, security: u8) -> u8 {
        let weighted = f64::from(seo) * Self::SEO
            + f64::from(performance) * Self::PERFORMANCE
            + f64::from(security) * Self::SECURITY;
        weighted.round().clamp(0.0, 100.0) as u8
    }
}
