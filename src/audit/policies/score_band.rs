/// ScoreBand policy for labelling a 0-100 score
///
/// - 80 and above: Good
/// - 50 to 79: Needs Improvement
/// - below 50: Poor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    NeedsImprovement,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Good
        } else if score >= 50 {
            ScoreBand::NeedsImprovement
        } else {
            ScoreBand::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Good => "Good",
            ScoreBand::NeedsImprovement => "Needs Improvement",
            ScoreBand::Poor => "Poor",
        }
    }

    /// Hex colour used by the HTML report
    pub fn color(self) -> &'static str {
        match self {
            ScoreBand::Good => "#22c55e",
            ScoreBand::NeedsImprovement => "#f59e0b",
            ScoreBand::Poor => "#ef4444",
        }
    }
}
