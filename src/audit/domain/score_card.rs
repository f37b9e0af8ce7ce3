use super::issue::Issue;

/// Starting value every deduction-based score counts down from
pub const MAX_SCORE: u32 = 100;

/// Accumulates deductions and the matching issues in check order.
///
/// Deductions are summed and subtracted once in [`ScoreCard::finish`], so they
/// are additive and the final score is floored at 0.
#[derive(Debug, Default)]
pub struct ScoreCard {
    deducted: u32,
    issues: Vec<Issue>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an issue that costs `points`.
    pub fn deduct(&mut self, points: u32, issue: Issue) {
        self.deducted += points;
        self.issues.push(issue);
    }

    /// Records an issue without touching the score.
    pub fn note(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Score so far, floored at 0.
    pub fn current(&self) -> u8 {
        MAX_SCORE.saturating_sub(self.deducted) as u8
    }

    pub fn finish(self) -> (u8, Vec<Issue>) {
        let score = self.current();
        (score, self.issues)
    }
}
