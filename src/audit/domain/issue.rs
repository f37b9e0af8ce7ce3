use serde::{Deserialize, Serialize};

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
    Info,
}

impl IssueKind {
    /// Errors and warnings are worth fixing; info is advisory.
    pub fn is_actionable(self) -> bool {
        matches!(self, IssueKind::Error | IssueKind::Warning)
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::Error => write!(f, "error"),
            IssueKind::Warning => write!(f, "warning"),
            IssueKind::Info => write!(f, "info"),
        }
    }
}

/// Issue value object: a single finding with a suggested fix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    pub recommendation: String,
}

impl Issue {
    pub fn new(kind: IssueKind, message: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            recommendation: recommendation.into(),
        }
    }

    pub fn error(message: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self::new(IssueKind::Error, message, recommendation)
    }

    pub fn warning(message: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self::new(IssueKind::Warning, message, recommendation)
    }

    pub fn info(message: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self::new(IssueKind::Info, message, recommendation)
    }
}
