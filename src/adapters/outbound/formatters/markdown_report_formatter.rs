use crate::application::read_models::{AuditReportView, ScoreView};
use crate::audit::domain::Issue;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write as _;

const SCORE_TABLE_HEADER: &str = "| Category | Score | Rating |\n";
const SCORE_TABLE_SEPARATOR: &str = "|----------|-------|--------|\n";

/// MarkdownReportFormatter adapter for human-readable CLI reports
pub struct MarkdownReportFormatter;

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn score_row(out: &mut String, category: &str, view: &ScoreView) {
        let _ = writeln!(
            out,
            "| {} | {}/100 | {} |",
            category, view.score, view.label
        );
    }

    fn issue_list(out: &mut String, heading: &str, issues: &[Issue]) {
        let _ = writeln!(out, "### {}\n", heading);
        if issues.is_empty() {
            out.push_str("No issues found.\n\n");
            return;
        }
        for issue in issues {
            let _ = writeln!(
                out,
                "- **{}** {}  \n  {}",
                issue.kind, issue.message, issue.recommendation
            );
        }
        out.push('\n');
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownReportFormatter {
    fn format(&self, report: &AuditReportView) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Website Audit Report\n\n");
        let _ = writeln!(out, "**Website:** {}  ", report.website_url);
        if let Some(recipient) = &report.recipient {
            let _ = writeln!(
                out,
                "**Prepared for:** {} ({})  ",
                recipient.name, recipient.business_name
            );
        }
        let _ = writeln!(out, "**Generated:** {}\n", report.generated_on);

        let _ = writeln!(
            out,
            "## Overall Score: {}/100 ({})\n",
            report.overall.score, report.overall.label
        );
        out.push_str(SCORE_TABLE_HEADER);
        out.push_str(SCORE_TABLE_SEPARATOR);
        Self::score_row(&mut out, "SEO", &report.seo);
        Self::score_row(&mut out, "Performance", &report.performance);
        Self::score_row(&mut out, "Security", &report.security);
        out.push('\n');

        out.push_str("## Top Issues\n\n");
        if report.top_issues.is_empty() {
            out.push_str("No critical issues found.\n\n");
        } else {
            for (i, issue) in report.top_issues.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{}. **[{}]** {}  \n   {}",
                    i + 1,
                    issue.kind,
                    issue.message,
                    issue.recommendation
                );
            }
            out.push('\n');
        }

        out.push_str("## Key Findings\n\n");
        for section in &report.key_findings {
            if section.findings.is_empty() {
                continue;
            }
            let _ = writeln!(out, "### {}\n", section.title);
            out.push_str("| Check | Result |\n|-------|--------|\n");
            for finding in &section.findings {
                let _ = writeln!(
                    out,
                    "| {} | {} |",
                    finding.label,
                    Self::escape_cell(&finding.value)
                );
            }
            out.push('\n');
        }

        let opportunities = &report.audit.performance.opportunities;
        if !opportunities.is_empty() {
            out.push_str("## Performance Opportunities\n\n");
            out.push_str("| Opportunity | Estimated Savings |\n|-------------|-------------------|\n");
            for opportunity in opportunities {
                let _ = writeln!(
                    out,
                    "| {} | {} |",
                    Self::escape_cell(&opportunity.title),
                    Self::escape_cell(&opportunity.savings)
                );
            }
            out.push('\n');
        }

        out.push_str("## All Issues\n\n");
        Self::issue_list(&mut out, "SEO", &report.audit.seo.issues);
        Self::issue_list(&mut out, "Performance", &report.audit.performance.issues);
        Self::issue_list(&mut out, "Security", &report.audit.security.issues);

        Ok(out)
    }
}
