use crate::application::read_models::{AuditReportView, ScoreView};
use crate::audit::domain::IssueKind;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write as _;

/// HtmlReportFormatter adapter rendering the e-mailed audit report
///
/// Produces a self-contained document with inline styles only.
pub struct HtmlReportFormatter;

impl HtmlReportFormatter {
    pub fn new() -> Self {
        Self
    }

    fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    fn score_card(out: &mut String, title: &str, view: &ScoreView) {
        let _ = write!(
            out,
            "<td style=\"padding:12px;text-align:center;\">\
             <div style=\"font-size:13px;color:#6b7280;\">{}</div>\
             <div style=\"font-size:28px;font-weight:bold;color:{};\">{}</div>\
             <div style=\"font-size:12px;color:{};\">{}</div></td>",
            title, view.color, view.score, view.color, view.label
        );
    }

    fn issue_color(kind: IssueKind) -> &'static str {
        match kind {
            IssueKind::Error => "#ef4444",
            IssueKind::Warning => "#f59e0b",
            IssueKind::Info => "#3b82f6",
        }
    }
}

impl Default for HtmlReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlReportFormatter {
    fn format(&self, report: &AuditReportView) -> Result<String> {
        let mut out = String::new();
        let website = Self::escape(&report.website_url);

        out.push_str(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
             <title>Website Audit Report</title></head>\
             <body style=\"margin:0;padding:24px;background:#f3f4f6;font-family:Arial,sans-serif;color:#111827;\">\
             <div style=\"max-width:600px;margin:0 auto;background:#ffffff;border-radius:8px;padding:24px;\">",
        );
        out.push_str("<h1 style=\"font-size:22px;margin:0 0 8px;\">Website Audit Report</h1>");
        let _ = write!(out, "<p style=\"margin:0 0 16px;color:#6b7280;\">{}</p>", website);

        if let Some(recipient) = &report.recipient {
            let _ = write!(
                out,
                "<p>Hi {},</p><p>Thanks for requesting an audit for {}. Here is how your website performed.</p>",
                Self::escape(&recipient.name),
                Self::escape(&recipient.business_name)
            );
        }

        let _ = write!(
            out,
            "<div style=\"text-align:center;margin:24px 0;\">\
             <div style=\"font-size:14px;color:#6b7280;\">Overall Score</div>\
             <div style=\"font-size:48px;font-weight:bold;color:{};\">{}</div>\
             <div style=\"font-size:16px;color:{};\">{}</div></div>",
            report.overall.color, report.overall.score, report.overall.color, report.overall.label
        );

        out.push_str("<table style=\"width:100%;border-collapse:collapse;\"><tr>");
        Self::score_card(&mut out, "SEO", &report.seo);
        Self::score_card(&mut out, "Performance", &report.performance);
        Self::score_card(&mut out, "Security", &report.security);
        out.push_str("</tr></table>");

        if !report.top_issues.is_empty() {
            out.push_str("<h2 style=\"font-size:18px;margin:24px 0 8px;\">Top Issues to Fix</h2><ul style=\"padding-left:20px;\">");
            for issue in &report.top_issues {
                let _ = write!(
                    out,
                    "<li style=\"margin-bottom:8px;\"><strong style=\"color:{};\">{}</strong><br>\
                     <span style=\"color:#6b7280;font-size:13px;\">{}</span></li>",
                    Self::issue_color(issue.kind),
                    Self::escape(&issue.message),
                    Self::escape(&issue.recommendation)
                );
            }
            out.push_str("</ul>");
        }

        out.push_str("<h2 style=\"font-size:18px;margin:24px 0 8px;\">Key Findings</h2>");
        for section in &report.key_findings {
            if section.findings.is_empty() {
                continue;
            }
            let _ = write!(
                out,
                "<h3 style=\"font-size:15px;margin:16px 0 4px;\">{}</h3>\
                 <table style=\"width:100%;border-collapse:collapse;font-size:14px;\">",
                section.title
            );
            for finding in &section.findings {
                let _ = write!(
                    out,
                    "<tr><td style=\"padding:4px 0;color:#6b7280;\">{}</td>\
                     <td style=\"padding:4px 0;text-align:right;\">{}</td></tr>",
                    finding.label,
                    Self::escape(&finding.value)
                );
            }
            out.push_str("</table>");
        }

        out.push_str(
            "<div style=\"margin:32px 0 16px;padding:16px;background:#eff6ff;border-radius:8px;text-align:center;\">\
             <p style=\"margin:0 0 8px;font-weight:bold;\">Want help fixing these issues?</p>\
             <p style=\"margin:0;font-size:14px;\">Reply to this email and our team will walk you through a plan to improve your scores.</p></div>",
        );

        let _ = write!(
            out,
            "<p style=\"font-size:12px;color:#9ca3af;text-align:center;\">Report generated on {}</p></div></body></html>",
            report.generated_on
        );

        Ok(out)
    }
}
