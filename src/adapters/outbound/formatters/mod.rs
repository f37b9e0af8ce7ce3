/// Report formatters for the CLI and e-mail
mod html_report_formatter;
mod json_report_formatter;
mod markdown_report_formatter;

pub use html_report_formatter::HtmlReportFormatter;
pub use json_report_formatter::JsonReportFormatter;
pub use markdown_report_formatter::MarkdownReportFormatter;
