use crate::application::dto::OutputFormat;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Audit websites for SEO, performance and security, and manage the leads
/// that requested them
#[derive(Parser, Debug)]
#[command(name = "site-audit")]
#[command(version)]
#[command(about = "Audit websites for SEO, performance and security", long_about = None)]
pub struct Args {
    /// Path to a site-audit.config.yml file (defaults to ./site-audit.config.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the lead store (overrides config and SITE_AUDIT_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Audit a single website and print the report
    Audit(AuditArgs),

    /// Record a lead, audit its website and e-mail the report
    Submit(SubmitArgs),

    /// Inspect stored leads
    #[command(subcommand)]
    Leads(LeadsCommand),

    /// E-mail the stored audit report of a lead again
    SendReport {
        /// Lead ID
        lead_id: String,
    },
}

#[derive(ClapArgs, Debug)]
pub struct AuditArgs {
    /// Website to audit; https:// is assumed when no scheme is given
    pub url: String,

    /// Output format: json or markdown
    #[arg(short, long, default_value = "markdown")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit with code 1 when the overall score is below this value
    #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fail_under: Option<u8>,
}

#[derive(ClapArgs, Debug)]
pub struct SubmitArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub business_name: String,

    #[arg(long)]
    pub email: String,

    /// WhatsApp number
    #[arg(long)]
    pub whatsapp: String,

    /// Website to audit
    #[arg(long)]
    pub url: String,

    /// Store and audit the lead without e-mailing the report
    #[arg(long)]
    pub no_email: bool,
}

#[derive(Subcommand, Debug)]
pub enum LeadsCommand {
    /// List leads, newest first
    List {
        #[arg(long)]
        page: Option<usize>,

        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one lead with its audit results
    Show {
        /// Lead ID
        lead_id: String,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
