use owo_colors::OwoColorize;
use site_audit::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
use site_audit::adapters::outbound::network::{
    MailerSettings, PageSpeedInsightsClient, ReqwestWebClient, ResendMailer,
};
use site_audit::adapters::outbound::storage::JsonFileLeadRepository;
use site_audit::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use site_audit::application::read_models::AuditReportViewBuilder;
use site_audit::application::use_cases::{
    LeadQueryUseCase, RunAuditUseCase, SendReportUseCase, SubmitLeadUseCase,
};
use site_audit::audit::domain::AuditResult;
use site_audit::audit::policies::ScoreBand;
use site_audit::audit::services::AuditEngine;
use site_audit::cli::{Args, AuditArgs, Command, LeadsCommand, SubmitArgs};
use site_audit::config::{discover_config, load_config_from_path, AppConfig};
use site_audit::leads::LeadSubmission;
use site_audit::ports::outbound::ProgressReporter;
use site_audit::shared::error::{ErrorPayload, ExitCode};
use site_audit::shared::Result;
use serde::Serialize;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

type Engine = AuditEngine<ReqwestWebClient, PageSpeedInsightsClient>;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            report_failure(&e);
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("site_audit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("site_audit=info"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Structured payload on stdout, full error chain on stderr
fn report_failure(e: &anyhow::Error) {
    let payload = ErrorPayload::from_error(e);
    if let Ok(json) = serde_json::to_string_pretty(&payload) {
        println!("{}", json);
    }

    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", e);
    for cause in e.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }
    eprintln!();
}

async fn run(args: Args) -> Result<ExitCode> {
    let file_config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let mut config = AppConfig::resolve(file_config.as_ref(), |name| std::env::var(name).ok());
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    let progress: Box<dyn ProgressReporter> = if args.quiet {
        Box::new(QuietProgressReporter)
    } else {
        Box::new(StderrProgressReporter::new())
    };

    match args.command {
        Command::Audit(audit_args) => run_audit(&config, audit_args, progress, args.quiet).await,
        Command::Submit(submit_args) => {
            run_submit(&config, submit_args, progress, args.quiet).await
        }
        Command::Leads(LeadsCommand::List { page, limit }) => {
            let use_case = LeadQueryUseCase::new(JsonFileLeadRepository::new(&config.data_dir)?);
            print_json(&use_case.list(page, limit).await?)?;
            Ok(ExitCode::Success)
        }
        Command::Leads(LeadsCommand::Show { lead_id }) => {
            let use_case = LeadQueryUseCase::new(JsonFileLeadRepository::new(&config.data_dir)?);
            print_json(&use_case.get(&lead_id).await?)?;
            Ok(ExitCode::Success)
        }
        Command::SendReport { lead_id } => {
            let repository = JsonFileLeadRepository::new(&config.data_dir)?;
            let mailer = ResendMailer::new(MailerSettings::from_config(&config)?)?;
            let use_case = SendReportUseCase::new(repository, mailer, progress);
            print_json(&use_case.execute(&lead_id).await?)?;
            Ok(ExitCode::Success)
        }
    }
}

async fn run_audit(
    config: &AppConfig,
    audit_args: AuditArgs,
    progress: Box<dyn ProgressReporter>,
    quiet: bool,
) -> Result<ExitCode> {
    let use_case = RunAuditUseCase::new(build_engine(config)?, progress);
    let audit = use_case.execute(&audit_args.url).await?;

    if !quiet {
        eprintln!("{}", FormatterFactory::progress_message(audit_args.format));
    }
    let view = AuditReportViewBuilder::build(&audit, None);
    let output = FormatterFactory::create(audit_args.format).format(&view)?;
    PresenterFactory::create(PresenterType::from(audit_args.output)).present(&output)?;

    if !quiet {
        print_score_summary(&audit);
    }

    match audit_args.fail_under {
        Some(threshold) if audit.overall_score < threshold => {
            eprintln!(
                "⚠️  Overall score {} is below the required {}",
                audit.overall_score, threshold
            );
            Ok(ExitCode::BelowThreshold)
        }
        _ => Ok(ExitCode::Success),
    }
}

async fn run_submit(
    config: &AppConfig,
    submit_args: SubmitArgs,
    progress: Box<dyn ProgressReporter>,
    quiet: bool,
) -> Result<ExitCode> {
    let submission = LeadSubmission {
        name: submit_args.name,
        business_name: submit_args.business_name,
        email: submit_args.email,
        whatsapp_no: submit_args.whatsapp,
        website_url: submit_args.url,
    };
    // Reject bad input before anything touches the store or the mail provider.
    submission.validate()?;

    let repository = JsonFileLeadRepository::new(&config.data_dir)?;
    let mailer = if submit_args.no_email {
        None
    } else {
        Some(ResendMailer::new(MailerSettings::from_config(config)?)?)
    };

    let use_case = SubmitLeadUseCase::new(repository, build_engine(config)?, mailer, progress);
    let response = use_case.execute(submission).await?;

    if !quiet {
        print_score_summary(&response.audit_results);
    }
    print_json(&response)?;
    Ok(ExitCode::Success)
}

fn build_engine(config: &AppConfig) -> Result<Engine> {
    let web_client = ReqwestWebClient::new(&config.user_agent, config.request_timeout)?;
    let page_speed_client = PageSpeedInsightsClient::new(
        config.pagespeed_endpoint.clone(),
        config.pagespeed_api_key.clone(),
        &config.user_agent,
        config.request_timeout,
    )?;
    Ok(AuditEngine::new(web_client, page_speed_client))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    PresenterFactory::create(PresenterType::Stdout).present(&json)
}

fn print_score_summary(audit: &AuditResult) {
    let band = ScoreBand::from_score(audit.overall_score);
    let overall = format!("{}/100 {}", audit.overall_score, band.label());
    let overall = match band {
        ScoreBand::Good => overall.green().bold().to_string(),
        ScoreBand::NeedsImprovement => overall.yellow().bold().to_string(),
        ScoreBand::Poor => overall.red().bold().to_string(),
    };

    eprintln!();
    eprintln!("   Overall:     {}", overall);
    eprintln!(
        "   {}",
        format!(
            "SEO {} · Performance {} · Security {}",
            audit.seo_score, audit.performance_score, audit.security_score
        )
        .dimmed()
    );
}
