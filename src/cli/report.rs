//! Report CLI commands
//!
//! The three report operations (generate, download, email) plus a terminal
//! view of the assembled document.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::delivery::OutboxDispatcher;
use crate::display::format_report;
use crate::error::{ReportError, ReportResult};
use crate::export::ReportFormat;
use crate::models::UserRef;
use crate::reports::TotalsMode;
use crate::services::{OperationOutcome, ReportService};
use crate::storage::{write_bytes_atomic, Storage};

use super::PeriodArgs;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Print the report sections to the terminal
    Show {
        /// User email or ID
        user: UserRef,
        #[command(flatten)]
        period: PeriodArgs,
        /// Override where income and expense totals come from
        #[arg(long, value_enum)]
        totals_mode: Option<TotalsMode>,
    },

    /// Generate the report and report its status
    Generate {
        /// User email or ID
        user: UserRef,
        #[command(flatten)]
        period: PeriodArgs,
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,
        /// Override where income and expense totals come from
        #[arg(long, value_enum)]
        totals_mode: Option<TotalsMode>,
    },

    /// Generate the report and save it to a file
    Download {
        /// User email or ID
        user: UserRef,
        #[command(flatten)]
        period: PeriodArgs,
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,
        /// Output file or directory (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override where income and expense totals come from
        #[arg(long, value_enum)]
        totals_mode: Option<TotalsMode>,
    },

    /// Generate the report and send it to the outbox
    Email {
        /// User email or ID
        user: UserRef,
        #[command(flatten)]
        period: PeriodArgs,
        /// Recipient address (default: the user's own email)
        #[arg(long)]
        to: Option<String>,
        /// Attachment format
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,
        /// Override where income and expense totals come from
        #[arg(long, value_enum)]
        totals_mode: Option<TotalsMode>,
    },
}

fn with_mode(settings: &Settings, mode: Option<TotalsMode>) -> Settings {
    let mut settings = settings.clone();
    if let Some(mode) = mode {
        settings.totals_mode = mode;
    }
    settings
}

fn outcome_result(outcome: OperationOutcome) -> ReportResult<()> {
    if outcome.success {
        println!("{}", outcome.message);
        Ok(())
    } else {
        Err(ReportError::OperationFailed(outcome.message))
    }
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> ReportResult<()> {
    match cmd {
        ReportCommands::Show {
            user,
            period,
            totals_mode,
        } => {
            let settings = with_mode(settings, totals_mode);
            let service = ReportService::new(storage, &settings);
            let (data, document) = service.build(&user, period.period())?;
            print!(
                "{}",
                format_report(&document, &settings.currency_symbol, &data.degraded())
            );
            Ok(())
        }

        ReportCommands::Generate {
            user,
            period,
            format,
            totals_mode,
        } => {
            let settings = with_mode(settings, totals_mode);
            let service = ReportService::new(storage, &settings);
            let period = period.period();
            let result = service.generate(&user, period, format.unwrap_or(settings.default_format));
            outcome_result(OperationOutcome::from_generate(period, &result))
        }

        ReportCommands::Download {
            user,
            period,
            format,
            output,
            totals_mode,
        } => {
            let settings = with_mode(settings, totals_mode);
            let service = ReportService::new(storage, &settings);
            let artifact = service.download(
                &user,
                period.period(),
                format.unwrap_or(settings.default_format),
            )?;

            let path = match output {
                Some(p) if p.is_dir() => p.join(&artifact.file_name),
                Some(p) => p,
                None => PathBuf::from(&artifact.file_name),
            };
            write_bytes_atomic(&path, &artifact.bytes)?;
            println!("Saved {} ({} bytes)", path.display(), artifact.bytes.len());
            Ok(())
        }

        ReportCommands::Email {
            user,
            period,
            to,
            format,
            totals_mode,
        } => {
            let settings = with_mode(settings, totals_mode);
            let service = ReportService::new(storage, &settings);
            let dispatcher = OutboxDispatcher::new(storage.paths().outbox_dir());
            let result = service.email(
                &user,
                to.as_deref(),
                period.period(),
                format.unwrap_or(settings.default_format),
                &dispatcher,
            );
            outcome_result(OperationOutcome::from_email(&result))
        }
    }
}
