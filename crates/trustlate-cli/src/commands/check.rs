//! Structural parity check of the shipped catalogs.

use crate::commands::ConfigArgs;
use crate::error::{CliError, ParityReportError};
use crate::ui;
use clap::Parser;
use trustlate::Language as _;

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Show a table of the differences for every language that is not OK.
    #[arg(short, long)]
    pub show_diffs: bool,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<(), CliError> {
    let (config, registry) = args.config.registry()?;
    let report = registry.parity_report(&config.parity_options());

    ui::print_check_header(registry.fallback().code());

    for (language, issues) in report.iter() {
        ui::print_language_status(language, issues.is_empty());
        if args.show_diffs && !issues.is_empty() {
            ui::print_issue_table(issues);
        }
    }

    if report.is_clean() {
        ui::print_check_success();
        return Ok(());
    }

    Err(ParityReportError::from(report).into())
}
