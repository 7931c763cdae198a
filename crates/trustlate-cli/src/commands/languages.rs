use crate::commands::ConfigArgs;
use crate::error::CliError;
use crate::ui;
use clap::Parser;
use trustlate::Language as _;

/// Arguments for the languages command.
#[derive(Debug, Parser)]
pub struct LanguagesArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Run the languages command.
pub fn run_languages(args: LanguagesArgs) -> Result<(), CliError> {
    let (_, registry) = args.config.registry()?;

    for language in registry.languages() {
        ui::print_language(language.code(), language == registry.fallback());
    }

    Ok(())
}
