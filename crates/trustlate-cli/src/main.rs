use clap::{Parser, Subcommand};
use miette::Result as MietteResult;
use trustlate_cli::commands::{
    CheckArgs, LanguagesArgs, LookupArgs, run_check, run_languages, run_lookup,
};

#[derive(Parser)]
#[command(name = "trustlate")]
#[command(about = "Check and query the compiled-in translation catalogs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every language conforms to the base language's structure
    Check(CheckArgs),

    /// Print one entry of a language's catalog
    Lookup(LookupArgs),

    /// List the supported languages
    Languages(LanguagesArgs),
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    trustlate_cli::ui::init_logging();

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Lookup(args) => run_lookup(args),
        Commands::Languages(args) => run_languages(args),
    };

    result.map_err(miette::Report::new)
}
