//! Prints a single entry, rendering templates with the given arguments.

use crate::commands::ConfigArgs;
use crate::error::{CliError, LookupError};
use crate::ui;
use anyhow::Context as _;
use clap::Parser;
use trustlate::{Catalog, KeyPath, Language as _};

/// Arguments for the lookup command.
#[derive(Debug, Parser)]
pub struct LookupArgs {
    /// Language code, e.g. `es`.
    pub language: String,

    /// Dotted key path, e.g. `secondaryPage.greeting`.
    pub path: String,

    /// Template arguments, in parameter order.
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Run the lookup command.
pub fn run_lookup(args: LookupArgs) -> Result<(), CliError> {
    let (_, registry) = args.config.registry()?;
    let language = registry.language_for_code(&args.language)?;

    let text = args
        .path
        .parse::<KeyPath>()
        .map_err(anyhow::Error::from)
        .and_then(|path| render_entry(registry.resolve(language), &path, &args.args))
        .map_err(|err| LookupError {
            path: args.path.clone(),
            language: language.code().to_string(),
            help: format!("{err:#}"),
        })?;

    ui::print_entry(&text);
    Ok(())
}

/// Looks up `path` in `catalog` and renders it with `args`.
pub fn render_entry<C: Catalog + ?Sized>(
    catalog: &C,
    path: &KeyPath,
    args: &[String],
) -> anyhow::Result<String> {
    let entry = catalog.lookup(path)?;
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    entry
        .render(&args)
        .with_context(|| format!("'{path}' takes ({})", entry.parameters().join(", ")))
}
