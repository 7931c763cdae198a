// CLI output formatting. Results go to stdout with println!, logs go to stderr
// through tracing.

use colored::Colorize as _;
use comfy_table::{Attribute, Cell, Table, presets};
use tracing_subscriber::EnvFilter;
use trustlate::ParityIssue;

/// Installs the log subscriber. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn print_check_header(base: &str) {
    println!(
        "{} {}",
        "Checking catalogs against".dimmed(),
        base.to_uppercase().bold()
    );
}

pub fn print_language_status(language: &str, ok: bool) {
    println!(
        "Translations for: {} -> {}",
        language.to_uppercase().bold().underline().blue(),
        if ok {
            "OK".bold().green()
        } else {
            "NOT OK".bold().red()
        }
    );
}

/// Builds the Path/Error table of one language's issues.
pub fn issue_table(issues: &[ParityIssue]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::ASCII_NO_BORDERS).set_header(vec![
        Cell::new("Path").add_attribute(Attribute::Bold),
        Cell::new("Error").add_attribute(Attribute::Bold),
    ]);

    for issue in issues {
        table.add_row(vec![issue.path().to_string(), issue.label().to_string()]);
    }

    table
}

pub fn print_issue_table(issues: &[ParityIssue]) {
    println!("{}", issue_table(issues));
    println!();
}

pub fn print_check_success() {
    println!("{}", "All catalogs are in parity".green());
}

pub fn print_language(code: &str, is_base: bool) {
    if is_base {
        println!("{} {}", code, "(base)".dimmed());
    } else {
        println!("{code}");
    }
}

pub fn print_entry(text: &str) {
    println!("{text}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustlate::KeyPath;

    fn path(raw: &str) -> KeyPath {
        raw.parse().unwrap()
    }

    #[test]
    fn issue_table_lists_one_row_per_issue() {
        let issues = [
            ParityIssue::MissingEntry(path("mainPage.subTitle")),
            ParityIssue::Untranslated(path("mainPage.title")),
        ];

        let rendered = issue_table(&issues).to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        let row = |path: &str, label: &str| {
            lines
                .iter()
                .position(|line| line.contains(path) && line.contains(label))
                .unwrap()
        };
        let header = row("Path", "Error");
        let missing = row("mainPage.subTitle", "Missing values");
        let untranslated = row("mainPage.title", "Untranslated");

        assert!(header < missing);
        assert!(missing < untranslated);
    }

    #[test]
    fn empty_issue_list_keeps_the_header() {
        let rendered = issue_table(&[]).to_string();

        assert!(rendered.contains("Path"));
        assert!(!rendered.contains("Missing values"));
    }
}
