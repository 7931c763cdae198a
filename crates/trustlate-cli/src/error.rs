//! CLI error types, reported through miette.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;
use trustlate::{ParityIssue, RegistryError, TrustlateConfigError};
use trustlate_catalogs::LoadError;

/// Error when an explicitly requested configuration file does not exist.
#[derive(Debug, Diagnostic, Error)]
#[error("configuration file not found: {}", .path.display())]
#[diagnostic(
    code(trustlate::config::not_found),
    help("Pass an existing trustlate.toml to --config, or drop the flag to use the defaults")
)]
pub struct ConfigNotFoundError {
    /// The path that was given.
    pub path: PathBuf,
}

/// Error when the configuration cannot be read or applied.
#[derive(Debug, Diagnostic, Error)]
#[error("invalid configuration")]
#[diagnostic(code(trustlate::config::invalid))]
pub struct ConfigError {
    /// The underlying error message.
    #[help]
    pub help: String,
}

/// Error when a language code names no shipped catalog.
#[derive(Debug, Diagnostic, Error)]
#[error("language '{code}' is not supported")]
#[diagnostic(
    code(trustlate::lookup::unknown_language),
    help("Available languages: {available}")
)]
pub struct UnknownLanguageError {
    pub code: String,
    pub available: String,
}

/// Error when a lookup cannot produce a string.
#[derive(Debug, Diagnostic, Error)]
#[error("cannot look up '{path}' in '{language}'")]
#[diagnostic(code(trustlate::lookup::failed))]
pub struct LookupError {
    pub path: String,
    pub language: String,
    #[help]
    pub help: String,
}

/// A single parity issue of one language.
#[derive(Debug, Diagnostic, Error)]
#[error("{language}: {issue}")]
#[diagnostic(code(trustlate::check::issue), severity(Error))]
pub struct ParityIssueError {
    pub language: &'static str,
    pub issue: ParityIssue,
}

/// Aggregated parity check failure.
#[derive(Debug, Diagnostic, Error)]
#[error("parity check found {issue_count} issue(s) in {language_count} language(s)")]
#[diagnostic(
    code(trustlate::check::report),
    help("Run `trustlate check --show-diffs` for a table of the differences")
)]
pub struct ParityReportError {
    pub issue_count: usize,
    pub language_count: usize,
    #[related]
    pub issues: Vec<ParityIssueError>,
}

impl From<trustlate::ParityReport> for ParityReportError {
    fn from(report: trustlate::ParityReport) -> Self {
        let issues: Vec<ParityIssueError> = report
            .iter()
            .flat_map(|(language, issues)| {
                issues.iter().map(move |issue| ParityIssueError {
                    language,
                    issue: issue.clone(),
                })
            })
            .collect();

        Self {
            issue_count: issues.len(),
            language_count: report.iter().filter(|(_, issues)| !issues.is_empty()).count(),
            issues,
        }
    }
}

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigNotFound(#[from] ConfigNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    UnknownLanguage(#[from] UnknownLanguageError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parity(#[from] ParityReportError),

    #[error("{0}")]
    #[diagnostic(code(trustlate::other))]
    Other(String),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(format!("{err:#}"))
    }
}

impl From<TrustlateConfigError> for CliError {
    fn from(err: TrustlateConfigError) -> Self {
        ConfigError {
            help: err.to_string(),
        }
        .into()
    }
}

impl From<LoadError> for CliError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Config(err) => err.into(),
            LoadError::Registry(err) => err.into(),
            err @ LoadError::UnsupportedBaseLanguage { .. } => ConfigError {
                help: err.to_string(),
            }
            .into(),
        }
    }
}

impl From<RegistryError> for CliError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownLanguage { code, available } => {
                UnknownLanguageError { code, available }.into()
            },
            RegistryError::Parity(report) => ParityReportError::from(report).into(),
            err => CliError::Other(err.to_string()),
        }
    }
}
