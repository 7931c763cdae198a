use crate::parity::ParityReport;
use thiserror::Error;
use unic_langid::LanguageIdentifierError;

/// Errors raised by the dynamic view over a catalog.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CatalogError {
    /// A template was rendered with the wrong number of arguments.
    #[error("template expects {expected} argument(s), got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// No node exists at the requested path.
    #[error("no entry at '{0}'")]
    MissingKey(String),

    /// The path points at a section rather than at a literal or a template.
    #[error("'{0}' is a section, not an entry")]
    NotAnEntry(String),

    /// The path is empty or contains an empty segment.
    #[error("invalid key path '{0}'")]
    InvalidKeyPath(String),
}

/// Errors raised while building or querying a [`Registry`](crate::Registry).
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The same language was registered twice.
    #[error("language '{0}' is registered more than once")]
    DuplicateLanguage(&'static str),

    /// A supported language has no catalog.
    #[error("language '{0}' has no registered catalog")]
    MissingLanguage(&'static str),

    /// The code is not a well-formed language identifier.
    #[error("'{code}' is not a valid language identifier")]
    InvalidLanguageCode {
        code: String,
        #[source]
        source: LanguageIdentifierError,
    },

    /// The code is well formed but no catalog is compiled in for it.
    #[error("language '{code}' is not supported (available: {available})")]
    UnknownLanguage { code: String, available: String },

    /// The registered catalogs do not share the same structure.
    #[error("catalog parity check failed with {} issue(s)", .0.issue_count())]
    Parity(ParityReport),
}
