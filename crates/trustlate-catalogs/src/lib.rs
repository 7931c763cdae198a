//! The catalogs shipped with trustlate: Catalan, English and Spanish.
//!
//! ```
//! use trustlate_catalogs::{Language, registry};
//!
//! let es = registry().resolve(Language::Es);
//! assert_eq!(es.secondary_page.greeting("Ana", "García"), "Hola Ana García");
//! assert_eq!(es.main_page.title, "Hola");
//! ```
//!
//! Catalogs are immutable:
//!
//! ```compile_fail
//! let es = trustlate_catalogs::catalog(trustlate_catalogs::Language::Es);
//! es.main_page.title = "Adiós";
//! ```

pub mod cat;
pub mod en;
pub mod es;
mod schema;

pub use schema::{MainPage, SecondaryPage, ThirdPage, Translations};

use std::sync::LazyLock;
use thiserror::Error;
use trustlate::{
    Language as _, ParityOptions, Registry, RegistryError, TrustlateConfig, TrustlateConfigError,
};

/// Every language a catalog is shipped for. Spanish is the base language.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    Cat,
    En,
    #[default]
    Es,
}

impl trustlate::Language for Language {}

pub type TranslationRegistry = Registry<Language, Translations>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] TrustlateConfigError),

    #[error("base language '{code}' has no catalog (available: {available})")]
    UnsupportedBaseLanguage { code: String, available: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// The catalog for `language`.
pub fn catalog(language: Language) -> &'static Translations {
    match language {
        Language::Cat => &cat::TRANSLATIONS,
        Language::En => &en::TRANSLATIONS,
        Language::Es => &es::TRANSLATIONS,
    }
}

static REGISTRY: LazyLock<TranslationRegistry> = LazyLock::new(|| Registry::from_fn(catalog));

/// The process-wide registry with the default settings: Spanish as base and
/// unknown codes rejected.
pub fn registry() -> &'static TranslationRegistry {
    &REGISTRY
}

/// Resolves a language code against the default registry.
pub fn resolve(code: &str) -> Result<&'static Translations, RegistryError> {
    registry().resolve_code(code)
}

/// Builds a registry honoring `config`'s base language and unknown-language
/// policy.
pub fn registry_from_config(config: &TrustlateConfig) -> Result<TranslationRegistry, LoadError> {
    let mut registry = Registry::from_fn(catalog).with_policy(config.unknown_language);

    if let Some(identifier) = config.base_language_identifier()? {
        let base = Language::from_identifier(&identifier).ok_or_else(|| {
            LoadError::UnsupportedBaseLanguage {
                code: identifier.to_string(),
                available: Language::all()
                    .into_iter()
                    .map(Language::code)
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })?;
        registry = registry.with_fallback(base);
    }

    tracing::debug!(
        "Using '{}' as base language with policy '{}'",
        registry.fallback(),
        registry.policy()
    );

    Ok(registry)
}

/// [`registry_from_config`], failing fast if the catalogs are not in parity.
pub fn validated_registry(config: &TrustlateConfig) -> Result<TranslationRegistry, LoadError> {
    let registry = registry_from_config(config)?;
    registry.validate(&config.parity_options())?;
    Ok(registry)
}

/// Checks the shipped catalogs with default options.
pub fn validate() -> Result<(), RegistryError> {
    registry().validate(&ParityOptions::default())
}
