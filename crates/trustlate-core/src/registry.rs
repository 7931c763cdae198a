//! The language registry: a fixed mapping from language to catalog.

use crate::catalog::Catalog;
use crate::error::RegistryError;
use crate::language::{Language, available_codes};
use crate::parity::{ParityOptions, ParityReport, check_parity, lint_catalog};
use rustc_hash::FxHashMap;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// What [`Registry::resolve_code`] does with a well-formed code that has no
/// catalog.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum UnknownLanguagePolicy {
    /// Return [`RegistryError::UnknownLanguage`].
    #[default]
    Fail,
    /// Return the fallback language's catalog.
    Fallback,
}

/// An immutable mapping from every language in `L` to its catalog.
///
/// Registries are plain values: build one at startup and hand it to whatever
/// needs translations. Every language of `L` is guaranteed to be present, so
/// [`resolve`](Registry::resolve) cannot fail.
pub struct Registry<L: Language, C: 'static> {
    catalogs: FxHashMap<L, &'static C>,
    fallback: L,
    policy: UnknownLanguagePolicy,
}

impl<L: Language, C: 'static> Registry<L, C> {
    /// Builds the registry from an exhaustive selector, usually a `match` over
    /// the language enum.
    pub fn from_fn<F>(select: F) -> Self
    where
        F: Fn(L) -> &'static C,
    {
        let catalogs: FxHashMap<L, &'static C> =
            L::iter().map(|language| (language, select(language))).collect();

        tracing::debug!(
            "Built translation registry for {} language(s): {}",
            catalogs.len(),
            available_codes::<L>()
        );

        Self {
            catalogs,
            fallback: L::default(),
            policy: UnknownLanguagePolicy::default(),
        }
    }

    /// Builds the registry from explicit pairs.
    ///
    /// Every language of `L` must appear exactly once.
    pub fn from_entries<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (L, &'static C)>,
    {
        let mut catalogs = FxHashMap::default();
        for (language, catalog) in entries {
            if catalogs.insert(language, catalog).is_some() {
                return Err(RegistryError::DuplicateLanguage(language.code()));
            }
        }

        if let Some(missing) = L::iter().find(|language| !catalogs.contains_key(language)) {
            return Err(RegistryError::MissingLanguage(missing.code()));
        }

        Ok(Self::from_fn(|language| catalogs[&language]))
    }

    /// Sets the language used as parity base and as fallback for unknown codes.
    pub fn with_fallback(mut self, fallback: L) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_policy(mut self, policy: UnknownLanguagePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The catalog for `language`. Same reference on every call.
    pub fn resolve(&self, language: L) -> &'static C {
        self.catalogs[&language]
    }

    /// Resolves an arbitrary language code, e.g. from user settings.
    ///
    /// The code must be a well-formed language identifier. Codes without a
    /// catalog follow the configured [`UnknownLanguagePolicy`].
    pub fn resolve_code(&self, code: &str) -> Result<&'static C, RegistryError> {
        self.language_for_code(code).map(|language| self.resolve(language))
    }

    /// The language [`resolve_code`](Registry::resolve_code) picks for `code`.
    pub fn language_for_code(&self, code: &str) -> Result<L, RegistryError> {
        let identifier: LanguageIdentifier =
            code.parse().map_err(|source| RegistryError::InvalidLanguageCode {
                code: code.to_string(),
                source,
            })?;

        if let Some(language) = L::from_identifier(&identifier) {
            return Ok(language);
        }

        match self.policy {
            UnknownLanguagePolicy::Fail => Err(RegistryError::UnknownLanguage {
                code: code.to_string(),
                available: available_codes::<L>(),
            }),
            UnknownLanguagePolicy::Fallback => {
                tracing::warn!(
                    "Language '{}' is not supported, falling back to '{}'",
                    code,
                    self.fallback
                );
                Ok(self.fallback)
            },
        }
    }

    pub fn fallback(&self) -> L {
        self.fallback
    }

    pub fn policy(&self) -> UnknownLanguagePolicy {
        self.policy
    }

    /// Supported languages, in declaration order.
    pub fn languages(&self) -> Vec<L> {
        L::all()
    }

    pub fn iter(&self) -> impl Iterator<Item = (L, &'static C)> + '_ {
        L::iter().map(|language| (language, self.resolve(language)))
    }
}

impl<L: Language, C: Catalog> Registry<L, C> {
    /// Builds the registry and fails fast if its catalogs are not in parity.
    pub fn new_validated<F>(select: F, options: &ParityOptions) -> Result<Self, RegistryError>
    where
        F: Fn(L) -> &'static C,
    {
        let registry = Self::from_fn(select);
        registry.validate(options)?;
        Ok(registry)
    }

    /// Checks every catalog against the fallback language's catalog.
    ///
    /// The fallback language itself only gets the content lints.
    pub fn parity_report(&self, options: &ParityOptions) -> ParityReport {
        let base = self.resolve(self.fallback);
        let mut report = ParityReport::new();

        for (language, catalog) in self.iter() {
            let issues = if language == self.fallback {
                lint_catalog(base, options)
            } else {
                check_parity(base, catalog, options)
            };
            report.insert(language.code(), issues);
        }

        report
    }

    pub fn validate(&self, options: &ParityOptions) -> Result<(), RegistryError> {
        let report = self.parity_report(options);
        if report.is_clean() {
            tracing::debug!("All catalogs are in parity with '{}'", self.fallback);
            return Ok(());
        }

        for (language, issues) in report.iter() {
            for issue in issues {
                tracing::error!("Catalog '{}': {}", language, issue);
            }
        }
        Err(RegistryError::Parity(report))
    }
}

impl<L: Language, C: 'static> Clone for Registry<L, C> {
    fn clone(&self) -> Self {
        Self {
            catalogs: self.catalogs.clone(),
            fallback: self.fallback,
            policy: self.policy,
        }
    }
}

impl<L: Language, C: 'static> fmt::Debug for Registry<L, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("languages", &self.languages())
            .field("fallback", &self.fallback)
            .field("policy", &self.policy)
            .finish()
    }
}
