//! `trustlate.toml` configuration.
//!
//! ```toml
//! base_language = "es"
//! unknown_language = "fallback"
//! filler = "[FILLING]"
//! ```

use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use trustlate_core::{ParityOptions, UnknownLanguagePolicy};
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

/// File name looked up in the manifest directory.
pub const CONFIG_FILE_NAME: &str = "trustlate.toml";

#[derive(Debug, Error)]
pub enum TrustlateConfigError {
    /// Configuration file not found.
    #[error("trustlate.toml configuration file not found")]
    NotFound,
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The base language is not a valid language identifier.
    #[error("Invalid base language identifier '{name}'")]
    InvalidLanguageIdentifier {
        /// The invalid identifier.
        name: String,
        /// The parsing error produced by `unic-langid`.
        #[source]
        source: LanguageIdentifierError,
    },
}

/// The configuration for `trustlate`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TrustlateConfig {
    /// Language every other catalog is checked against, also used as fallback.
    /// Defaults to the language enum's default variant.
    #[serde(default)]
    pub base_language: Option<String>,
    /// What to do with language codes that have no catalog.
    #[serde(default)]
    pub unknown_language: UnknownLanguagePolicy,
    /// Marker left in entries that still need a translation, e.g. `[FILLING]`.
    #[serde(default)]
    pub filler: Option<String>,
}

impl TrustlateConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, TrustlateConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(TrustlateConfigError::NotFound);
        }

        let content = fs::read_to_string(path)?;

        content.parse()
    }

    /// Reads `trustlate.toml` from `CARGO_MANIFEST_DIR`.
    pub fn read_from_manifest_dir() -> Result<Self, TrustlateConfigError> {
        Self::read_from_path(Self::manifest_dir_path()?)
    }

    /// Like [`read_from_manifest_dir`](Self::read_from_manifest_dir), but a
    /// missing file yields the default configuration.
    pub fn from_manifest_dir() -> Result<Self, TrustlateConfigError> {
        match Self::read_from_manifest_dir() {
            Err(TrustlateConfigError::NotFound) => Ok(Self::default()),
            result => result,
        }
    }

    fn manifest_dir_path() -> Result<PathBuf, TrustlateConfigError> {
        let manifest_dir =
            env::var("CARGO_MANIFEST_DIR").map_err(|_| TrustlateConfigError::NotFound)?;

        Ok(Path::new(&manifest_dir).join(CONFIG_FILE_NAME))
    }

    /// Returns the configured base language, if any, as a `LanguageIdentifier`.
    pub fn base_language_identifier(
        &self,
    ) -> Result<Option<LanguageIdentifier>, TrustlateConfigError> {
        self.base_language
            .as_deref()
            .map(|name| {
                name.parse::<LanguageIdentifier>().map_err(|source| {
                    TrustlateConfigError::InvalidLanguageIdentifier {
                        name: name.to_string(),
                        source,
                    }
                })
            })
            .transpose()
    }

    /// Options for the catalog parity check.
    pub fn parity_options(&self) -> ParityOptions {
        match &self.filler {
            Some(filler) => ParityOptions::with_filler(filler.clone()),
            None => ParityOptions::default(),
        }
    }
}

impl FromStr for TrustlateConfig {
    type Err = TrustlateConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}
