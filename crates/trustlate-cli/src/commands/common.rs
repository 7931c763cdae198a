use crate::error::{CliError, ConfigNotFoundError};
use clap::Args;
use std::path::{Path, PathBuf};
use trustlate::{CONFIG_FILE_NAME, TrustlateConfig, TrustlateConfigError};
use trustlate_catalogs::{TranslationRegistry, registry_from_config};

#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Path to a trustlate.toml (defaults to ./trustlate.toml when present).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<TrustlateConfig, CliError> {
        match &self.config {
            Some(path) => match TrustlateConfig::read_from_path(path) {
                Err(TrustlateConfigError::NotFound) => {
                    Err(ConfigNotFoundError { path: path.clone() }.into())
                },
                result => Ok(result?),
            },
            None => {
                let path = Path::new(CONFIG_FILE_NAME);
                if path.exists() {
                    tracing::debug!("Reading {}", path.display());
                    Ok(TrustlateConfig::read_from_path(path)?)
                } else {
                    tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                    Ok(TrustlateConfig::default())
                }
            },
        }
    }

    /// Loads the configuration and builds the registry it describes.
    pub fn registry(&self) -> Result<(TrustlateConfig, TranslationRegistry), CliError> {
        let config = self.load()?;
        let registry = registry_from_config(&config)?;
        Ok((config, registry))
    }
}
