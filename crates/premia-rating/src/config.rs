//! Rating configuration
//!
//! Sources, lowest priority first:
//! 1. built-in defaults
//! 2. `premia.{toml,yaml,json}` in the working directory (optional)
//! 3. an explicit config file, when given (required)
//! 4. `PREMIA_` environment variables, `__` separating nested keys
//!    (e.g. `PREMIA_CURRENCY__MAX=5000000`)

use std::path::Path;
use std::sync::Arc;

use config::{Config, Environment, File};
use premia_common::{
    CoverageCatalog, CoverageError, CoverageType, PremiaError, TermLength, DEFAULT_TERM_YEARS,
};
use premia_validation::CurrencyBounds;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::basket::CoverageBasket;
use crate::pricing::PremiumEngine;

/// Config file base name looked up in the working directory
pub const DEFAULT_CONFIG_NAME: &str = "premia";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PREMIA";

/// Rating engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Term given to newly selected coverages
    pub default_term_years: u32,
    /// Bounds for entered coverage amounts
    pub currency: CurrencyBounds,
    /// Catalog entries replacing the standard catalog (empty = standard)
    pub coverages: Vec<CoverageType>,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            default_term_years: DEFAULT_TERM_YEARS,
            currency: CurrencyBounds::default(),
            coverages: Vec::new(),
        }
    }
}

impl RatingConfig {
    /// Load configuration from `.env`, the default config file, and the environment
    pub fn load() -> Result<Self, PremiaError> {
        let _ = dotenvy::dotenv();
        Self::load_from(None)
    }

    /// Load configuration, layering an explicit file over the defaults
    pub fn load_from(path: Option<&Path>) -> Result<Self, PremiaError> {
        let mut builder =
            Config::builder().add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false));
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let cfg: RatingConfig = builder
            .build()
            .and_then(|raw| raw.try_deserialize())
            .map_err(|e| PremiaError::Config(format!("Failed to load rating config: {}", e)))?;

        cfg.validate()?;
        info!(
            default_term_years = cfg.default_term_years,
            custom_coverages = cfg.coverages.len(),
            "Loaded rating configuration"
        );
        Ok(cfg)
    }

    /// Check cross-field constraints the deserializer cannot express
    pub fn validate(&self) -> Result<(), PremiaError> {
        self.default_term()?;
        if self.currency.min > self.currency.max {
            return Err(PremiaError::Config(format!(
                "Currency min {} exceeds max {}",
                self.currency.min, self.currency.max
            )));
        }
        if !self.coverages.is_empty() {
            CoverageCatalog::from_types(self.coverages.clone())?;
        }
        Ok(())
    }

    pub fn default_term(&self) -> Result<TermLength, PremiaError> {
        TermLength::try_from(self.default_term_years).map_err(|err| match err {
            CoverageError::InvalidTermLength { years } => PremiaError::Config(format!(
                "default_term_years must be one of 10, 15, 20, 25, 30 (got {})",
                years
            )),
            other => other.into(),
        })
    }

    /// Configured catalog, or the standard one when none is configured
    pub fn catalog(&self) -> Result<Arc<CoverageCatalog>, PremiaError> {
        if self.coverages.is_empty() {
            return Ok(CoverageCatalog::standard());
        }
        Ok(Arc::new(CoverageCatalog::from_types(self.coverages.clone())?))
    }

    pub fn build_engine(&self) -> Result<PremiumEngine, PremiaError> {
        Ok(PremiumEngine::new(self.catalog()?))
    }

    /// Empty basket using this configuration's catalog, term, and bounds
    pub fn basket(&self) -> Result<CoverageBasket, PremiaError> {
        Ok(CoverageBasket::new(self.build_engine()?)
            .with_default_term(self.default_term()?)
            .with_currency_bounds(self.currency.clone()))
    }
}
