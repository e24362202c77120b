//! Layered configuration.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. TOML file (`config/chillbox.toml` unless a path is given)
//! 3. Environment variables prefixed `CHILLBOX_`, with `__` between
//!    section and key, e.g. `CHILLBOX_DATABASE__PATH=/var/lib/chillbox.db`
//!
//! Command-line flags are applied by the binary on top of the result.

use std::collections::BTreeMap;
use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use chillbox_foundation::{Error, ItemId, Result};
use chillbox_parser::{CatalogBuilder, ItemCatalog};
use chillbox_storage::SqliteStore;

use crate::logging;

/// Config file read when no path is given; optional.
pub const DEFAULT_CONFIG_FILE: &str = "config/chillbox.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "CHILLBOX";

/// Database path selecting a private in-memory database.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Everything the appliance can be configured with.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Where inventory is stored
    pub database: DatabaseSettings,
    /// Log verbosity
    pub logging: LoggingSettings,
    /// Display options
    pub display: DisplaySettings,
    /// Extra catalog items
    pub catalog: CatalogSettings,
}

/// `[database]`
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SQLite file, or `:memory:`
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "chillbox.db".to_string(),
        }
    }
}

impl DatabaseSettings {
    /// Returns true if the database lives only in this process.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY_DATABASE
    }
}

/// `[logging]`
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// `[display]`
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// In-stock items at or below this are flagged
    pub low_stock_threshold: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            low_stock_threshold: 2,
        }
    }
}

/// `[catalog]`
///
/// ```toml
/// [catalog.items]
/// pork_chop = ["pork chop", "pork chops", "chops"]
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogSettings {
    /// Canonical id to variant phrases, merged into the standard catalog
    pub items: BTreeMap<String, Vec<String>>,
}

impl Settings {
    /// Loads settings from a file and the environment.
    ///
    /// With `None`, the default file is used if it exists. An explicit path
    /// must exist.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a source cannot be read or parsed,
    /// or a value is invalid.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let file = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };
        let settings = Self::from_builder(
            Config::builder()
                .add_source(file)
                .add_source(environment(None)),
        )?;
        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text alone.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the text is invalid.
    pub fn from_toml(toml: &str) -> Result<Self> {
        Self::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings: Self = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| Error::config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown log level or an empty
    /// database path.
    pub fn validate(&self) -> Result<()> {
        logging::parse_level(&self.logging.level)?;
        if self.database.path.trim().is_empty() {
            return Err(Error::config("database.path is empty"));
        }
        Ok(())
    }

    /// Builds the standard catalog extended with `[catalog.items]`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a malformed id or a variant already
    /// claimed by another item.
    pub fn build_catalog(&self) -> Result<ItemCatalog> {
        let mut builder = CatalogBuilder::standard()?;
        for (id, variants) in &self.catalog.items {
            let item = ItemId::new(id)
                .map_err(|e| Error::config(format!("catalog.items.{id}: {e}")))?;
            builder
                .add_item(item, variants)
                .map_err(|e| Error::config(format!("catalog.items.{id}: {e}")))?;
        }
        Ok(builder.build())
    }

    /// Opens the configured SQLite store, applying migrations.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the database cannot be opened or migrated.
    pub fn open_store(&self) -> Result<SqliteStore> {
        if self.database.is_in_memory() {
            SqliteStore::open_in_memory()
        } else {
            SqliteStore::open(&self.database.path)
        }
    }
}

fn environment(vars: Option<config::Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(vars)
}
