//! Configuration system for errata.
//!
//! Load classifier configuration from TOML or YAML files to pick the label
//! taxonomy, the language and the batch parallelism without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use errata_config::{BatchThreads, ClassifierConfig};
//! use errata_core::Taxonomy;
//!
//! let config = ClassifierConfig::from_toml_str(r#"
//!     taxonomy = "error4"
//!     language = "dutch"
//!     print_diagnostics = false
//!
//!     [batch_threads]
//!     count = 4
//! "#).unwrap();
//!
//! assert_eq!(config.taxonomy, Taxonomy::Error4);
//! assert_eq!(config.batch_threads, BatchThreads::Count(4));
//! assert!(!config.print_diagnostics);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use errata_config::ClassifierConfig;
//!
//! let config = ClassifierConfig::load("errata.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use errata_core::Taxonomy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "errata.toml";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main classifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ClassifierConfig {
    /// Label taxonomy used when none is given on the command line.
    #[serde(default)]
    pub taxonomy: Taxonomy,

    /// Language of the verbalizer.
    #[serde(default = "default_language")]
    pub language: String,

    /// Number of threads for batch classification.
    #[serde(default)]
    pub batch_threads: BatchThreads,

    /// Whether child-facing diagnostic messages are printed.
    #[serde(default = "default_print_diagnostics")]
    pub print_diagnostics: bool,
}

fn default_language() -> String {
    "dutch".to_string()
}

fn default_print_diagnostics() -> bool {
    true
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            taxonomy: Taxonomy::default(),
            language: default_language(),
            batch_threads: BatchThreads::default(),
            print_diagnostics: default_print_diagnostics(),
        }
    }
}

impl ClassifierConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` files are read as YAML, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, doesn't parse, or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.language.trim().is_empty() {
            return Err(ConfigError::Invalid("language must not be empty".into()));
        }
        if self.batch_threads == BatchThreads::Count(0) {
            return Err(ConfigError::Invalid("batch_threads count must be at least 1".into()));
        }
        Ok(())
    }

    /// Sets the taxonomy.
    pub fn with_taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    /// Sets the batch thread count.
    pub fn with_batch_threads(mut self, threads: BatchThreads) -> Self {
        self.batch_threads = threads;
        self
    }

    /// Enables or disables diagnostic messages.
    pub fn with_diagnostics(mut self, print: bool) -> Self {
        self.print_diagnostics = print;
        self
    }

    /// Applies command line overrides on top of file values.
    pub fn apply(mut self, overrides: ClassifierConfigOverride) -> Self {
        if let Some(taxonomy) = overrides.taxonomy {
            self.taxonomy = taxonomy;
        }
        if let Some(threads) = overrides.batch_threads {
            self.batch_threads = threads;
        }
        if let Some(print) = overrides.print_diagnostics {
            self.print_diagnostics = print;
        }
        self
    }
}

/// Batch thread count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchThreads {
    /// Use rayon's global pool.
    #[default]
    Auto,

    /// Classify sequentially on the calling thread.
    None,

    /// Dedicated pool with a specific number of threads.
    Count(usize),
}

/// Runtime configuration overrides.
#[derive(Debug, Clone, Default)]
pub struct ClassifierConfigOverride {
    pub taxonomy: Option<Taxonomy>,
    pub batch_threads: Option<BatchThreads>,
    pub print_diagnostics: Option<bool>,
}
