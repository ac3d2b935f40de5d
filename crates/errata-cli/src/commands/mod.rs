pub mod batch;
pub mod classify;
pub mod verbalize;

use std::path::Path;

use anyhow::{Context, Result};
use errata::{ClassifierConfig, DEFAULT_CONFIG_FILE};

/// Loads the configuration named on the command line, or `errata.toml` from
/// the working directory when it exists, or defaults.
pub fn load_config(path: Option<&Path>) -> Result<ClassifierConfig> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
        None => return Ok(ClassifierConfig::default()),
    };
    ClassifierConfig::load(path)
        .with_context(|| format!("failed to load config from {}", path.display()))
}

pub fn show_config(config: &ClassifierConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("{}", toml_str);
    Ok(())
}
