use crate::io::Configuration;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads the configuration file. If it does not exist, the default settings are
/// used and written to `config_file` so that the user can see all the used options.
pub fn read_input(config_file: &Path) -> Result<Configuration> {
    let exists: bool = config_file.exists();
    let config_string: String = if exists {
        fs::read_to_string(config_file)
            .with_context(|| format!("Unable to read config file {}", config_file.display()))?
    } else {
        String::from("")
    };
    // Load the configuration.
    let config: Configuration = toml::from_str(&config_string)
        .with_context(|| format!("Invalid config file {}", config_file.display()))?;

    if !exists {
        let config_string: String =
            toml::to_string(&config).context("Unable to serialize the configuration")?;
        fs::write(config_file, config_string)
            .with_context(|| format!("Unable to write config file {}", config_file.display()))?;
    }
    Ok(config)
}
