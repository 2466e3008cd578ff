//! Reading and parsing config files.

use std::path::Path;

use scrollstack_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::ScrollStackConfig;
use crate::validation;

/// Parse the TOML file at `path`. Missing fields take their defaults.
///
/// Validation problems are logged but do not fail the load; callers that
/// need a valid config run [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<ScrollStackConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: ScrollStackConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config has invalid values: {e}");
    }
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load from the default location, writing the commented template there
/// first if nothing exists yet.
pub fn load_default() -> Result<ScrollStackConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(ScrollStackConfig::default())
        }
        other => other,
    }
}
