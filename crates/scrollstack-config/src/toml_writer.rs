//! Saving a ScrollStackConfig back to disk.
//!
//! Writes go to a sibling `.toml.tmp` file which is then renamed over the
//! target, so readers never see a half-written config.

use std::path::{Path, PathBuf};

use scrollstack_common::ConfigError;

use crate::schema::{ScrollStackConfig, CONFIG_SCHEMA_VERSION};
use crate::toml_loader::default_config_path;
use crate::validation;

/// Save to the default config location.
pub fn save_config(config: &ScrollStackConfig) -> Result<PathBuf, ConfigError> {
    let path = default_config_path()?;
    save_config_to_path(config, &path)?;
    Ok(path)
}

/// Save to `path`. A config that fails validation is not written.
pub fn save_config_to_path(config: &ScrollStackConfig, path: &Path) -> Result<(), ConfigError> {
    validation::validate(config)?;
    let body = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config: {e}")))?;
    let content = format!("# scrollstack configuration\n# Schema version {CONFIG_SCHEMA_VERSION}\n\n{body}");

    let write_error = |target: &Path, source: std::io::Error| ConfigError::WriteError {
        path: target.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }

    let staging = path.with_extension("toml.tmp");
    std::fs::write(&staging, &content).map_err(|e| write_error(&staging, e))?;
    if let Err(e) = std::fs::rename(&staging, path) {
        tracing::warn!(error = %e, "rename over config failed, writing in place");
        let _ = std::fs::remove_file(&staging);
        std::fs::write(path, &content).map_err(|e| write_error(path, e))?;
    }

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollstack_common::Axis;
    use tempfile::TempDir;

    #[test]
    fn saved_file_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = ScrollStackConfig::default();
        config.appearance.axis = Axis::Horizontal;
        config.appearance.separator_thickness = 2.0;
        config.appearance.separator_color = "#ff0000".into();
        config.animation.animate_scroll = false;
        config.animation.scroll.damping = 0.9;
        save_config_to_path(&config, &path).unwrap();

        let loaded = crate::toml_loader::load_from_path(&path).unwrap();
        assert_eq!(loaded.appearance.axis, Axis::Horizontal);
        assert_eq!(loaded.appearance.separator_thickness, 2.0);
        assert_eq!(loaded.appearance.separator_color, "#ff0000");
        assert!(!loaded.animation.animate_scroll);
        assert_eq!(loaded.animation.scroll, config.animation.scroll);
        assert_eq!(loaded.animation.visibility, config.animation.visibility);
    }

    #[test]
    fn saved_file_starts_with_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        save_config_to_path(&ScrollStackConfig::default(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# scrollstack configuration"));
        assert!(contents.contains("[appearance]"));
    }

    #[test]
    fn invalid_config_is_not_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = ScrollStackConfig::default();
        config.appearance.border_width = -3.0;

        let result = save_config_to_path(&config, &path);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
        assert!(!path.exists());
    }

    #[test]
    fn creates_parent_dirs_and_leaves_no_staging_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("config.toml");

        save_config_to_path(&ScrollStackConfig::default(), &path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn disk_failure_is_a_write_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("config.toml");

        let result = save_config_to_path(&ScrollStackConfig::default(), &path);
        match result {
            Err(ConfigError::WriteError { path: failed, .. }) => assert_eq!(failed, blocker),
            other => panic!("expected a write error, got {other:?}"),
        }
    }
}
