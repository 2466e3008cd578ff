//! Reading `config.toml` from an explicit path or the default location,
//! seeding the default location with a commented template on first run.

mod loader;
mod paths;
mod template;


pub use loader::{load_default, load_from_path};
pub use paths::{create_default_config, default_config_path, platform_config_path, CONFIG_PATH_ENV};
