//! Full configuration validation.
//!
//! Validates numeric ranges and color formats. Each section has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod animation;
mod appearance;
mod helpers;


use crate::schema::ScrollStackConfig;
use scrollstack_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ScrollStackConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    appearance::validate_appearance(&mut errors, config);
    animation::validate_animation(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
