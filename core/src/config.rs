//! Configuration persistence
//!
//! The serializable [`ExplorerConfig`] lives in cuppa-types; this module
//! adds confy-backed load/save behind an extension trait.

use cuppa_types::ExplorerConfig;
use thiserror::Error;

const APP_NAME: &str = "cuppa";
const CONFIG_NAME: &str = "config";

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}

/// Extension trait for ExplorerConfig persistence
pub trait ExplorerConfigExt: Sized {
    fn load() -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
}

impl ExplorerConfigExt for ExplorerConfig {
    fn load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }
}
