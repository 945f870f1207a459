//! Hub service configuration.

use common::DatabaseConfig;

/// Hub service configuration.
#[derive(Debug, Clone, Default)]
pub struct HubServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl HubServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
        }
    }
}
