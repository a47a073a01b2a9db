use std::time::Duration;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters, fake::Dummy)]
#[serde(rename_all = "snake_case")]
#[setters(into)]
/// Settings for host validation and token caching.
pub struct IamAuthConfig {
    /// Lifetime of a generated IAM authentication token in seconds.
    pub token_expiration_secs: u64,

    /// How long before expiry a cached token stops being handed out.
    pub refresh_margin_secs: u64,

    /// Reject well-formed regions that are not in the built-in region list.
    pub strict_region_check: bool,

    /// Port used when the caller does not supply one.
    pub default_port: u16,
}

impl Default for IamAuthConfig {
    fn default() -> Self {
        Self {
            token_expiration_secs: 900,
            refresh_margin_secs: 30,
            strict_region_check: false,
            default_port: 3306,
        }
    }
}

impl IamAuthConfig {
    /// Loads configuration from the embedded `iam_auth.json` defaults,
    /// overridden by environment variables prefixed with `RDS_IAM_`.
    ///
    /// # Examples of environment variables:
    /// - `RDS_IAM_TOKEN_EXPIRATION_SECS` -> `token_expiration_secs`
    /// - `RDS_IAM_STRICT_REGION_CHECK` -> `strict_region_check`
    ///
    /// # Errors
    /// Returns an error if an override cannot be parsed into the expected
    /// type.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("RDS_IAM")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load(environment: config::Environment) -> Result<Self, config::ConfigError> {
        const DEFAULT_CONFIG: &str = include_str!("../iam_auth.json");

        let config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Json,
            ))
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }

    /// Time a freshly generated token may be served from cache.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(
            self.token_expiration_secs
                .saturating_sub(self.refresh_margin_secs),
        )
    }
}
