use std::time::Duration;

use chrono::Utc;
use derive_more::{Display, From};

use crate::config::IamAuthConfig;
use crate::error::{Error, Result};
use crate::host::{EndpointKind, RdsHost};
use crate::region::RdsRegion;
use crate::token::{AuthToken, TokenCache, TokenGenerator, TokenRequest};

/// Identifies the logging sink a helper reports to. Attached to every log
/// event the helper emits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From)]
pub struct LoggerId(String);

impl LoggerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LoggerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Validated connection target for IAM database authentication.
///
/// A helper can only be obtained through [`IamAuthTokenHelper::new`] or
/// [`IamAuthTokenHelper::with_config`], both of which reject hosts that are
/// not RDS endpoints and regions that are malformed. Once built it is
/// immutable.
#[derive(Debug, Clone)]
pub struct IamAuthTokenHelper {
    host: RdsHost,
    port: u16,
    logger: LoggerId,
    token_ttl: Duration,
}

impl IamAuthTokenHelper {
    /// Builds a helper with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHost`] when `host` is blank or not an RDS
    /// endpoint, and [`Error::InvalidRegion`] when the region label embedded
    /// in `host` is malformed.
    pub fn new(host: &str, port: u16, logger: impl Into<LoggerId>) -> Result<Self> {
        Self::with_config(host, port, logger, &IamAuthConfig::default())
    }

    /// Builds a helper using `config` for the region policy and token
    /// lifetime.
    ///
    /// # Errors
    ///
    /// Same as [`IamAuthTokenHelper::new`], plus [`Error::UnknownRegion`]
    /// when `config.strict_region_check` is set and the region is not a
    /// known AWS region.
    pub fn with_config(
        host: &str,
        port: u16,
        logger: impl Into<LoggerId>,
        config: &IamAuthConfig,
    ) -> Result<Self> {
        let logger = logger.into();

        let host = RdsHost::parse(host)
            .and_then(|parsed| {
                if config.strict_region_check && !parsed.region().is_known() {
                    return Err(Error::UnknownRegion { region: parsed.region().to_string() });
                }
                Ok(parsed)
            })
            .inspect_err(|err| {
                tracing::warn!(logger = %logger, host, kind = %err.kind(), "{err}");
            })?;

        tracing::debug!(
            logger = %logger,
            host = host.name(),
            region = %host.region(),
            kind = %host.kind(),
            port,
            "Validated RDS endpoint"
        );

        Ok(Self { host, port, logger, token_ttl: config.cache_ttl() })
    }

    pub fn host(&self) -> &str {
        self.host.name()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn region(&self) -> &RdsRegion {
        self.host.region()
    }

    pub fn endpoint_kind(&self) -> EndpointKind {
        self.host.kind()
    }

    pub fn logger(&self) -> &LoggerId {
        &self.logger
    }

    /// The request a signer would need to authenticate `user` against this
    /// endpoint. Also serves as the token cache key.
    pub fn token_request(&self, user: &str) -> TokenRequest {
        TokenRequest {
            host: self.host.name().to_string(),
            port: self.port,
            region: self.host.region().clone(),
            user: user.to_string(),
        }
    }

    /// Returns a cached token for `user` if one is still valid, otherwise
    /// asks `generator` for a new one and caches it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUser`] for a blank user and
    /// [`Error::TokenGeneration`] when the generator fails. Failures are not
    /// cached.
    pub async fn get_or_generate_token<G>(
        &self,
        user: &str,
        generator: &G,
        cache: &TokenCache,
    ) -> Result<String>
    where
        G: TokenGenerator + ?Sized,
    {
        if user.trim().is_empty() {
            return Err(Error::InvalidUser);
        }

        let request = self.token_request(user);
        if let Some(token) = cache.get(&request) {
            tracing::debug!(logger = %self.logger, user, host = self.host(), "Using cached IAM token");
            return Ok(token.value);
        }

        tracing::debug!(logger = %self.logger, user, host = self.host(), "Generating IAM token");
        let value = generator.generate(&request).await.map_err(|source| {
            tracing::debug!(logger = %self.logger, user, error = %source, "IAM token generation failed");
            Error::TokenGeneration { user: user.to_string(), source }
        })?;

        if let Ok(ttl) = chrono::Duration::from_std(self.token_ttl)
            && !ttl.is_zero()
        {
            cache.insert(request, AuthToken::new(value.clone(), Utc::now() + ttl));
        }

        Ok(value)
    }
}
