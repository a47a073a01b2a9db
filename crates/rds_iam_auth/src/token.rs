use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::region::RdsRegion;

/// Everything a signer needs to produce an IAM authentication token for a
/// database login.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenRequest {
    pub host: String,
    pub port: u16,
    pub region: RdsRegion,
    pub user: String,
}

/// Produces signed IAM authentication tokens.
///
/// Implementations are expected to presign an `rds-db:connect` request with
/// ambient AWS credentials. Request signing and credential resolution are not
/// part of this crate.
#[async_trait::async_trait]
pub trait TokenGenerator: Send + Sync {
    async fn generate(&self, request: &TokenRequest) -> anyhow::Result<String>;
}

/// A generated token and the instant after which it must not be reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self { value: value.into(), expires_at }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Cache key; tokens are scoped to a single region, endpoint, and user.
pub type TokenKey = TokenRequest;

/// Concurrent store of generated tokens.
///
/// Expired entries are never returned and are evicted lazily on lookup.
#[derive(Debug, Default)]
pub struct TokenCache {
    tokens: DashMap<TokenKey, AuthToken>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached token for `key` if it has not expired.
    pub fn get(&self, key: &TokenKey) -> Option<AuthToken> {
        self.get_at(key, Utc::now())
    }

    pub fn get_at(&self, key: &TokenKey, now: DateTime<Utc>) -> Option<AuthToken> {
        let token = self.tokens.get(key).map(|entry| entry.value().clone())?;
        if token.is_expired_at(now) {
            self.tokens
                .remove_if(key, |_, cached| cached.is_expired_at(now));
            return None;
        }
        Some(token)
    }

    pub fn insert(&self, key: TokenKey, token: AuthToken) {
        self.tokens.insert(key, token);
    }

    pub fn invalidate(&self, key: &TokenKey) -> Option<AuthToken> {
        self.tokens.remove(key).map(|(_, token)| token)
    }

    pub fn clear(&self) {
        self.tokens.clear();
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
