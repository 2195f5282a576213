/*
[INPUT]:  OAuth token grants and expiration offsets
[OUTPUT]: Token retrieval, expiry and refresh status
[POS]:    Auth layer - token lifecycle management
[UPDATE]: When changing token storage strategy or refresh margins
*/

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Token grant as returned by `POST /access_token`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokens {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token_expires_in: Option<i64>,
}

impl std::fmt::Debug for Tokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokens")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("refresh_token_expires_in", &self.refresh_token_expires_in)
            .finish()
    }
}

/// Stored tokens with absolute expiry times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenData {
    pub tokens: Tokens,
    /// `None` for tokens without a known lifetime
    pub expires_at: Option<DateTime<Utc>>,
    pub refresh_expires_at: Option<DateTime<Utc>>,
}

impl TokenData {
    /// Stamp a fresh grant with absolute expiry times relative to `now`.
    ///
    /// Lifetimes that overflow the calendar are treated as unknown.
    pub fn from_grant(tokens: Tokens, now: DateTime<Utc>) -> Self {
        let expires_at = tokens.expires_in.and_then(|secs| expiry_after(now, secs));
        let refresh_expires_at = tokens
            .refresh_token_expires_in
            .and_then(|secs| expiry_after(now, secs));
        Self {
            tokens,
            expires_at,
            refresh_expires_at,
        }
    }

    /// True once the access token expires within `margin` of `now`
    pub fn expires_within(&self, margin: Duration, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now + margin >= expires_at,
            None => false,
        }
    }
}

fn expiry_after(now: DateTime<Utc>, secs: i64) -> Option<DateTime<Utc>> {
    Duration::try_seconds(secs).and_then(|lifetime| now.checked_add_signed(lifetime))
}

/// Thread-safe token store
#[derive(Debug, Clone, Default)]
pub struct TokenManager {
    data: Arc<RwLock<Option<TokenData>>>,
}

impl TokenManager {
    /// Create a new empty token manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager seeded with previously stored tokens
    pub fn with_data(data: TokenData) -> Self {
        Self {
            data: Arc::new(RwLock::new(Some(data))),
        }
    }

    /// Store a fresh grant, computing expiry from now
    pub fn set_tokens(&self, tokens: Tokens) {
        self.set_data(TokenData::from_grant(tokens, Utc::now()));
    }

    /// Replace the stored token data
    pub fn set_data(&self, data: TokenData) {
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(data);
    }

    /// Get the current access token if available
    pub fn access_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().map(|data| data.tokens.access_token.clone())
    }

    /// Get the current refresh token if available
    pub fn refresh_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_ref()
            .and_then(|data| data.tokens.refresh_token.clone())
    }

    /// Check if the access token is missing or expired
    pub fn is_expired(&self) -> bool {
        self.needs_refresh(Duration::zero())
    }

    /// Check if the access token is missing or expires within `margin`
    pub fn needs_refresh(&self, margin: Duration) -> bool {
        let guard = self.data.read().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref() {
            Some(data) => data.expires_within(margin, Utc::now()),
            None => true,
        }
    }

    /// Get token data if available
    pub fn token_data(&self) -> Option<TokenData> {
        let guard = self.data.read().unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }

    /// Clear the stored tokens
    pub fn clear(&self) {
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant(expires_in: Option<i64>) -> Tokens {
        Tokens {
            access_token: "access".to_string(),
            expires_in,
            refresh_token: Some("refresh".to_string()),
            refresh_token_expires_in: Some(7_776_000),
        }
    }

    #[test]
    fn test_new_manager_is_empty() {
        let manager = TokenManager::new();
        assert!(manager.access_token().is_none());
        assert!(manager.is_expired());
    }

    #[test]
    fn test_set_and_get_tokens() {
        let manager = TokenManager::new();
        manager.set_tokens(grant(Some(1_209_599)));

        assert_eq!(manager.access_token(), Some("access".to_string()));
        assert_eq!(manager.refresh_token(), Some("refresh".to_string()));
        assert!(!manager.is_expired());
        assert!(!manager.needs_refresh(Duration::minutes(5)));
    }

    #[test]
    fn test_needs_refresh_inside_margin() {
        let manager = TokenManager::new();
        manager.set_tokens(grant(Some(60)));

        assert!(!manager.is_expired());
        assert!(manager.needs_refresh(Duration::minutes(5)));
    }

    #[test]
    fn test_token_without_lifetime_never_expires() {
        let manager = TokenManager::new();
        manager.set_tokens(grant(None));
        assert!(!manager.needs_refresh(Duration::days(365)));
    }

    #[test]
    fn test_out_of_range_lifetime_has_no_expiry() {
        let manager = TokenManager::new();
        manager.set_tokens(Tokens {
            access_token: "access".to_string(),
            expires_in: Some(i64::MAX),
            refresh_token: Some("refresh".to_string()),
            refresh_token_expires_in: Some(i64::MIN),
        });

        let data = manager.token_data().unwrap();
        assert!(data.expires_at.is_none());
        assert!(data.refresh_expires_at.is_none());
        assert!(!manager.is_expired());
    }

    #[test]
    fn test_clear_tokens() {
        let manager = TokenManager::new();
        manager.set_tokens(grant(Some(3600)));

        manager.clear();
        assert!(manager.access_token().is_none());
        assert!(manager.is_expired());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", grant(Some(10)));
        assert!(!rendered.contains("access\""));
        assert!(rendered.contains("<redacted>"));
    }
}
