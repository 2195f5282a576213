/*
[INPUT]:  Static bearer tokens or integration-backed token stores
[OUTPUT]: A bearer token for every outgoing request
[POS]:    Auth layer - token source abstraction used by the session
[UPDATE]: When adding new token sources or changing refresh policy
*/

use async_trait::async_trait;
use chrono::Duration;
use tokio::sync::Mutex;
use tracing::debug;

use crate::auth::{Integration, TokenManager, Tokens};
use crate::http::{Result, WebexError};

/// Refresh access tokens this long before they expire
const REFRESH_MARGIN_MINUTES: i64 = 5;

/// Source of bearer tokens for the session
///
/// The session calls this once per request attempt, so implementations
/// can refresh lazily.
#[async_trait]
pub trait TokenProvider: Send + Sync + std::fmt::Debug {
    /// Return a token valid for the next request
    async fn access_token(&self) -> Result<String>;
}

/// Fixed bearer token (personal access token, bot token, service app token)
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticToken(<redacted>)")
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String> {
        if self.token.trim().is_empty() {
            return Err(WebexError::Authentication {
                message: "access token is empty".to_string(),
            });
        }
        Ok(self.token.clone())
    }
}

/// Integration tokens that refresh themselves before they expire
#[derive(Debug)]
pub struct IntegrationTokens {
    integration: Integration,
    manager: TokenManager,
    refresh_lock: Mutex<()>,
    margin: Duration,
}

impl IntegrationTokens {
    /// Wrap an integration and its current grant
    pub fn new(integration: Integration, tokens: Tokens) -> Self {
        let manager = TokenManager::new();
        manager.set_tokens(tokens);
        Self::with_manager(integration, manager)
    }

    /// Wrap an integration and an existing (possibly shared) token store
    pub fn with_manager(integration: Integration, manager: TokenManager) -> Self {
        Self {
            integration,
            manager,
            refresh_lock: Mutex::new(()),
            margin: Duration::minutes(REFRESH_MARGIN_MINUTES),
        }
    }

    /// Token store backing this provider
    pub fn manager(&self) -> &TokenManager {
        &self.manager
    }

    /// Force a refresh regardless of expiry
    pub async fn refresh(&self) -> Result<Tokens> {
        let _guard = self.refresh_lock.lock().await;
        self.refresh_locked().await
    }

    async fn refresh_locked(&self) -> Result<Tokens> {
        let refresh_token = self
            .manager
            .refresh_token()
            .ok_or_else(|| WebexError::Authentication {
                message: "access token expired and no refresh token is available".to_string(),
            })?;

        debug!(client_id = self.integration.client_id(), "refreshing access token");
        let mut tokens = self.integration.refresh(&refresh_token).await?;
        // Webex may omit the refresh token when it is unchanged
        if tokens.refresh_token.is_none() {
            tokens.refresh_token = Some(refresh_token);
        }
        self.manager.set_tokens(tokens.clone());
        Ok(tokens)
    }
}

#[async_trait]
impl TokenProvider for IntegrationTokens {
    async fn access_token(&self) -> Result<String> {
        if !self.manager.needs_refresh(self.margin) {
            if let Some(token) = self.manager.access_token() {
                return Ok(token);
            }
        }

        let _guard = self.refresh_lock.lock().await;
        // another caller may have refreshed while we waited
        if !self.manager.needs_refresh(self.margin) {
            if let Some(token) = self.manager.access_token() {
                return Ok(token);
            }
        }
        Ok(self.refresh_locked().await?.access_token)
    }
}
