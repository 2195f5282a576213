/*
[INPUT]:  Merged CliConfig
[OUTPUT]: Authenticated WebexClient plus optional token persistence
[POS]:    Auth wiring - chooses between a bearer token and stored integration tokens
[UPDATE]: When adding credential sources
*/

use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, info, warn};
use webex_sdk::{ClientConfig, Integration, IntegrationTokens, TokenFile, TokenManager, WebexClient};

use crate::config::{CliConfig, IntegrationConfig};

pub struct Session {
    pub client: WebexClient,
    stored: Option<(Arc<IntegrationTokens>, TokenFile)>,
}

impl Session {
    /// Build a client from `config`.
    ///
    /// An explicit access token wins over integration settings.
    pub fn connect(config: &CliConfig) -> Result<Self> {
        let mut client_config = ClientConfig::default();
        if let Some(base_url) = &config.base_url {
            client_config.base_url = base_url.clone();
        }

        if let Some(token) = config.access_token.as_deref().filter(|t| !t.is_empty()) {
            debug!(base_url = %client_config.base_url, "using bearer token");
            let client = WebexClient::with_config(client_config, token).context("build client")?;
            return Ok(Self {
                client,
                stored: None,
            });
        }

        let Some(integration_config) = &config.integration else {
            bail!(
                "no access token: pass --token, set WEBEX_ACCESS_TOKEN or configure an integration"
            );
        };

        let (provider, file) = integration_tokens(integration_config, config.base_url.as_deref())?;
        let client = WebexClient::with_token_provider(client_config, provider.clone())
            .context("build client")?;
        Ok(Self {
            client,
            stored: Some((provider, file)),
        })
    }

    /// Save tokens, then hand back the command result.
    ///
    /// A failed save is logged; it never replaces the command outcome.
    pub fn finish<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(err) = self.persist() {
            warn!(error = %format!("{err:#}"), "failed to save refreshed tokens");
        }
        result
    }

    /// Write refreshed integration tokens back to their file.
    pub fn persist(&self) -> Result<()> {
        let Some((provider, file)) = &self.stored else {
            return Ok(());
        };
        if let Some(data) = provider.manager().token_data() {
            file.save(&data)
                .with_context(|| format!("save tokens to {}", file.path().display()))?;
            debug!(path = %file.path().display(), "tokens saved");
        }
        Ok(())
    }
}

fn integration_tokens(
    settings: &IntegrationConfig,
    base_url: Option<&str>,
) -> Result<(Arc<IntegrationTokens>, TokenFile)> {
    let mut integration = Integration::new(
        settings.client_id.clone(),
        settings.client_secret.clone(),
        settings.redirect_uri.clone(),
        settings.scopes.clone(),
    )
    .context("integration settings")?;
    if let Some(base_url) = base_url {
        integration = integration.with_base_url(base_url).context("integration base url")?;
    }

    let file = TokenFile::new(&settings.token_file);
    let data = file.load().ok_or_else(|| {
        anyhow!(
            "no stored tokens in {}; complete the OAuth grant first",
            file.path().display()
        )
    })?;
    info!(path = %file.path().display(), "loaded integration tokens");

    let provider = IntegrationTokens::with_manager(integration, TokenManager::with_data(data));
    Ok((Arc::new(provider), file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_rejected() {
        let err = Session::connect(&CliConfig::default()).err().expect("connect should fail");
        assert!(err.to_string().contains("no access token"));
    }

    #[test]
    fn test_bearer_token_uses_base_url() {
        let config = CliConfig {
            access_token: Some("abc".to_string()),
            base_url: Some("http://127.0.0.1:9/v1".to_string()),
            ..CliConfig::default()
        };
        let session = Session::connect(&config).unwrap();
        assert_eq!(session.client.base_url().as_str(), "http://127.0.0.1:9/v1/");
        assert!(session.persist().is_ok());
    }

    #[test]
    fn test_failed_token_save_keeps_command_result() {
        use webex_sdk::{TokenData, Tokens};

        let dir = std::env::temp_dir().join(format!("webex-cli-session-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let token_file = TokenFile::new(dir.join("tokens.json"));
        let data = TokenData {
            tokens: Tokens {
                access_token: "access".to_string(),
                expires_in: None,
                refresh_token: Some("refresh".to_string()),
                refresh_token_expires_in: None,
            },
            expires_at: None,
            refresh_expires_at: None,
        };
        token_file.save(&data).unwrap();

        let config = CliConfig {
            integration: Some(IntegrationConfig {
                client_id: "cid".to_string(),
                client_secret: "secret".to_string(),
                redirect_uri: "http://localhost:6001/redirect".to_string(),
                scopes: Vec::new(),
                token_file: token_file.path().to_path_buf(),
            }),
            ..CliConfig::default()
        };
        let session = Session::connect(&config).unwrap();

        // a plain file where the token directory was makes every save fail
        std::fs::remove_dir_all(&dir).unwrap();
        std::fs::write(&dir, "not a directory").unwrap();
        assert!(session.persist().is_err());

        assert_eq!(session.finish(Ok(42)).unwrap(), 42);
        let err = session.finish::<()>(Err(anyhow!("api call failed"))).unwrap_err();
        assert_eq!(err.to_string(), "api call failed");

        std::fs::remove_file(&dir).unwrap();
    }

    #[test]
    fn test_integration_without_token_file_rejected() {
        let config = CliConfig {
            integration: Some(IntegrationConfig {
                client_id: "cid".to_string(),
                client_secret: "secret".to_string(),
                redirect_uri: "http://localhost:6001/redirect".to_string(),
                scopes: vec!["spark:people_read".to_string()],
                token_file: std::env::temp_dir().join("webex-cli-missing-tokens.json"),
            }),
            ..CliConfig::default()
        };
        let err = Session::connect(&config).err().expect("connect should fail");
        assert!(err.to_string().contains("no stored tokens"));
    }
}
