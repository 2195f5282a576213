/*
[INPUT]:  Integration client id/secret, redirect URI, scopes, auth codes
[OUTPUT]: Authorize URLs and OAuth token grants
[POS]:    Auth layer - Webex integration (OAuth 2.0 authorization code) flow
[UPDATE]: When grant types or token endpoint parameters change
*/

use reqwest::{Client, Url};
use serde::Serialize;
use tracing::debug;

use crate::auth::Tokens;
use crate::http::client::DEFAULT_BASE_URL;
use crate::http::{Result, WebexError};

/// Form body for `POST /access_token`
#[derive(Serialize)]
struct GrantRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_uri: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
}

/// A Webex integration registered on developer.webex.com
#[derive(Clone)]
pub struct Integration {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    scopes: Vec<String>,
    base_url: Url,
    http_client: Client,
}

impl std::fmt::Debug for Integration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Integration")
            .field("client_id", &self.client_id)
            .field("redirect_uri", &self.redirect_uri)
            .field("scopes", &self.scopes)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl Integration {
    /// Create an integration against the public Webex API
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        scopes: Vec<String>,
    ) -> Result<Self> {
        Ok(Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scopes,
            base_url: Url::parse(DEFAULT_BASE_URL)?,
            http_client: Client::new(),
        })
    }

    /// Point the integration at a different API root (tests, FedRAMP)
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        self.base_url = Url::parse(&base_url)?;
        Ok(self)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// URL the user has to open to grant access
    ///
    /// GET /authorize?client_id=..&response_type=code&redirect_uri=..&scope=..&state=..
    pub fn auth_url(&self, state: &str) -> Result<Url> {
        let mut url = self.base_url.join("authorize")?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("scope", &self.scopes.join(" "))
            .append_pair("state", state);
        Ok(url)
    }

    /// Exchange an authorization code for tokens
    ///
    /// POST /access_token (grant_type=authorization_code)
    pub async fn tokens_from_code(&self, code: &str) -> Result<Tokens> {
        let request = GrantRequest {
            grant_type: "authorization_code",
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            code: Some(code),
            redirect_uri: Some(&self.redirect_uri),
            refresh_token: None,
        };
        self.grant(&request).await
    }

    /// Get a new access token from a refresh token
    ///
    /// POST /access_token (grant_type=refresh_token)
    pub async fn refresh(&self, refresh_token: &str) -> Result<Tokens> {
        let request = GrantRequest {
            grant_type: "refresh_token",
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            code: None,
            redirect_uri: None,
            refresh_token: Some(refresh_token),
        };
        self.grant(&request).await
    }

    async fn grant(&self, request: &GrantRequest<'_>) -> Result<Tokens> {
        let url = self.base_url.join("access_token")?;
        debug!(grant_type = request.grant_type, "requesting webex access token");

        let response = self.http_client.post(url).form(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = match WebexError::from_response(response).await {
                WebexError::Api { message, .. } => message,
                other => other.to_string(),
            };
            return Err(WebexError::Authentication {
                message: format!("token grant failed with status {}: {message}", status.as_u16()),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn integration(base: &str) -> Integration {
        Integration::new(
            "client-id",
            "client-secret",
            "http://localhost:6001/redirect",
            vec!["spark:people_read".to_string(), "spark:rooms_read".to_string()],
        )
        .unwrap()
        .with_base_url(base)
        .unwrap()
    }

    #[test]
    fn test_auth_url() {
        let url = integration("https://webexapis.com/v1").auth_url("xyz").unwrap();
        assert_eq!(url.path(), "/v1/authorize");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("client_id".to_string(), "client-id".to_string())));
        assert!(pairs.contains(&("response_type".to_string(), "code".to_string())));
        assert!(pairs.contains(&(
            "scope".to_string(),
            "spark:people_read spark:rooms_read".to_string()
        )));
        assert!(pairs.contains(&("state".to_string(), "xyz".to_string())));
    }

    #[tokio::test]
    async fn test_refresh_posts_form_grant() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/access_token"))
            .and(body_string_contains("grant_type=refresh_token"))
            .and(body_string_contains("refresh_token=old-refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "new-access",
                "expires_in": 1209599,
                "refresh_token": "new-refresh",
                "refresh_token_expires_in": 7775999
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tokens = integration(&server.uri()).refresh("old-refresh").await.unwrap();
        assert_eq!(tokens.access_token, "new-access");
        assert_eq!(tokens.refresh_token.as_deref(), Some("new-refresh"));
        assert_eq!(tokens.expires_in, Some(1_209_599));
    }

    #[tokio::test]
    async fn test_tokens_from_code_failure_is_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/access_token"))
            .and(body_string_contains("grant_type=authorization_code"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "message": "Invalid authorization code",
                "trackingId": "ROUTER_1"
            })))
            .mount(&server)
            .await;

        let err = integration(&server.uri())
            .tokens_from_code("bad")
            .await
            .unwrap_err();
        assert!(err.is_auth_error());
        assert!(err.to_string().contains("Invalid authorization code"));
    }
}
