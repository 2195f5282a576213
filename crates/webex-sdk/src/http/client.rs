/*
[INPUT]:  HTTP configuration (base URL, timeouts, retry policy) and a token provider
[OUTPUT]: Configured session that injects auth, retries 429s and decodes JSON
[POS]:    HTTP layer - core client implementation shared by every child API
[UPDATE]: When adding connection options or changing request/response handling
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::{StaticToken, TokenProvider};
use crate::http::{Result, WebexError};

/// Base URL for the Webex REST API
pub const DEFAULT_BASE_URL: &str = "https://webexapis.com/v1/";

/// Environment variable holding a bearer token for [`WebexClient::from_env`]
pub const ACCESS_TOKEN_ENV: &str = "WEBEX_ACCESS_TOKEN";
/// Environment variable overriding the base URL for [`WebexClient::from_env`]
pub const BASE_URL_ENV: &str = "WEBEX_BASE_URL";

const TRACKING_ID_HEADER: &str = "TrackingID";
const TRACKING_ID_PREFIX: &str = "WEBEX_SDK";

/// Wait used when a 429 response carries no usable Retry-After header
const DEFAULT_RETRY_AFTER_SECS: u64 = 5;

/// Rate limit handling
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retry requests answered with 429
    pub retry_429: bool,
    /// Maximum number of retries for a single request
    pub max_retries: u32,
    /// Upper bound for a single back-off sleep
    pub max_wait: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            retry_429: true,
            max_retries: 5,
            max_wait: Duration::from_secs(60),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub retry: RetryConfig,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            retry: RetryConfig::default(),
            user_agent: concat!("webex-sdk-rust/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Session for the Webex REST API.
///
/// Cheap to clone; clones share the connection pool and token provider, so
/// independent calls can be issued concurrently from clones or from `&self`.
#[derive(Debug, Clone)]
pub struct WebexClient {
    http_client: Client,
    base_url: Url,
    retry: RetryConfig,
    tokens: Arc<dyn TokenProvider>,
}

impl WebexClient {
    /// Create a new client with default configuration and a static bearer token
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::default(), access_token)
    }

    /// Create a new client with custom configuration and a static bearer token
    pub fn with_config(config: ClientConfig, access_token: impl Into<String>) -> Result<Self> {
        Self::with_token_provider(config, Arc::new(StaticToken::new(access_token)))
    }

    /// Create a new client that asks `provider` for a bearer token on every request
    pub fn with_token_provider(
        config: ClientConfig,
        provider: Arc<dyn TokenProvider>,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(&config.base_url)?,
            retry: config.retry,
            tokens: provider,
        })
    }

    /// Create a client from `WEBEX_ACCESS_TOKEN` and optional `WEBEX_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup(ACCESS_TOKEN_ENV)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| WebexError::Config(format!("{ACCESS_TOKEN_ENV} is not set")))?;

        let mut config = ClientConfig::default();
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        Self::with_config(config, token.trim())
    }

    /// Base URL all endpoints are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Token provider used for the Authorization header
    pub fn token_provider(&self) -> &Arc<dyn TokenProvider> {
        &self.tokens
    }

    /// Build full URL for a REST endpoint, e.g. `people/me`
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Build full URL from path segments; ids are percent-encoded
    pub(crate) fn endpoint_segments(&self, segments: &[&str]) -> Result<Url> {
        push_segments(self.base_url.clone(), segments)
    }

    /// Build full URL for an endpoint that lives outside the versioned root (SCIM)
    pub(crate) fn root_endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.api_root().join(path.trim_start_matches('/'))?)
    }

    /// Path-segment variant of [`Self::root_endpoint`]
    pub(crate) fn root_endpoint_segments(&self, segments: &[&str]) -> Result<Url> {
        push_segments(self.api_root(), segments)
    }

    fn api_root(&self) -> Url {
        let mut root = self.base_url.clone();
        if let Some(stripped) = root.path().strip_suffix("v1/").map(str::to_string) {
            root.set_path(&stripped);
        }
        root
    }

    /// Send a request with auth and tracking headers, retrying on 429.
    ///
    /// Non-2xx responses are converted to [`WebexError`].
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: Url,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Response> {
        let mut retries = 0u32;
        loop {
            let token = self.tokens.access_token().await?;
            let tracking_id = format!("{TRACKING_ID_PREFIX}_{}", Uuid::new_v4());

            let mut builder = self
                .http_client
                .request(method.clone(), url.clone())
                .bearer_auth(token)
                .header(TRACKING_ID_HEADER, &tracking_id);
            if !query.is_empty() {
                builder = builder.query(query);
            }
            if let Some(body) = body {
                builder = builder.json(body);
            }

            debug!(
                method = %method,
                url = %url,
                tracking_id = %tracking_id,
                "sending webex request"
            );
            let response = builder.send().await?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after = retry_after_secs(response.headers());
                if self.retry.retry_429 && retries < self.retry.max_retries {
                    retries += 1;
                    let wait = Duration::from_secs(retry_after).min(self.retry.max_wait);
                    warn!(
                        url = %url,
                        tracking_id = %tracking_id,
                        retry_after,
                        attempt = retries,
                        "rate limited, backing off"
                    );
                    tokio::time::sleep(wait).await;
                    continue;
                }
                return Err(WebexError::RateLimit { retry_after });
            }

            if !status.is_success() {
                debug!(
                    status = status.as_u16(),
                    tracking_id = %tracking_id,
                    "webex request failed"
                );
                return Err(WebexError::from_response(response).await);
            }

            return Ok(response);
        }
    }

    /// Send a request and decode the JSON response body into `T`
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<T> {
        let response = self.execute(method, url, query, body).await?;
        decode_json(response).await
    }

    /// Send a request whose response body is ignored (DELETE, 204 replies)
    pub(crate) async fn request_empty(
        &self,
        method: Method,
        url: Url,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<()> {
        self.execute(method, url, query, body).await?;
        Ok(())
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(String, String)],
    ) -> Result<T> {
        self.request_json(Method::GET, url, query, None).await
    }

    pub(crate) async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.request_json(Method::POST, url, &[], Some(&body)).await
    }

    pub(crate) async fn put_json<B, T>(
        &self,
        url: Url,
        query: &[(String, String)],
        body: &B,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.request_json(Method::PUT, url, query, Some(&body)).await
    }

    pub(crate) async fn patch_json<B, T>(&self, url: Url, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.request_json(Method::PATCH, url, &[], Some(&body)).await
    }

    pub(crate) async fn delete(&self, url: Url, query: &[(String, String)]) -> Result<()> {
        self.request_empty(Method::DELETE, url, query, None).await
    }
}

/// Decode a JSON body; an empty body decodes as JSON `null`
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &bytes
    };
    Ok(serde_json::from_slice(body)?)
}

fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

fn push_segments(mut url: Url, segments: &[&str]) -> Result<Url> {
    url.path_segments_mut()
        .map_err(|_| WebexError::Config("base URL cannot carry a path".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn normalize_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(WebexError::Config("base URL must not be empty".to_string()));
    }
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Ok(Url::parse(&with_slash)?)
}
