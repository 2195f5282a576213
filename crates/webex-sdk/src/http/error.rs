/*
[INPUT]:  Error sources (HTTP transport, Webex error bodies, serialization, auth)
[OUTPUT]: Structured error types with server context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// Header Webex uses to echo the tracking id of a failed request
const TRACKING_ID_RESPONSE_HEADER: &str = "trackingid";

/// Main error type for the Webex SDK
#[derive(Error, Debug)]
pub enum WebexError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-2xx response
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        tracking_id: Option<String>,
        errors: Vec<String>,
    },

    /// Rate limit still in effect after all retries
    #[error("Rate limit exceeded, retry after {retry_after}s")]
    RateLimit { retry_after: u64 },

    /// Authentication failed or no usable token
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error body returned by Webex on failed requests
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
    #[serde(rename = "trackingId")]
    tracking_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    description: Option<String>,
}

impl WebexError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            WebexError::Http(_) | WebexError::RateLimit { .. } => true,
            WebexError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Get retry delay in seconds (if the server told us one)
    pub fn retry_delay(&self) -> Option<u64> {
        match self {
            WebexError::RateLimit { retry_after } => Some(*retry_after),
            _ => None,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            WebexError::Authentication { .. } => true,
            WebexError::Api { status, .. } => *status == 401,
            _ => false,
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            WebexError::Api { status, .. } => Some(*status),
            WebexError::RateLimit { .. } => Some(StatusCode::TOO_MANY_REQUESTS.as_u16()),
            WebexError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        WebexError::Api {
            status: status.as_u16(),
            message: message.into(),
            tracking_id: None,
            errors: Vec::new(),
        }
    }

    /// Build an API error from a failed response, passing the server error body through
    pub(crate) async fn from_response(response: Response) -> Self {
        let status = response.status();
        let header_tracking_id = response
            .headers()
            .get(TRACKING_ID_RESPONSE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => return WebexError::Http(err),
        };

        Self::from_body(status, &text, header_tracking_id)
    }

    fn from_body(status: StatusCode, text: &str, header_tracking_id: Option<String>) -> Self {
        match serde_json::from_str::<ErrorBody>(text) {
            Ok(body) => {
                let errors: Vec<String> = body
                    .errors
                    .into_iter()
                    .filter_map(|detail| detail.description)
                    .collect();
                let message = body
                    .message
                    .or_else(|| errors.first().cloned())
                    .unwrap_or_else(|| status_text(status));
                WebexError::Api {
                    status: status.as_u16(),
                    message,
                    tracking_id: body.tracking_id.or(header_tracking_id),
                    errors,
                }
            }
            Err(_) => {
                let trimmed = text.trim();
                let message = if trimmed.is_empty() {
                    status_text(status)
                } else {
                    trimmed.to_string()
                };
                WebexError::Api {
                    status: status.as_u16(),
                    message,
                    tracking_id: header_tracking_id,
                    errors: Vec::new(),
                }
            }
        }
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

/// Result type alias for Webex operations
pub type Result<T> = std::result::Result<T, WebexError>;
