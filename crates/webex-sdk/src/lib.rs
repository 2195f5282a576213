/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Webex SDK crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Typed async client for the Webex REST API.
//!
//! ```no_run
//! use futures_util::TryStreamExt;
//! use webex_sdk::{ListRoomsParams, WebexClient};
//!
//! # async fn run() -> webex_sdk::Result<()> {
//! let client = WebexClient::from_env()?;
//! let me = client.people().me().await?;
//! println!("{:?}", me.display_name);
//!
//! let rooms: Vec<_> = client
//!     .rooms()
//!     .list(&ListRoomsParams::default())?
//!     .try_collect()
//!     .await?;
//! println!("{} rooms", rooms.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    Integration,
    IntegrationTokens,
    StaticToken,
    TokenData,
    TokenFile,
    TokenManager,
    TokenProvider,
    Tokens,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    ItemStream,
    Result,
    RetryConfig,
    WebexClient,
    WebexError,
};

// Re-export all types
pub use types::*;
