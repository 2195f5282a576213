/*
[INPUT]:  Bearer tokens, integration credentials and token files
[OUTPUT]: Bearer tokens for requests, OAuth grants and refresh
[POS]:    Auth layer - handles Webex API authentication
[UPDATE]: When auth flow or token sources change
*/

pub mod integration;
pub mod provider;
pub mod token_file;
pub mod tokens;

pub use integration::Integration;
pub use provider::{IntegrationTokens, StaticToken, TokenProvider};
pub use token_file::TokenFile;
pub use tokens::{TokenData, TokenManager, Tokens};
