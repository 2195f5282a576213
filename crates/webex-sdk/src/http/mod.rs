/*
[INPUT]:  HTTP client configuration and Webex endpoints
[OUTPUT]: HTTP responses, typed API results and item streams
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding session behavior or changing pagination
*/

pub mod client;
pub mod error;
pub mod pagination;
pub mod params;

pub use error::{Result, WebexError};
pub use pagination::{ItemStream, parse_next_link};
pub use params::{QueryPairs, query_pairs};

pub use client::{ClientConfig, RetryConfig, WebexClient};
