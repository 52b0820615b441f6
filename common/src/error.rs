//! # Provider Error Taxonomy
//!
//! Every fetch resolves to an explicit `Ok(Address)` or one of these
//! variants. The selector receives failures instead of zero-value records,
//! which lets the other service win the race when one side breaks.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure: connection refused, DNS, TLS, interrupted body.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The service answered with a non-success status other than 404.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The service answered, but knows no address for this CEP.
    #[error("no address found for this CEP")]
    NotFound,

    /// The body arrived but was not the expected JSON shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err)
        } else {
            Self::Request(err)
        }
    }
}
