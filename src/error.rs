//! Error types for the CTG client

use thiserror::Error;

/// Errors produced by the client
///
/// Non-2xx responses are not errors: they come back as a
/// [`RawResponse`](crate::client::RawResponse) for the caller to interpret.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Missing or invalid configuration (credentials, base URL, config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP method other than GET or POST
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// Network, DNS, TLS, timeout or body read failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Query or form parameters could not be encoded
    #[error("Parameter encoding error: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

impl From<config::ConfigError> for ClientError {
    fn from(e: config::ConfigError) -> Self {
        ClientError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
