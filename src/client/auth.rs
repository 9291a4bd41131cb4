//! Request signing for the CTG API
//!
//! Every request carries an HMAC-SHA256 signature over
//! `base64(path + "/" + nonce + "/" + query)`, keyed by the API secret.

use crate::error::{ClientError, Result};
use base64::prelude::*;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the hex signature
pub const SIGNATURE_HEADER: &str = "CTG-API-SIGNATURE";
/// Header carrying the API key
pub const API_KEY_HEADER: &str = "CTG-API-KEY";
/// Header carrying the nonce used in the signature
pub const NONCE_HEADER: &str = "CTG-API-NONCE";

/// API key and secret for one client instance
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Create credentials, rejecting blank key or secret
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.trim().is_empty() {
            return Err(ClientError::Config("API key is empty".into()));
        }
        if api_secret.trim().is_empty() {
            return Err(ClientError::Config("API secret is empty".into()));
        }

        Ok(Self {
            api_key,
            api_secret,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Compute the lowercase hex signature for a request.
    ///
    /// An absent query signs as the empty string, matching the URL the
    /// dispatcher builds.
    pub fn sign(&self, path: &str, query: Option<&str>, nonce: u64) -> String {
        let encoded = BASE64_STANDARD.encode(canonical_string(path, query, nonce));

        let mut mac = HmacSha256::new_from_slice(self.api_secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(encoded.as_bytes());

        hex::encode(mac.finalize().into_bytes())
    }
}

/// `path/nonce/query`, the exact text the server re-derives
pub fn canonical_string(path: &str, query: Option<&str>, nonce: u64) -> String {
    format!("{}/{}/{}", path, nonce, query.unwrap_or_default())
}
