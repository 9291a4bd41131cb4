//! Authenticated request dispatch
//!
//! Turns `(method, path, query, body)` into a signed HTTP call and returns
//! exactly one outcome: the raw response, or a transport error.

use crate::client::auth::{Credentials, API_KEY_HEADER, NONCE_HEADER, SIGNATURE_HEADER};
use crate::error::{ClientError, Result};
use reqwest::{Client, StatusCode, Url};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Form-encoded POST payload
pub type Form = BTreeMap<String, String>;

/// HTTP methods the API accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            _ => Err(ClientError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// Authentication header values for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub signature: String,
    pub api_key: String,
    pub nonce: u64,
}

/// A request with its URL and signature fixed, ready to send
#[derive(Debug, Clone)]
pub struct SignedRequest<'a> {
    pub method: Method,
    pub url: String,
    pub headers: AuthHeaders,
    /// Always `None` for GET
    pub body: Option<&'a Form>,
}

/// Status and unmodified body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn into_body(self) -> String {
        self.body
    }
}

/// Signs and sends requests against one API base URL
#[derive(Debug, Clone)]
pub struct Dispatcher {
    http: Client,
    base_url: String,
    credentials: Arc<Credentials>,
}

impl Dispatcher {
    /// Create a dispatcher. Fails before any network activity if the base
    /// URL is unusable.
    pub fn new(base_url: &str, credentials: Credentials, timeout: Duration) -> Result<Self> {
        let mut base = base_url.trim().to_string();
        if base.is_empty() {
            return Err(ClientError::Config("API base URL is empty".into()));
        }
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&base)
            .map_err(|e| ClientError::Config(format!("Invalid API base URL {}: {}", base, e)))?;

        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base,
            credentials: Arc::new(credentials),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Target URL; an absent query leaves a bare trailing `?`
    pub fn url(&self, path: &str, query: Option<&str>) -> String {
        format!("{}{}?{}", self.base_url, path, query.unwrap_or_default())
    }

    /// Sign a request for the given nonce without sending it
    pub fn sign_request<'a>(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        body: Option<&'a Form>,
        nonce: u64,
    ) -> SignedRequest<'a> {
        let signature = self.credentials.sign(path, query, nonce);

        SignedRequest {
            method,
            url: self.url(path, query),
            headers: AuthHeaders {
                signature,
                api_key: self.credentials.api_key().to_string(),
                nonce,
            },
            body: match method {
                Method::Get => None,
                Method::Post => body,
            },
        }
    }

    /// Send a signed request with a fresh nonce.
    ///
    /// Any completed exchange resolves to `Ok`, whatever its status. GET
    /// requests ignore `body`.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        body: Option<&Form>,
    ) -> Result<RawResponse> {
        let request = self.sign_request(method, path, query, body, now_millis());
        self.execute(request).await
    }

    /// Like [`send`](Self::send), with the method given as text
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        query: Option<&str>,
        body: Option<&Form>,
    ) -> Result<RawResponse> {
        let method: Method = method.parse()?;
        self.send(method, path, query, body).await
    }

    async fn execute(&self, request: SignedRequest<'_>) -> Result<RawResponse> {
        debug!(
            "{} {} (nonce {})",
            request.method, request.url, request.headers.nonce
        );

        let empty = Form::new();
        let builder = match request.method {
            Method::Get => self.http.get(&request.url),
            Method::Post => self
                .http
                .post(&request.url)
                .form(request.body.unwrap_or(&empty)),
        };

        let response = builder
            .header(SIGNATURE_HEADER, &request.headers.signature)
            .header(API_KEY_HEADER, &request.headers.api_key)
            .header(NONCE_HEADER, request.headers.nonce.to_string())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            request.url,
            status,
            body.len()
        );

        Ok(RawResponse { status, body })
    }
}

/// Milliseconds since the Unix epoch
pub fn now_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
}
