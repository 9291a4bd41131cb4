//! CTG trading-bot management API client
//!
//! Authenticated access to bot lifecycle, deal management and analytics
//! endpoints. Every call is signed with HMAC-SHA256 over the request path,
//! a millisecond nonce and the query string.
//!
//! ## Architecture
//!
//! ```text
//! CtgClient (endpoint catalog) → Dispatcher (sign + send) → HTTPS
//!                                     ↑
//!                          Credentials (HMAC signing)
//! ```
//!
//! Response bodies are returned exactly as the service sent them.

pub mod client;
pub mod config;
pub mod error;

pub use client::{CtgClient, Dispatcher, Method, RawResponse};
pub use error::{ClientError, Result};

#[cfg(test)]
mod error_tests;
