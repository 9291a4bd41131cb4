//! CTG API client
//!
//! [`Dispatcher`] signs and sends requests; [`CtgClient`] layers the
//! endpoint catalog (bots, deals, analytics) on top of it.

pub mod analytics;
pub mod auth;
pub mod bots;
pub mod deals;
pub mod dispatch;
pub mod params;


pub use analytics::StatsParams;
pub use auth::Credentials;
pub use bots::{BotListParams, BotStatus, BotStrategy, BotUpdate, NewBot};
pub use deals::{DealListParams, DealScope};
pub use dispatch::{Dispatcher, Form, Method, RawResponse, SignedRequest};
pub use params::Params;

use crate::config::ApiConfig;
use crate::error::Result;

/// Client for the bot, deal and analytics endpoints
#[derive(Debug, Clone)]
pub struct CtgClient {
    dispatcher: Dispatcher,
}

impl CtgClient {
    /// Build a client from API configuration, validating credentials first
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let credentials = config.credentials()?;
        let dispatcher = Dispatcher::new(&config.base_url, credentials, config.timeout())?;
        Ok(Self { dispatcher })
    }

    pub fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    async fn get(&self, path: &str, params: Params) -> Result<RawResponse> {
        let query = params.to_query()?;
        self.dispatcher
            .send(Method::Get, path, Some(&query), None)
            .await
    }

    async fn post(&self, path: &str, params: Params, body: Option<Params>) -> Result<RawResponse> {
        let query = params.to_query()?;
        let form = body.map(Params::into_form);
        self.dispatcher
            .send(Method::Post, path, Some(&query), form.as_ref())
            .await
    }
}
