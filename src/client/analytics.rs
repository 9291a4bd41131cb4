//! Profit, deal statistics and account endpoints

use crate::client::{CtgClient, Params, RawResponse};
use crate::error::Result;
use chrono::NaiveDate;

/// Range and bot filter for statistics; dates render as `YYYY-MM-DD`
#[derive(Debug, Clone, Default)]
pub struct StatsParams {
    pub bot_id: Option<u64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl StatsParams {
    pub fn to_params(&self) -> Params {
        Params::new()
            .push_opt("botId", self.bot_id)
            .push_opt("from", self.from)
            .push_opt("to", self.to)
    }
}

impl CtgClient {
    pub async fn profit_stats(&self, params: &StatsParams) -> Result<RawResponse> {
        self.get("stats/profit", params.to_params()).await
    }

    pub async fn deal_stats(&self, params: &StatsParams) -> Result<RawResponse> {
        self.get("stats/deals", params.to_params()).await
    }

    /// Exchange account balances
    pub async fn account_balances(&self) -> Result<RawResponse> {
        self.get("account/balances", Params::new()).await
    }
}
