//! Deal management endpoints

use crate::client::{CtgClient, Params, RawResponse};
use crate::error::Result;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Which deals `deal/all` returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealScope {
    Active,
    Finished,
    All,
}

impl fmt::Display for DealScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DealScope::Active => "active",
            DealScope::Finished => "finished",
            DealScope::All => "all",
        })
    }
}

impl FromStr for DealScope {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(DealScope::Active),
            "finished" => Ok(DealScope::Finished),
            "all" => Ok(DealScope::All),
            other => Err(format!("unknown deal scope: {}", other)),
        }
    }
}

/// Filters for `deal/all`
#[derive(Debug, Clone, Default)]
pub struct DealListParams {
    pub bot_id: Option<u64>,
    pub scope: Option<DealScope>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl DealListParams {
    pub fn to_params(&self) -> Params {
        Params::new()
            .push_opt("botId", self.bot_id)
            .push_opt("scope", self.scope)
            .push_opt("limit", self.limit)
            .push_opt("offset", self.offset)
    }
}

fn deal_id(deal_id: u64) -> Params {
    Params::new().push("dealId", deal_id)
}

impl CtgClient {
    pub async fn list_deals(&self, params: &DealListParams) -> Result<RawResponse> {
        self.get("deal/all", params.to_params()).await
    }

    pub async fn deal_info(&self, id: u64) -> Result<RawResponse> {
        self.get("deal/info", deal_id(id)).await
    }

    /// Stop the bot from placing further orders for this deal
    pub async fn freeze_deal(&self, id: u64) -> Result<RawResponse> {
        self.post("deal/freeze", deal_id(id), None).await
    }

    pub async fn unfreeze_deal(&self, id: u64) -> Result<RawResponse> {
        self.post("deal/unfreeze", deal_id(id), None).await
    }

    /// Close the deal at market price
    pub async fn panic_sell_deal(&self, id: u64) -> Result<RawResponse> {
        self.post("deal/panicSell", deal_id(id), None).await
    }

    /// Cancel the deal's open orders without selling
    pub async fn cancel_deal(&self, id: u64) -> Result<RawResponse> {
        self.post("deal/cancel", deal_id(id), None).await
    }

    pub async fn update_take_profit(&self, id: u64, percent: Decimal) -> Result<RawResponse> {
        let body = Params::new().push("takeProfit", percent);
        self.post("deal/updateTakeProfit", deal_id(id), Some(body))
            .await
    }
}
