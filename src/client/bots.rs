//! Bot lifecycle endpoints

use crate::client::{CtgClient, Params, RawResponse};
use crate::error::Result;
use rust_decimal::Decimal;
use std::fmt;

/// Bot activity filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotStatus {
    Enabled,
    Disabled,
}

impl fmt::Display for BotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BotStatus::Enabled => "enabled",
            BotStatus::Disabled => "disabled",
        })
    }
}

/// Trade direction of a bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BotStrategy {
    #[default]
    Long,
    Short,
}

impl fmt::Display for BotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BotStrategy::Long => "long",
            BotStrategy::Short => "short",
        })
    }
}

/// Filters for `bot/all`
#[derive(Debug, Clone, Default)]
pub struct BotListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub status: Option<BotStatus>,
}

impl BotListParams {
    pub fn to_params(&self) -> Params {
        Params::new()
            .push_opt("limit", self.limit)
            .push_opt("offset", self.offset)
            .push_opt("status", self.status)
    }
}

/// Settings for a new bot
#[derive(Debug, Clone)]
pub struct NewBot {
    pub name: String,
    pub pairs: Vec<String>,
    pub strategy: BotStrategy,
    pub base_order_volume: Decimal,
    /// Take profit, percent
    pub take_profit: Decimal,
    pub safety_order_volume: Option<Decimal>,
    pub max_safety_orders: Option<u32>,
}

impl NewBot {
    pub fn to_params(&self) -> Params {
        Params::new()
            .push("name", &self.name)
            .push("pairs", self.pairs.join(","))
            .push("strategy", self.strategy)
            .push("baseOrderVolume", self.base_order_volume)
            .push("takeProfit", self.take_profit)
            .push_opt("safetyOrderVolume", self.safety_order_volume)
            .push_opt("maxSafetyOrders", self.max_safety_orders)
    }
}

/// Partial update of an existing bot; unset fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct BotUpdate {
    pub name: Option<String>,
    pub pairs: Option<Vec<String>>,
    pub base_order_volume: Option<Decimal>,
    pub take_profit: Option<Decimal>,
    pub safety_order_volume: Option<Decimal>,
    pub max_safety_orders: Option<u32>,
}

impl BotUpdate {
    pub fn to_params(&self) -> Params {
        Params::new()
            .push_opt("name", self.name.as_ref())
            .push_opt("pairs", self.pairs.as_ref().map(|p| p.join(",")))
            .push_opt("baseOrderVolume", self.base_order_volume)
            .push_opt("takeProfit", self.take_profit)
            .push_opt("safetyOrderVolume", self.safety_order_volume)
            .push_opt("maxSafetyOrders", self.max_safety_orders)
    }
}

fn bot_id(bot_id: u64) -> Params {
    Params::new().push("botId", bot_id)
}

impl CtgClient {
    /// List bots
    pub async fn list_bots(&self, params: &BotListParams) -> Result<RawResponse> {
        self.get("bot/all", params.to_params()).await
    }

    /// Get a single bot
    pub async fn bot_info(&self, id: u64) -> Result<RawResponse> {
        self.get("bot/info", bot_id(id)).await
    }

    pub async fn create_bot(&self, bot: &NewBot) -> Result<RawResponse> {
        self.post("bot/create", Params::new(), Some(bot.to_params()))
            .await
    }

    pub async fn update_bot(&self, id: u64, update: &BotUpdate) -> Result<RawResponse> {
        self.post("bot/update", bot_id(id), Some(update.to_params()))
            .await
    }

    pub async fn enable_bot(&self, id: u64) -> Result<RawResponse> {
        self.post("bot/enable", bot_id(id), None).await
    }

    pub async fn disable_bot(&self, id: u64) -> Result<RawResponse> {
        self.post("bot/disable", bot_id(id), None).await
    }

    pub async fn delete_bot(&self, id: u64) -> Result<RawResponse> {
        self.post("bot/delete", bot_id(id), None).await
    }

    /// Open a deal immediately, optionally on a specific pair
    pub async fn start_deal(&self, id: u64, pair: Option<&str>) -> Result<RawResponse> {
        let body = pair.map(|p| Params::new().push("pair", p));
        self.post("bot/startDeal", bot_id(id), body).await
    }
}
