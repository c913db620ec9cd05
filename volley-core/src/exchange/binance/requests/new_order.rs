use std::borrow::Cow;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::model::order::LimitOrder;
use crate::protocols::http::rest_request::RestRequest;
use crate::shared::de::de_str;

use super::{BinanceFill, BinanceOrderStatus, BinanceSide, BinanceTimeInForce};

/*----- */
// Binance new order
/*----- */
/// POST /api/v3/order. Every field below is mandatory for a LIMIT order.
/// The struct doubles as its own query params and serialises in declaration
/// order, which is kept alphabetical to match the documented query layout.
#[derive(Debug, Clone, Serialize)]
pub struct BinanceNewOrder {
    pub price: f64,
    pub quantity: f64,
    pub side: BinanceSide,
    pub symbol: String,
    #[serde(rename(serialize = "timeInForce"))]
    pub time_in_force: BinanceTimeInForce,
    pub timestamp: i64,
    pub r#type: &'static str,
}

impl BinanceNewOrder {
    pub fn new(order: &LimitOrder) -> Self {
        Self::with_timestamp(order, Utc::now().timestamp_millis())
    }

    pub fn with_timestamp(order: &LimitOrder, timestamp: i64) -> Self {
        Self {
            price: order.price,
            quantity: order.quantity,
            side: BinanceSide::from(order.side),
            symbol: order.symbol.clone(),
            time_in_force: BinanceTimeInForce::from(order.time_in_force),
            timestamp,
            r#type: "LIMIT",
        }
    }
}

impl RestRequest for BinanceNewOrder {
    type Response = BinanceNewOrderResponse;
    type QueryParams = Self;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/v3/order")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::POST
    }

    fn query_params(&self) -> Option<&Self::QueryParams> {
        Some(self)
    }
}

/*----- */
// Binance new order response
/*----- */
// The response shape depends on the account's newOrderRespType and LIMIT
// orders default to FULL. Most specific variant first so untagged
// deserialisation resolves correctly.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BinanceNewOrderResponse {
    Full(BinanceNewOrderResponseFull),
    Result(BinanceNewOrderResponseResult),
    Ack(BinanceNewOrderResponseAck),
}

impl BinanceNewOrderResponse {
    pub fn order_id(&self) -> u64 {
        match self {
            BinanceNewOrderResponse::Full(full) => full.order_id,
            BinanceNewOrderResponse::Result(result) => result.order_id,
            BinanceNewOrderResponse::Ack(ack) => ack.order_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BinanceNewOrderResponseAck {
    pub symbol: String,
    #[serde(alias = "orderId")]
    pub order_id: u64,
    #[serde(alias = "orderListId")]
    pub order_list_id: i64,
    #[serde(alias = "clientOrderId")]
    pub client_order_id: String,
    #[serde(alias = "transactTime")]
    pub transact_time: u64,
}

#[derive(Debug, Deserialize)]
pub struct BinanceNewOrderResponseResult {
    pub symbol: String,
    #[serde(alias = "orderId")]
    pub order_id: u64,
    #[serde(alias = "orderListId")]
    pub order_list_id: i64,
    #[serde(alias = "clientOrderId")]
    pub client_order_id: String,
    #[serde(alias = "transactTime")]
    pub transact_time: u64,
    #[serde(deserialize_with = "de_str")]
    pub price: f64,
    #[serde(alias = "origQty", deserialize_with = "de_str")]
    pub orig_qty: f64,
    #[serde(alias = "executedQty", deserialize_with = "de_str")]
    pub executed_qty: f64,
    #[serde(alias = "cummulativeQuoteQty", deserialize_with = "de_str")]
    pub cummulative_quote_qty: f64,
    pub status: BinanceOrderStatus,
    #[serde(alias = "timeInForce")]
    pub time_in_force: BinanceTimeInForce,
    pub r#type: String,
    pub side: BinanceSide,
    #[serde(alias = "workingTime")]
    pub working_time: u64,
}

#[derive(Debug, Deserialize)]
pub struct BinanceNewOrderResponseFull {
    pub symbol: String,
    #[serde(alias = "orderId")]
    pub order_id: u64,
    #[serde(alias = "orderListId")]
    pub order_list_id: i64,
    #[serde(alias = "clientOrderId")]
    pub client_order_id: String,
    #[serde(alias = "transactTime")]
    pub transact_time: u64,
    #[serde(deserialize_with = "de_str")]
    pub price: f64,
    #[serde(alias = "origQty", deserialize_with = "de_str")]
    pub orig_qty: f64,
    #[serde(alias = "executedQty", deserialize_with = "de_str")]
    pub executed_qty: f64,
    #[serde(alias = "cummulativeQuoteQty", deserialize_with = "de_str")]
    pub cummulative_quote_qty: f64,
    pub status: BinanceOrderStatus,
    #[serde(alias = "timeInForce")]
    pub time_in_force: BinanceTimeInForce,
    pub r#type: String,
    pub side: BinanceSide,
    #[serde(alias = "workingTime")]
    pub working_time: u64,
    pub fills: Vec<BinanceFill>,
}

/*----- */
// Tests
/*----- */
