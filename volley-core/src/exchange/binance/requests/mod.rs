pub mod new_order;

use serde::{Deserialize, Serialize};

use crate::model::{Side, TimeInForce};
use crate::shared::de::de_str;

/*----- */
// Binance order enums
/*----- */
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum BinanceSide {
    BUY,
    SELL,
}

impl From<Side> for BinanceSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Buy => BinanceSide::BUY,
            Side::Sell => BinanceSide::SELL,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum BinanceTimeInForce {
    GTC,
    IOC,
    FOK,
}

impl From<TimeInForce> for BinanceTimeInForce {
    fn from(time_in_force: TimeInForce) -> Self {
        match time_in_force {
            TimeInForce::Gtc => BinanceTimeInForce::GTC,
            TimeInForce::Ioc => BinanceTimeInForce::IOC,
            TimeInForce::Fok => BinanceTimeInForce::FOK,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all(deserialize = "SCREAMING_SNAKE_CASE"))]
pub enum BinanceOrderStatus {
    New,
    PendingNew,
    PartiallyFilled,
    Filled,
    Canceled,
    PendingCancel,
    Rejected,
    Expired,
    ExpiredInMatch,
}

/*----- */
// Binance fill
/*----- */
#[derive(Clone, Debug, Deserialize)]
pub struct BinanceFill {
    #[serde(deserialize_with = "de_str")]
    pub price: f64,
    #[serde(deserialize_with = "de_str")]
    pub qty: f64,
    #[serde(deserialize_with = "de_str")]
    pub commission: f64,
    #[serde(alias = "commissionAsset")]
    pub commission_asset: String,
    #[serde(alias = "tradeId")]
    pub trade_id: u64,
}

/*----- */
// Binance error response
/*----- */
/// Shape every Binance REST error comes back in, e.g.
/// `{"code": -1121, "msg": "Invalid symbol."}`.
#[derive(Clone, Debug, Deserialize)]
pub struct BinanceErrorResponse {
    pub code: i32,
    pub msg: String,
}

/*----- */
// Tests
/*----- */
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_binance_error_response_de() {
        let payload = r#"{"code": -1121, "msg": "Invalid symbol."}"#;

        let error = serde_json::from_str::<BinanceErrorResponse>(payload).unwrap();

        assert_eq!(error.code, -1121);
        assert_eq!(error.msg, "Invalid symbol.");
    }

    #[test]
    fn test_binance_order_status_de() {
        assert_eq!(
            serde_json::from_str::<BinanceOrderStatus>(r#""NEW""#).unwrap(),
            BinanceOrderStatus::New
        );
        assert_eq!(
            serde_json::from_str::<BinanceOrderStatus>(r#""PARTIALLY_FILLED""#).unwrap(),
            BinanceOrderStatus::PartiallyFilled
        );
    }

    #[test]
    fn test_side_conversions() {
        assert_eq!(BinanceSide::from(Side::Buy), BinanceSide::BUY);
        assert_eq!(BinanceSide::from(Side::Sell), BinanceSide::SELL);
        assert_eq!(
            BinanceTimeInForce::from(TimeInForce::Gtc),
            BinanceTimeInForce::GTC
        );
    }
}
