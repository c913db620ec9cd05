pub mod binance;
pub mod errors;

use std::fmt::{self, Debug, Display};

use async_trait::async_trait;
use hmac::Hmac;
use sha2::Sha256;

use crate::model::order::LimitOrder;
use errors::ExecutionError;

/*----- */
// Convenient types
/*----- */
pub type HmacSha256 = Hmac<Sha256>;

/*----- */
// Credentials
/*----- */
/// API key pair handed to an execution client at construction. Callers
/// decide where the values come from, typically the process environment of
/// the binary, never this crate.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

// Manual Debug so the secret cannot end up in logs
impl Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/*----- */
// Execution client trait
/*----- */
/// The one capability order generation consumes from an exchange: open a
/// limit order. Implementors own authentication and transport.
#[async_trait]
pub trait ExecutionClient {
    const CLIENT: ExecutionId;

    type NewOrderResponse: Debug + Send;

    async fn open_order(
        &self,
        order: &LimitOrder,
    ) -> Result<Self::NewOrderResponse, ExecutionError>;
}

/*----- */
// Execution id
/*----- */
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ExecutionId {
    BinanceSpot,
}

impl ExecutionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionId::BinanceSpot => "binance_spot",
        }
    }
}

impl Display for ExecutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/*----- */
// Tests
/*----- */
