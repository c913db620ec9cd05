pub mod request_builder;
pub mod requests;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::ClientError;
use crate::exchange::errors::ExecutionError;
use crate::exchange::{Credentials, ExecutionClient, ExecutionId};
use crate::model::order::LimitOrder;
use crate::protocols::http::client::RestClient;
use crate::protocols::http::http_parser::HttpParser;

use request_builder::{BinanceAuth, BinanceRequestBuilder};
use requests::new_order::{BinanceNewOrder, BinanceNewOrderResponse};
use requests::BinanceErrorResponse;

/*----- */
// Convenient types
/*----- */
type BinanceRestClient = RestClient<BinanceParser, BinanceRequestBuilder>;

pub const BINANCE_SPOT_TESTNET_URL: &str = "https://testnet.binance.vision";
pub const BINANCE_SPOT_LIVE_URL: &str = "https://api.binance.com";

/*----- */
// Binance config
/*----- */
#[derive(Debug, Clone)]
pub struct BinanceConfig {
    pub credentials: Credentials,
    pub base_url: String,
}

impl BinanceConfig {
    pub fn testnet(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: BINANCE_SPOT_TESTNET_URL.to_owned(),
        }
    }

    /// Live spot venue. Nothing in the CLI reaches for this, orders go to
    /// the testnet, but the client itself is venue agnostic.
    pub fn live(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: BINANCE_SPOT_LIVE_URL.to_owned(),
        }
    }
}

/*----- */
// Binance execution client
/*----- */
#[derive(Debug)]
pub struct BinanceExecution {
    http_client: BinanceRestClient,
}

impl BinanceExecution {
    pub fn new(config: BinanceConfig) -> Self {
        let http_client = RestClient::new(
            config.base_url,
            BinanceParser,
            BinanceRequestBuilder::new(BinanceAuth::new(config.credentials)),
        );

        Self { http_client }
    }

    /// Client wired to the spot testnet, the venue this tool is meant to
    /// fire orders at.
    pub fn testnet(credentials: Credentials) -> Self {
        Self::new(BinanceConfig::testnet(credentials))
    }
}

#[async_trait]
impl ExecutionClient for BinanceExecution {
    const CLIENT: ExecutionId = ExecutionId::BinanceSpot;

    type NewOrderResponse = BinanceNewOrderResponse;

    async fn open_order(
        &self,
        order: &LimitOrder,
    ) -> Result<Self::NewOrderResponse, ExecutionError> {
        self.http_client.execute(BinanceNewOrder::new(order)).await
    }
}

/*----- */
// Binance response parser
/*----- */
// Rejection codes: -1013 filter failure, -1111 bad precision, -1121 unknown
// symbol, -2010 new order rejected e.g. insufficient balance.
// Credential codes: -1022 bad signature, -2014 / -2015 api key rejected.
const ORDER_REJECTED_CODES: [i32; 4] = [-1013, -1111, -1121, -2010];
const UNAUTHORISED_CODES: [i32; 3] = [-1022, -2014, -2015];

#[derive(Debug)]
pub struct BinanceParser;

impl HttpParser for BinanceParser {
    type ApiError = BinanceErrorResponse;
    type OutputError = ExecutionError;

    fn parse_api_error(&self, status: StatusCode, api_error: Self::ApiError) -> Self::OutputError {
        if ORDER_REJECTED_CODES.contains(&api_error.code) {
            ExecutionError::OrderRejected {
                exchange: "Binance",
                code: api_error.code,
                msg: api_error.msg,
            }
        } else if UNAUTHORISED_CODES.contains(&api_error.code) {
            ExecutionError::Api(ClientError::Unauthorised(format!(
                "code {}: {}",
                api_error.code, api_error.msg
            )))
        } else {
            ExecutionError::Api(ClientError::HttpResponse(
                status,
                format!("code {}: {}", api_error.code, api_error.msg),
            ))
        }
    }
}

/*----- */
// Tests
/*----- */
#[cfg(test)]
mod test {
    use super::*;

    fn parse(payload: &str, status: StatusCode) -> Result<BinanceNewOrderResponse, ExecutionError> {
        BinanceParser.parse::<BinanceNewOrderResponse>(status, payload.as_bytes())
    }

    #[test]
    fn test_config_constructors_target_the_right_venue() {
        let credentials = Credentials {
            api_key: "key".to_owned(),
            api_secret: "secret".to_owned(),
        };

        assert_eq!(
            BinanceConfig::testnet(credentials.clone()).base_url,
            BINANCE_SPOT_TESTNET_URL
        );
        assert_eq!(
            BinanceConfig::live(credentials).base_url,
            BINANCE_SPOT_LIVE_URL
        );
    }

    #[test]
    fn test_parser_maps_rejection_codes_to_order_rejected() {
        let payload = r#"{"code":-2010,"msg":"Account has insufficient balance for requested action."}"#;

        let error = parse(payload, StatusCode::BAD_REQUEST).unwrap_err();

        match error {
            ExecutionError::OrderRejected { code, msg, .. } => {
                assert_eq!(code, -2010);
                assert_eq!(msg, "Account has insufficient balance for requested action.");
            }
            other => panic!("expected OrderRejected, got {other:?}"),
        }
    }

    #[test]
    fn test_parser_maps_unknown_symbol_to_order_rejected() {
        let payload = r#"{"code":-1121,"msg":"Invalid symbol."}"#;
        assert!(matches!(
            parse(payload, StatusCode::BAD_REQUEST).unwrap_err(),
            ExecutionError::OrderRejected { code: -1121, .. }
        ));
    }

    #[test]
    fn test_parser_maps_credential_codes_to_unauthorised() {
        let payload = r#"{"code":-2014,"msg":"API-key format invalid."}"#;
        assert!(matches!(
            parse(payload, StatusCode::UNAUTHORIZED).unwrap_err(),
            ExecutionError::Api(ClientError::Unauthorised(_))
        ));
    }

    #[test]
    fn test_parser_maps_other_codes_to_http_response() {
        let payload = r#"{"code":-1003,"msg":"Too many requests."}"#;

        match parse(payload, StatusCode::TOO_MANY_REQUESTS).unwrap_err() {
            ExecutionError::Api(ClientError::HttpResponse(status, detail)) => {
                assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
                assert_eq!(detail, "code -1003: Too many requests.");
            }
            other => panic!("expected HttpResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_parser_reports_unparseable_payloads() {
        let payload = "<html>teapot</html>";
        assert!(matches!(
            parse(payload, StatusCode::IM_A_TEAPOT).unwrap_err(),
            ExecutionError::Api(ClientError::Deserialise { .. })
        ));
    }
}
