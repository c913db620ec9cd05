use hmac::Mac;

use crate::error::ClientError;
use crate::exchange::{Credentials, HmacSha256};
use crate::protocols::http::request_builder::{Authenticator, ExchangeRequestBuilder};
use crate::protocols::http::rest_request::RestRequest;

/*----- */
// Binance API authentication
/*----- */
#[derive(Debug)]
pub struct BinanceAuth {
    credentials: Credentials,
}

impl BinanceAuth {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl Authenticator for BinanceAuth {
    fn api_key(&self) -> &str {
        &self.credentials.api_key
    }

    #[inline]
    fn generate_signature(&self, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.credentials.api_secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

/*----- */
// Binance request builder
/*----- */
#[derive(Debug)]
pub struct BinanceRequestBuilder {
    auth: BinanceAuth,
}

impl BinanceRequestBuilder {
    pub fn new(auth: BinanceAuth) -> Self {
        Self { auth }
    }
}

impl ExchangeRequestBuilder for BinanceRequestBuilder {
    fn build_signed_request<Request>(
        &self,
        builder: reqwest::RequestBuilder,
        request: Request,
    ) -> Result<reqwest::Request, ClientError>
    where
        Request: RestRequest,
    {
        let mut builder = builder.header("X-MBX-APIKEY", self.auth.api_key());

        // Binance verifies the signature against the query string it
        // receives minus the signature param itself, so sign the encoded
        // params and append the signature last
        if let Some(query_params) = request.query_params() {
            let query = serde_urlencoded::to_string(query_params)?;
            let signature = self.auth.generate_signature(&query);

            builder = builder
                .query(query_params)
                .query(&[("signature", signature.as_str())]);
        }

        Ok(builder.build()?)
    }
}

/*----- */
// Tests
/*----- */
#[cfg(test)]
mod test {
    use super::*;

    // Key pair and expected signature from the Binance REST API docs,
    // SIGNED endpoint example 1.
    const DOCS_API_KEY: &str = "vmPUZE6mv9SD5VNHk4HlWFsOr6aKE2zvsw0MuIgwCIPy6utIco14y7Ju91duEh8A";
    const DOCS_API_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";

    fn docs_auth() -> BinanceAuth {
        BinanceAuth::new(Credentials {
            api_key: DOCS_API_KEY.to_owned(),
            api_secret: DOCS_API_SECRET.to_owned(),
        })
    }

    #[test]
    fn test_signature_matches_the_documented_example() {
        let payload = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";

        let signature = docs_auth().generate_signature(payload);

        assert_eq!(
            signature,
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn test_signature_changes_with_the_payload() {
        let auth = docs_auth();
        assert_ne!(
            auth.generate_signature("symbol=LTCBTC"),
            auth.generate_signature("symbol=BTCUSDT")
        );
    }
}
