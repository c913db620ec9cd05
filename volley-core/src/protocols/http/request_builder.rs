use crate::error::ClientError;

use super::rest_request::RestRequest;

/*----- */
// Authenticator
/*----- */
/// Produces request signatures for one exchange's private API. Credentials
/// live in the implementor and are injected at construction, nothing in
/// this crate reads them from the process environment.
pub trait Authenticator {
    fn api_key(&self) -> &str;

    fn generate_signature(&self, payload: &str) -> String;
}

/*----- */
// Exchange request builder
/*----- */
/// Finalises a [`RestRequest`] into a signed [`reqwest::Request`] the way
/// the target exchange expects: query layout, auth headers and signature
/// placement all differ per venue.
pub trait ExchangeRequestBuilder {
    fn build_signed_request<Request>(
        &self,
        builder: reqwest::RequestBuilder,
        request: Request,
    ) -> Result<reqwest::Request, ClientError>
    where
        Request: RestRequest;
}
