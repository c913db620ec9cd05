use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::error::ClientError;

/*----- */
// Http parser
/*----- */
/// Turns a raw HTTP response into the typed response or a typed error. A
/// payload is first tried as the expected `Response`; failing that it is
/// tried as the exchange's error shape and mapped through
/// [`parse_api_error`](Self::parse_api_error). If neither fits the payload
/// is logged and reported as a deserialisation failure.
pub trait HttpParser {
    type ApiError: DeserializeOwned;
    type OutputError: From<ClientError>;

    fn parse<Response>(
        &self,
        status: StatusCode,
        payload: &[u8],
    ) -> Result<Response, Self::OutputError>
    where
        Response: DeserializeOwned,
    {
        // Attempt to deserialise the expected response
        let parse_response_error = match serde_json::from_slice::<Response>(payload) {
            Ok(response) => return Ok(response),
            Err(serde_error) => serde_error,
        };

        // Attempt to deserialise the API error shape instead
        let parse_api_error_error = match serde_json::from_slice::<Self::ApiError>(payload) {
            Ok(api_error) => return Err(self.parse_api_error(status, api_error)),
            Err(serde_error) => serde_error,
        };

        error!(
            status_code = %status,
            ?parse_response_error,
            ?parse_api_error_error,
            payload = %String::from_utf8_lossy(payload),
            "error deserialising HTTP response"
        );

        Err(Self::OutputError::from(ClientError::Deserialise {
            error: parse_response_error,
            payload: String::from_utf8_lossy(payload).into_owned(),
        }))
    }

    /// Maps the exchange's error shape onto the caller's error type.
    fn parse_api_error(&self, status: StatusCode, api_error: Self::ApiError) -> Self::OutputError;
}
