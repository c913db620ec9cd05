use reqwest::Error;
use thiserror::Error;

/*----- */
// Client errors
/*----- */
/// Transport and protocol level failures shared by every REST client in
/// this crate. Exchange specific failures wrap these where needed.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("error deserialising JSON: {error} for payload: {payload}")]
    Deserialise {
        error: serde_json::Error,
        payload: String,
    },

    #[error("error serialising query string: {0}")]
    UrlEncode(#[from] serde_urlencoded::ser::Error),

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("HTTP request timed out: {0}")]
    HttpTimeout(reqwest::Error),

    #[error("HTTP response (status={0}) error: {1}")]
    HttpResponse(reqwest::StatusCode, String),

    #[error("unauthorised: {0}")]
    Unauthorised(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: Error) -> Self {
        match error {
            error if error.is_timeout() => ClientError::HttpTimeout(error),
            error => ClientError::Http(error),
        }
    }
}
