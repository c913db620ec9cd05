use std::borrow::Cow;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Default duration before an HTTP request is timed out.
pub const DEFAULT_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/*----- */
// Rest request
/*----- */
/// One REST endpoint: where it lives, how it is called and what comes back.
/// The query parameters carry everything the endpoint needs, request bodies
/// are not used by the endpoints this crate talks to.
pub trait RestRequest {
    /// Expected response type if this request is successful.
    type Response: DeserializeOwned;

    /// Serialisable query parameters type.
    type QueryParams: Serialize;

    /// Additional [`Url`](reqwest::Url) path to the resource.
    fn path(&self) -> Cow<'static, str>;

    /// HTTP [`Method`](reqwest::Method) of this request.
    fn method() -> reqwest::Method;

    /// Optional query parameters for this request.
    fn query_params(&self) -> Option<&Self::QueryParams> {
        None
    }

    /// Duration before this request is timed out.
    fn timeout() -> Duration {
        DEFAULT_HTTP_REQUEST_TIMEOUT
    }
}
