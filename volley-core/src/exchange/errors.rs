use thiserror::Error;

use crate::error::ClientError;

/*----- */
// Execution errors
/*----- */
/// What an execution client can report for a single order submission.
/// `OrderRejected` is the exchange refusing this particular order, an
/// unknown symbol, a filter failure or not enough balance. Everything else,
/// transport, authentication or an undecipherable payload, is `Api`.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("{exchange} rejected the order (code {code}): {msg}")]
    OrderRejected {
        exchange: &'static str,
        code: i32,
        msg: String,
    },

    #[error("api error: {0}")]
    Api(#[from] ClientError),
}
