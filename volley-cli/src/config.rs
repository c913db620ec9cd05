use thiserror::Error;

use volley_core::exchange::Credentials;

pub const API_KEY_ENV: &str = "BINANCE_TESTNET_API_KEY";
pub const API_SECRET_ENV: &str = "BINANCE_TESTNET_SECRET_KEY";

/*----- */
// Config errors
/*----- */
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),

    #[error("no order sheet path given, usage: volley <order-sheet>")]
    MissingSheetPath,
}

/*----- */
// Environment loading
/*----- */
/// Reads the testnet API key pair from the process environment into an
/// explicit credentials struct. This is the only place the environment is
/// consulted.
pub fn credentials_from_env() -> Result<Credentials, ConfigError> {
    let api_key =
        std::env::var(API_KEY_ENV).map_err(|_| ConfigError::MissingEnv(API_KEY_ENV))?;
    let api_secret =
        std::env::var(API_SECRET_ENV).map_err(|_| ConfigError::MissingEnv(API_SECRET_ENV))?;

    Ok(Credentials {
        api_key,
        api_secret,
    })
}

/// Path of the order sheet, taken as the first CLI argument.
pub fn sheet_path_from_args() -> Result<String, ConfigError> {
    std::env::args().nth(1).ok_or(ConfigError::MissingSheetPath)
}
