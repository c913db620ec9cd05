mod config;

use tracing::{error, info};

use volley_core::exchange::binance::BinanceExecution;
use volley_core::generate::{submit_batch, ThreadRandomizer};
use volley_core::model::request::RawOrderRequest;
use volley_core::validate::validate;

/*----- */
// Main
/*----- */
#[tokio::main]
async fn main() {
    // Init
    dotenvy::dotenv().ok();
    init_logging();

    let credentials = match config::credentials_from_env() {
        Ok(credentials) => credentials,
        Err(error) => {
            error!(%error, "cannot start without testnet credentials");
            std::process::exit(1);
        }
    };

    let sheet_path = match config::sheet_path_from_args() {
        Ok(sheet_path) => sheet_path,
        Err(error) => {
            error!(%error, "no order sheet to read");
            std::process::exit(1);
        }
    };

    // Read the order sheet
    let sheet = match std::fs::read_to_string(&sheet_path) {
        Ok(sheet) => sheet,
        Err(error) => {
            error!(path = %sheet_path, %error, "could not read the order sheet");
            std::process::exit(1);
        }
    };

    let raw = match RawOrderRequest::from_lines(&sheet) {
        Ok(raw) => raw,
        Err(error) => {
            error!(path = %sheet_path, %error, "rejecting the order sheet");
            std::process::exit(1);
        }
    };

    info!(
        volume = %raw.volume,
        number = %raw.number,
        amount_dif = %raw.amount_dif,
        side = %raw.side,
        price_min = %raw.price_min,
        price_max = %raw.price_max,
        trading_pair = %raw.trading_pair,
        "received order parameters"
    );

    // Validate before anything touches the exchange
    let request = match validate(raw) {
        Ok(request) => request,
        Err(error) => {
            error!(field = error.field(), %error, "the orders can not be created");
            std::process::exit(1);
        }
    };

    info!(
        orders = request.number,
        symbol = %request.trading_pair,
        "creating the orders"
    );

    let client = BinanceExecution::testnet(credentials);
    let outcome = submit_batch(&client, &mut ThreadRandomizer, &request).await;

    println!("{outcome}");

    if !outcome.is_success() {
        std::process::exit(1);
    }
}

/*----- */
// Logging config
/*----- */
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        // Disable colours on release builds
        .with_ansi(cfg!(debug_assertions))
        // Keep stdout for the batch outcome, diagnostics go to stderr
        .with_writer(std::io::stderr)
        // Enable Json formatting
        .json()
        // Install this Tracing subscriber as global default
        .init()
}
