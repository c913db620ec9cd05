use thiserror::Error;

use crate::model::request::{OrderRequest, RawOrderRequest};
use crate::model::Side;

/*----- */
// Validation errors
/*----- */
/// One variant per rule, declared in the order the rules run. Each carries
/// the offending raw value so callers can report exactly what was rejected.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("invalid volume: {0:?} is not a number")]
    InvalidVolume(String),

    #[error("invalid order count: {0:?} is not a positive whole number")]
    InvalidOrderCount(String),

    #[error("invalid amount difference: {0:?} is not a number")]
    InvalidAmountDif(String),

    #[error("invalid side: {0:?} is neither BUY nor SELL")]
    InvalidSide(String),

    #[error("invalid minimum price: {0:?} is not a number")]
    InvalidMinPrice(String),

    #[error("invalid maximum price: {0:?} is not a number")]
    InvalidMaxPrice(String),

    #[error("min price {min} greater than max price {max}")]
    PriceBoundsInverted { min: f64, max: f64 },
}

impl ValidationError {
    /// Name of the sheet field the rule rejected.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidVolume(_) => "volume",
            ValidationError::InvalidOrderCount(_) => "number",
            ValidationError::InvalidAmountDif(_) => "amountDif",
            ValidationError::InvalidSide(_) => "side",
            ValidationError::InvalidMinPrice(_) => "priceMin",
            ValidationError::InvalidMaxPrice(_) => "priceMax",
            ValidationError::PriceBoundsInverted { .. } => "priceMin/priceMax",
        }
    }
}

/*----- */
// Validator
/*----- */
/// Parses a real number, rejecting the non-finite values `f64::from_str`
/// would otherwise let through. "NaN" and "inf" are valid float literals
/// but nonsensical as volumes or prices, and a NaN price bound would slip
/// past the ordering check below only to panic the uniform price draw.
fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Converts a raw request into a typed one, applying the rules in a fixed
/// order and stopping at the first failure. A rejected request leaves no
/// partially converted state behind: callers get the full typed record or
/// nothing.
///
/// An unrecognised side is a hard failure, as is an order count below one,
/// which would otherwise divide by zero when the volume is split.
pub fn validate(raw: RawOrderRequest) -> Result<OrderRequest, ValidationError> {
    let volume = parse_finite(&raw.volume)
        .ok_or_else(|| ValidationError::InvalidVolume(raw.volume.clone()))?;

    let number = raw
        .number
        .parse::<u32>()
        .ok()
        .filter(|number| *number > 0)
        .ok_or_else(|| ValidationError::InvalidOrderCount(raw.number.clone()))?;

    let amount_dif = parse_finite(&raw.amount_dif)
        .ok_or_else(|| ValidationError::InvalidAmountDif(raw.amount_dif.clone()))?;

    let side = match raw.side.as_str() {
        "BUY" => Side::Buy,
        "SELL" => Side::Sell,
        _ => return Err(ValidationError::InvalidSide(raw.side.clone())),
    };

    let price_min = parse_finite(&raw.price_min)
        .ok_or_else(|| ValidationError::InvalidMinPrice(raw.price_min.clone()))?;

    let price_max = parse_finite(&raw.price_max)
        .ok_or_else(|| ValidationError::InvalidMaxPrice(raw.price_max.clone()))?;

    if price_min > price_max {
        return Err(ValidationError::PriceBoundsInverted {
            min: price_min,
            max: price_max,
        });
    }

    Ok(OrderRequest {
        volume,
        number,
        amount_dif,
        side,
        price_min,
        price_max,
        trading_pair: raw.trading_pair,
    })
}

/*----- */
// Tests
/*----- */
