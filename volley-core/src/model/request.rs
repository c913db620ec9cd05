use thiserror::Error;

use super::Side;

/// Number of fields an order sheet must carry, one per line.
pub const ORDER_SHEET_FIELDS: usize = 7;

/*----- */
// Raw order request
/*----- */
/// The seven order generation parameters exactly as they arrive from the
/// input source, all still strings. Field order matches the sheet layout:
/// volume, number, amountDif, side, priceMin, priceMax, tradingPair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawOrderRequest {
    pub volume: String,
    pub number: String,
    pub amount_dif: String,
    pub side: String,
    pub price_min: String,
    pub price_max: String,
    pub trading_pair: String,
}

impl RawOrderRequest {
    /// Splits newline delimited text into a raw request, one field per line.
    /// Any other line count means the source is invalid or corrupted and
    /// nothing downstream runs.
    pub fn from_lines(input: &str) -> Result<Self, InputError> {
        let lines = input.lines().collect::<Vec<_>>();

        if lines.len() != ORDER_SHEET_FIELDS {
            return Err(InputError::InvalidShape { found: lines.len() });
        }

        Ok(Self {
            volume: lines[0].trim().to_owned(),
            number: lines[1].trim().to_owned(),
            amount_dif: lines[2].trim().to_owned(),
            side: lines[3].trim().to_owned(),
            price_min: lines[4].trim().to_owned(),
            price_max: lines[5].trim().to_owned(),
            trading_pair: lines[6].trim().to_owned(),
        })
    }
}

/*----- */
// Input errors
/*----- */
#[derive(Debug, Error, Eq, PartialEq)]
pub enum InputError {
    #[error("order sheet is invalid or corrupted: expected 7 fields, found {found}")]
    InvalidShape { found: usize },
}

/*----- */
// Validated order request
/*----- */
/// An order generation request with every field converted to its logical
/// type. Only [`crate::validate::validate`] produces one, so holding an
/// `OrderRequest` means every field rule already passed.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderRequest {
    pub volume: f64,
    pub number: u32,
    pub amount_dif: f64,
    pub side: Side,
    pub price_min: f64,
    pub price_max: f64,
    pub trading_pair: String,
}

impl OrderRequest {
    /// Quantity each order receives before jitter is applied.
    pub fn base_share(&self) -> f64 {
        self.volume / f64::from(self.number)
    }
}

/*----- */
// Tests
/*----- */
