use super::{Side, TimeInForce};

/*----- */
// Limit order
/*----- */
/// A single randomized limit order derived from a validated request. One is
/// produced per unit of the request's `number`, submitted immediately and
/// never stored. The order type is LIMIT by construction; time in force
/// defaults to GTC.
#[derive(Clone, Debug, PartialEq)]
pub struct LimitOrder {
    pub symbol: String,
    pub side: Side,
    pub quantity: f64,
    pub price: f64,
    pub time_in_force: TimeInForce,
}
