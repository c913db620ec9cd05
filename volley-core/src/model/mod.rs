pub mod order;
pub mod request;

use std::fmt::{self, Display};

/*----- */
// Order side
/*----- */
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/*----- */
// Time in force
/*----- */
/*
GTC: good till cancelled, the order sits on the book until cancelled
IOC: immediate or cancel, fills what it can then expires
FOK: fill or kill, expires unless the whole order can be filled at once
*/
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TimeInForce {
    #[default]
    Gtc,
    Ioc,
    Fok,
}
