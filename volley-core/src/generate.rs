use std::fmt::{self, Display};

use rand::Rng;
use tracing::{error, info, warn};

use crate::exchange::errors::ExecutionError;
use crate::exchange::ExecutionClient;
use crate::model::order::LimitOrder;
use crate::model::request::OrderRequest;
use crate::model::TimeInForce;

/*----- */
// Randomness seam
/*----- */
/// The two random draws order generation needs. Production code uses
/// [`ThreadRandomizer`], tests script the draws to pin quantities and
/// prices exactly.
pub trait OrderRng {
    /// Uniformly random +1.0 or -1.0.
    fn jitter_sign(&mut self) -> f64;

    /// Uniformly random price in the closed interval [min, max].
    fn price_between(&mut self, min: f64, max: f64) -> f64;
}

/*----- */
// Thread randomizer
/*----- */
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomizer;

impl OrderRng for ThreadRandomizer {
    fn jitter_sign(&mut self) -> f64 {
        if rand::thread_rng().gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }

    fn price_between(&mut self, min: f64, max: f64) -> f64 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/*----- */
// Order generation
/*----- */
/// Derives one randomized limit order from a validated request. The order's
/// share of the total volume is jittered by the full amount difference in a
/// random direction, the price is drawn uniformly from the price range, and
/// both are rounded up to the next whole unit. The round up biases the
/// total submitted volume slightly above the requested volume.
pub fn randomized_order<Random>(
    request: &OrderRequest,
    base_share: f64,
    rng: &mut Random,
) -> LimitOrder
where
    Random: OrderRng,
{
    let quantity = (base_share + rng.jitter_sign() * request.amount_dif).ceil();
    let price = rng.price_between(request.price_min, request.price_max).ceil();

    LimitOrder {
        symbol: request.trading_pair.clone(),
        side: request.side,
        quantity,
        price,
        time_in_force: TimeInForce::Gtc,
    }
}

/*----- */
// Batch outcome
/*----- */
pub const SUCCESS_MESSAGE: &str = "The orders were successfully created!";
pub const REJECTED_MESSAGE: &str = "There was an error when creating the orders. Please, check that the trading pair is valid and that you have enough funding for the orders.";

/// Summary of one batch run. `Display` is the user facing message:
/// rejections map to a fixed hint rather than the raw exchange error, while
/// api failures surface the underlying detail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BatchOutcome {
    /// Every order in the batch was accepted.
    Success { placed: u32 },
    /// The exchange refused an order. Earlier orders stand, later ones were
    /// never attempted.
    Rejected { placed: u32 },
    /// A non order error (auth, transport, undecipherable response) aborted
    /// the batch.
    Failed { placed: u32, detail: String },
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BatchOutcome::Success { .. })
    }

    /// Orders that reached the exchange and stand whatever the outcome,
    /// there is no rollback of a partially submitted batch.
    pub fn placed(&self) -> u32 {
        match self {
            BatchOutcome::Success { placed }
            | BatchOutcome::Rejected { placed }
            | BatchOutcome::Failed { placed, .. } => *placed,
        }
    }
}

impl Display for BatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchOutcome::Success { .. } => f.write_str(SUCCESS_MESSAGE),
            BatchOutcome::Rejected { .. } => f.write_str(REJECTED_MESSAGE),
            BatchOutcome::Failed { detail, .. } => f.write_str(detail),
        }
    }
}

/*----- */
// Batch submission
/*----- */
/// Splits the validated request into `number` randomized limit orders and
/// submits them sequentially, in submission order. The first error stops
/// the loop: a rejection becomes [`BatchOutcome::Rejected`], anything else
/// becomes [`BatchOutcome::Failed`] with the error detail. No retries, no
/// rollback of orders already placed.
pub async fn submit_batch<Client, Random>(
    client: &Client,
    rng: &mut Random,
    request: &OrderRequest,
) -> BatchOutcome
where
    Client: ExecutionClient,
    Random: OrderRng,
{
    let base_share = request.base_share();
    let mut placed = 0;

    for index in 1..=request.number {
        let order = randomized_order(request, base_share, rng);

        match client.open_order(&order).await {
            Ok(response) => {
                placed += 1;
                info!(
                    exchange = %Client::CLIENT,
                    order = index,
                    total = request.number,
                    symbol = %order.symbol,
                    side = %order.side,
                    quantity = order.quantity,
                    price = order.price,
                    ?response,
                    "limit order placed"
                );
            }
            Err(error @ ExecutionError::OrderRejected { .. }) => {
                warn!(
                    exchange = %Client::CLIENT,
                    order = index,
                    total = request.number,
                    placed,
                    %error,
                    "order rejected, abandoning the rest of the batch"
                );
                return BatchOutcome::Rejected { placed };
            }
            Err(error) => {
                error!(
                    exchange = %Client::CLIENT,
                    order = index,
                    total = request.number,
                    placed,
                    %error,
                    "api error, abandoning the rest of the batch"
                );
                return BatchOutcome::Failed {
                    placed,
                    detail: error.to_string(),
                };
            }
        }
    }

    BatchOutcome::Success { placed }
}

/*----- */
// Tests
/*----- */
#[cfg(test)]
mod test {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::ClientError;
    use crate::exchange::ExecutionId;
    use crate::model::Side;

    /*----- */
    // Scripted randomness
    /*----- */
    struct ScriptedRng {
        signs: Vec<f64>,
        prices: Vec<f64>,
    }

    impl OrderRng for ScriptedRng {
        fn jitter_sign(&mut self) -> f64 {
            self.signs.remove(0)
        }

        fn price_between(&mut self, min: f64, max: f64) -> f64 {
            let price = self.prices.remove(0);
            assert!(
                min <= price && price <= max,
                "scripted price {price} outside [{min}, {max}]"
            );
            price
        }
    }

    /*----- */
    // Recording mock client
    /*----- */
    enum MockFailure {
        Rejected,
        Api,
    }

    #[derive(Default)]
    struct MockExecution {
        orders: Mutex<Vec<LimitOrder>>,
        fail_at: Option<(u32, MockFailure)>,
    }

    #[async_trait]
    impl ExecutionClient for MockExecution {
        const CLIENT: ExecutionId = ExecutionId::BinanceSpot;

        type NewOrderResponse = u64;

        async fn open_order(&self, order: &LimitOrder) -> Result<u64, ExecutionError> {
            let mut orders = self.orders.lock().unwrap();
            let call = orders.len() as u32 + 1;

            if let Some((fail_call, failure)) = &self.fail_at {
                if call == *fail_call {
                    return Err(match failure {
                        MockFailure::Rejected => ExecutionError::OrderRejected {
                            exchange: "Binance",
                            code: -2010,
                            msg: "Account has insufficient balance for requested action."
                                .to_owned(),
                        },
                        MockFailure::Api => ExecutionError::Api(ClientError::Unauthorised(
                            "code -2014: API-key format invalid.".to_owned(),
                        )),
                    });
                }
            }

            orders.push(order.clone());
            Ok(u64::from(call))
        }
    }

    fn request(number: u32) -> OrderRequest {
        OrderRequest {
            volume: 100.0,
            number,
            amount_dif: 2.0,
            side: Side::Buy,
            price_min: 40.0,
            price_max: 60.0,
            trading_pair: "BTCUSDT".to_owned(),
        }
    }

    #[test]
    fn test_randomized_order_ceils_quantity_and_price() {
        let request = request(5);
        let mut rng = ScriptedRng {
            signs: vec![-1.0],
            prices: vec![40.1],
        };

        let order = randomized_order(&request, request.base_share(), &mut rng);

        // base share 100 / 5 = 20, jitter -2, ceil(18) = 18
        assert_eq!(order.quantity, 18.0);
        assert_eq!(order.price, 41.0);
        assert_eq!(order.symbol, "BTCUSDT");
        assert_eq!(order.side, Side::Buy);
        assert_eq!(order.time_in_force, TimeInForce::Gtc);
    }

    #[test]
    fn test_thread_randomizer_draws_stay_in_bounds() {
        let mut rng = ThreadRandomizer;

        for _ in 0..100 {
            let sign = rng.jitter_sign();
            assert!(sign == 1.0 || sign == -1.0);

            let price = rng.price_between(10.0, 11.0);
            assert!((10.0..=11.0).contains(&price));
        }
    }

    #[tokio::test]
    async fn test_submit_batch_places_every_order() {
        let client = MockExecution::default();
        let mut rng = ScriptedRng {
            signs: vec![1.0, -1.0, 1.0, -1.0, 1.0],
            prices: vec![41.2, 59.9, 40.0, 47.3, 60.0],
        };

        let outcome = submit_batch(&client, &mut rng, &request(5)).await;

        assert_eq!(outcome, BatchOutcome::Success { placed: 5 });
        assert!(outcome.is_success());
        assert_eq!(outcome.to_string(), SUCCESS_MESSAGE);

        let orders = client.orders.lock().unwrap();
        assert_eq!(orders.len(), 5);

        // base share 20 jittered by +-2, then ceiled
        let quantities = orders.iter().map(|order| order.quantity).collect::<Vec<_>>();
        assert_eq!(quantities, vec![22.0, 18.0, 22.0, 18.0, 22.0]);

        let prices = orders.iter().map(|order| order.price).collect::<Vec<_>>();
        assert_eq!(prices, vec![42.0, 60.0, 40.0, 48.0, 60.0]);

        for order in orders.iter() {
            assert_eq!(order.symbol, "BTCUSDT");
            assert_eq!(order.side, Side::Buy);
            assert_eq!(order.time_in_force, TimeInForce::Gtc);
            assert!((40.0..=60.0).contains(&order.price));
        }
    }

    #[tokio::test]
    async fn test_submit_batch_stops_at_the_first_rejection() {
        let client = MockExecution {
            orders: Mutex::new(Vec::new()),
            fail_at: Some((3, MockFailure::Rejected)),
        };
        let mut rng = ScriptedRng {
            signs: vec![1.0; 5],
            prices: vec![50.0; 5],
        };

        let outcome = submit_batch(&client, &mut rng, &request(5)).await;

        assert_eq!(outcome, BatchOutcome::Rejected { placed: 2 });
        assert_eq!(outcome.placed(), 2);
        assert_eq!(outcome.to_string(), REJECTED_MESSAGE);
        assert_eq!(client.orders.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_submit_batch_surfaces_api_error_detail() {
        let client = MockExecution {
            orders: Mutex::new(Vec::new()),
            fail_at: Some((1, MockFailure::Api)),
        };
        let mut rng = ScriptedRng {
            signs: vec![1.0; 2],
            prices: vec![50.0; 2],
        };

        let outcome = submit_batch(&client, &mut rng, &request(2)).await;

        match &outcome {
            BatchOutcome::Failed { placed, detail } => {
                assert_eq!(*placed, 0);
                assert!(detail.contains("API-key format invalid"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(!outcome.is_success());
        assert!(client.orders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_batch_submits_one_order_per_unit_of_number() {
        let client = MockExecution::default();
        let mut rng = ScriptedRng {
            signs: vec![1.0],
            prices: vec![40.0],
        };

        let outcome = submit_batch(&client, &mut rng, &request(1)).await;

        assert_eq!(outcome, BatchOutcome::Success { placed: 1 });
        assert_eq!(client.orders.lock().unwrap().len(), 1);
    }
}
