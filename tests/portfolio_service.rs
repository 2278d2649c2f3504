use futures::executor::block_on;
use portfolio_tracker_wasm::application::{IdGenerator, InvestmentForm, PortfolioService};
use portfolio_tracker_wasm::domain::errors::AppError;
use portfolio_tracker_wasm::domain::portfolio::{Portfolio, PriceFeed, Quantity, Symbol};
use portfolio_tracker_wasm::infrastructure::pricing::{MockPriceFeed, SequenceRandom};

fn service(values: Vec<f64>) -> PortfolioService<MockPriceFeed<SequenceRandom>> {
    PortfolioService::new(MockPriceFeed::new(SequenceRandom::new(values), 1000.0, 1000.0))
}

#[test]
fn mock_quotes_fall_between_floor_and_ceiling() {
    let feed = MockPriceFeed::new(SequenceRandom::new(vec![0.0, 0.25, 0.999]), 1000.0, 1000.0);
    let symbol = Symbol::new("TCS").unwrap();
    let prices: Vec<f64> = (0..3)
        .map(|_| block_on(feed.quote(&symbol)).unwrap().value())
        .collect();
    assert_eq!(prices[0], 1000.0);
    assert_eq!(prices[1], 1250.0);
    assert!(prices.iter().all(|p| (1000.0..2000.0).contains(p)));
}

#[test]
fn zero_floor_and_span_is_a_pricing_error() {
    let feed = MockPriceFeed::new(SequenceRandom::new(vec![0.5]), 0.0, 0.0);
    let err = block_on(feed.quote(&Symbol::new("TCS").unwrap())).unwrap_err();
    assert!(matches!(err, AppError::Pricing(_)));
}

#[test]
fn submitting_prices_a_new_holding() {
    let svc = service(vec![0.5]);
    let form = InvestmentForm::new("reliance", "2024-05-17", "10");
    let inv = block_on(svc.submit(&form)).unwrap();

    assert_eq!(inv.symbol.value(), "RELIANCE");
    assert_eq!(inv.buy_price.value(), 1500.0);
    assert_eq!(inv.current_price.value(), 1500.0);
    assert_eq!(inv.market_value(), 15000.0);
}

#[test]
fn each_submission_adds_exactly_one_holding() {
    let svc = service(vec![0.1, 0.2, 0.3]);
    let mut portfolio = Portfolio::new();
    for symbol in ["TCS", "INFY", "WIPRO"] {
        let inv = block_on(svc.submit(&InvestmentForm::new(symbol, "2024-05-17", "1"))).unwrap();
        let before = portfolio.len();
        portfolio = portfolio.with_investment(inv);
        assert_eq!(portfolio.len(), before + 1);
    }
    let ids: Vec<u64> = portfolio.iter().map(|inv| inv.id.value()).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn invalid_form_never_reaches_the_feed() {
    let svc = service(vec![0.5]);
    let err = block_on(svc.submit(&InvestmentForm::new("", "2024-05-17", "1"))).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn refreshing_quotes_moves_profit_and_loss() {
    let svc = service(vec![0.5, 0.0]);
    let inv = block_on(svc.submit(&InvestmentForm::new("TCS", "2024-05-17", "2"))).unwrap();
    let portfolio = Portfolio::new().with_investment(inv);

    let refreshed = block_on(svc.refresh_quotes(&portfolio)).unwrap();
    let inv = &refreshed.investments()[0];
    assert_eq!(inv.current_price.value(), 1000.0);
    assert_eq!(inv.profit_loss(), -1000.0);
    assert!(!inv.is_profitable());
}

#[test]
fn buying_more_uses_a_fresh_quote() {
    let svc = service(vec![0.0, 1.0]);
    let inv = block_on(svc.submit(&InvestmentForm::new("TCS", "2024-05-17", "1"))).unwrap();
    let id = inv.id;
    let portfolio = Portfolio::new().with_investment(inv);

    let updated = block_on(svc.buy_more(&portfolio, id, Quantity::new(1.0).unwrap())).unwrap();
    let inv = updated.get(id).unwrap();
    assert_eq!(inv.quantity.value(), 2.0);
    assert!(inv.current_price.value() > 1999.0);
    assert!(inv.buy_price.value() > 1499.0 && inv.buy_price.value() < 1500.0);
}

#[test]
fn ids_stay_unique_within_one_millisecond() {
    let ids = IdGenerator::new();
    let a = ids.next_at(5_000);
    let b = ids.next_at(5_000);
    let c = ids.next_at(4_000);
    let d = ids.next_at(9_000);
    assert_eq!(a.value(), 5_000);
    assert_eq!(b.value(), 5_001);
    assert_eq!(c.value(), 5_002);
    assert_eq!(d.value(), 9_000);
}
