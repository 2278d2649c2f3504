mod common;

use common::holding;
use portfolio_tracker_wasm::domain::errors::AppError;
use portfolio_tracker_wasm::domain::portfolio::{InvestmentId, Portfolio, Price, Quantity, Symbol};
use std::collections::HashMap;

fn sample() -> Portfolio {
    Portfolio::new()
        .with_investment(holding(1, "TCS", "2024-01-10", 10.0, 1000.0))
        .with_investment(holding(2, "INFY", "2024-02-10", 5.0, 1500.0))
        .with_investment(holding(3, "TCS", "2024-03-10", 2.0, 1200.0))
}

#[test]
fn adding_appends_in_order_and_leaves_original_untouched() {
    let empty = Portfolio::new();
    let one = empty.with_investment(holding(7, "TCS", "2024-01-10", 1.0, 1000.0));
    assert!(empty.is_empty());
    assert_eq!(one.len(), 1);

    let ids: Vec<u64> = sample().iter().map(|inv| inv.id.value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn symbols_are_distinct_in_first_seen_order() {
    let symbols: Vec<String> = sample().symbols().iter().map(|s| s.value().to_string()).collect();
    assert_eq!(symbols, vec!["TCS", "INFY"]);
}

#[test]
fn buying_more_averages_the_buy_price() {
    let id = InvestmentId::from(1);
    let updated = sample()
        .with_purchase(id, Quantity::new(10.0).unwrap(), Price::new(2000.0).unwrap())
        .unwrap();
    let inv = updated.get(id).unwrap();
    assert_eq!(inv.quantity.value(), 20.0);
    assert_eq!(inv.buy_price.value(), 1500.0);
    assert_eq!(inv.current_price.value(), 2000.0);
    assert_eq!(inv.profit_loss(), 10000.0);
}

#[test]
fn selling_reduces_then_removes() {
    let id = InvestmentId::from(2);
    let partial = sample().with_sale(id, Quantity::new(2.0).unwrap()).unwrap();
    assert_eq!(partial.get(id).unwrap().quantity.value(), 3.0);

    let gone = partial.with_sale(id, Quantity::new(3.0).unwrap()).unwrap();
    assert!(gone.get(id).is_none());
    assert_eq!(gone.len(), 2);
}

#[test]
fn selling_a_fractional_top_up_in_full_removes_it() {
    let id = InvestmentId::from(1);
    let topped_up = Portfolio::new()
        .with_investment(holding(1, "TCS", "2024-01-10", 0.1, 1000.0))
        .with_purchase(id, Quantity::new(0.2).unwrap(), Price::new(1000.0).unwrap())
        .unwrap();
    // 0.1 + 0.2 is not exactly 0.3
    assert_ne!(topped_up.get(id).unwrap().quantity.value(), 0.3);

    let sold = topped_up.with_sale(id, Quantity::new(0.3).unwrap()).unwrap();
    assert!(sold.get(id).is_none());
    assert!(sold.is_empty());
}

#[test]
fn overselling_is_rejected() {
    let err = sample()
        .with_sale(InvestmentId::from(3), Quantity::new(2.5).unwrap())
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn unknown_ids_are_not_found() {
    let missing = InvestmentId::from(99);
    assert_eq!(sample().without(missing).unwrap_err(), AppError::NotFound(missing));
    assert_eq!(
        sample().with_sale(missing, Quantity::new(1.0).unwrap()).unwrap_err(),
        AppError::NotFound(missing)
    );
}

#[test]
fn removing_keeps_the_rest() {
    let trimmed = sample().without(InvestmentId::from(2)).unwrap();
    let ids: Vec<u64> = trimmed.iter().map(|inv| inv.id.value()).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn quotes_update_every_lot_of_a_symbol() {
    let mut quotes = HashMap::new();
    quotes.insert(Symbol::new("tcs").unwrap(), Price::new(1100.0).unwrap());
    let updated = sample().with_quotes(&quotes);

    let prices: Vec<f64> = updated.iter().map(|inv| inv.current_price.value()).collect();
    assert_eq!(prices, vec![1100.0, 1500.0, 1100.0]);
    // buy prices stay put
    assert_eq!(updated.get(InvestmentId::from(3)).unwrap().buy_price.value(), 1200.0);
}
