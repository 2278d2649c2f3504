mod common;

use common::holding;
use leptos::*;
use portfolio_tracker_wasm::application::Purchase;
use portfolio_tracker_wasm::domain::errors::AppError;
use portfolio_tracker_wasm::domain::portfolio::{InvestmentId, Price, Quantity, Symbol};
use portfolio_tracker_wasm::global_state::{
    apply_purchase, apply_quotes, apply_sale, logs_paused_signal, logs_signal, portfolio_signal,
    push_investment, push_log,
};
use std::collections::HashMap;

// Globals are process-wide, so everything runs in one test on one thread.
#[test]
fn signals_follow_portfolio_and_log_updates() {
    let runtime = create_runtime();

    push_investment(holding(1, "TCS", "2024-01-10", 2.0, 1000.0));
    push_investment(holding(2, "INFY", "2024-01-11", 1.0, 1500.0));
    assert_eq!(portfolio_signal().with(|p| p.len()), 2);

    let id = InvestmentId::from(1);
    apply_purchase(&Purchase { id, quantity: Quantity::new(2.0).unwrap(), price: Price::new(2000.0).unwrap() })
        .unwrap();
    assert_eq!(portfolio_signal().with(|p| p.get(id).unwrap().buy_price.value()), 1500.0);

    let mut quotes = HashMap::new();
    quotes.insert(Symbol::new("INFY").unwrap(), Price::new(1200.0).unwrap());
    apply_quotes(&quotes);
    assert_eq!(
        portfolio_signal().with(|p| p.get(InvestmentId::from(2)).unwrap().profit_loss()),
        -300.0
    );

    apply_sale(InvestmentId::from(2), Quantity::new(1.0).unwrap()).unwrap();
    assert_eq!(portfolio_signal().with(|p| p.len()), 1);
    let err = apply_sale(InvestmentId::from(2), Quantity::new(1.0).unwrap()).unwrap_err();
    assert_eq!(err, AppError::NotFound(InvestmentId::from(2)));
    assert_eq!(portfolio_signal().with(|p| p.len()), 1);

    for i in 0..5 {
        push_log(format!("line {}", i), 3);
    }
    assert_eq!(logs_signal().get(), vec!["line 2", "line 3", "line 4"]);

    logs_paused_signal().set(true);
    push_log("ignored".to_string(), 3);
    assert_eq!(logs_signal().with(|logs| logs.len()), 3);
    assert!(!logs_signal().with(|logs| logs.contains(&"ignored".to_string())));

    runtime.dispose();
}
