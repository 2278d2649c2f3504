#![allow(dead_code)]

use portfolio_tracker_wasm::domain::portfolio::{Investment, InvestmentId, Price, Quantity, Symbol, TradeDate};

pub fn holding(id: u64, symbol: &str, date: &str, quantity: f64, price: f64) -> Investment {
    Investment::new(
        InvestmentId::from(id),
        Symbol::new(symbol).unwrap(),
        date.parse::<TradeDate>().unwrap(),
        Quantity::new(quantity).unwrap(),
        Price::new(price).unwrap(),
    )
}

pub fn repriced(mut investment: Investment, current: f64) -> Investment {
    investment.current_price = Price::new(current).unwrap();
    investment
}
