mod common;

use common::holding;
use portfolio_tracker_wasm::domain::portfolio::{
    CapThresholds, MarketCap, Portfolio, PortfolioAnalysisService, Price,
};
use quickcheck_macros::quickcheck;

fn bucket(price: f64) -> MarketCap {
    MarketCap::classify(Price::new(price).unwrap(), &CapThresholds::default())
}

#[test]
fn boundaries_fall_into_the_lower_bucket() {
    assert_eq!(bucket(1000.01), MarketCap::LargeCap);
    assert_eq!(bucket(1000.0), MarketCap::MidCap);
    assert_eq!(bucket(500.01), MarketCap::MidCap);
    assert_eq!(bucket(500.0), MarketCap::SmallCap);
    assert_eq!(bucket(0.5), MarketCap::SmallCap);
}

#[test]
fn labels_match_the_chart_legend() {
    assert_eq!(MarketCap::LargeCap.to_string(), "Large Cap");
    assert_eq!(MarketCap::MidCap.to_string(), "Mid Cap");
    assert_eq!(MarketCap::SmallCap.to_string(), "Small Cap");
}

#[test]
fn custom_thresholds_shift_the_buckets() {
    let thresholds = CapThresholds { large_above: 1500.0, mid_above: 1200.0 };
    assert_eq!(MarketCap::classify(Price::new(1400.0).unwrap(), &thresholds), MarketCap::MidCap);
    assert_eq!(MarketCap::classify(Price::new(1100.0).unwrap(), &thresholds), MarketCap::SmallCap);
}

#[quickcheck]
fn allocation_partitions_the_holdings(prices: Vec<u16>) -> bool {
    let portfolio = prices.iter().enumerate().fold(Portfolio::new(), |p, (i, &price)| {
        p.with_investment(holding(i as u64, "SYM", "2024-01-01", 1.0, price as f64 + 1.0))
    });
    let counts = PortfolioAnalysisService::default().allocation(&portfolio);
    counts.iter().sum::<usize>() == prices.len()
}
