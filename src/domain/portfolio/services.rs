use serde::Serialize;

use super::entities::{CapThresholds, Portfolio};

/// Totals shown above the holdings list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub holdings: usize,
    pub invested: f64,
    pub market_value: f64,
    pub profit_loss: f64,
    /// `None` while nothing is invested
    pub profit_loss_percent: Option<f64>,
}

impl PortfolioSummary {
    pub fn is_profitable(&self) -> bool {
        self.profit_loss >= 0.0
    }
}

/// Domain service for portfolio-wide figures
#[derive(Debug, Clone, Default)]
pub struct PortfolioAnalysisService {
    thresholds: CapThresholds,
}

impl PortfolioAnalysisService {
    pub fn new(thresholds: CapThresholds) -> Self {
        Self { thresholds }
    }

    pub fn summarize(&self, portfolio: &Portfolio) -> PortfolioSummary {
        let invested: f64 = portfolio.iter().map(|inv| inv.cost_basis()).sum();
        let market_value: f64 = portfolio.iter().map(|inv| inv.market_value()).sum();
        let profit_loss = market_value - invested;
        let profit_loss_percent = (invested > 0.0).then(|| (market_value / invested - 1.0) * 100.0);

        PortfolioSummary {
            holdings: portfolio.len(),
            invested,
            market_value,
            profit_loss,
            profit_loss_percent,
        }
    }

    /// Holding counts per bucket, Large, Mid, Small
    pub fn allocation(&self, portfolio: &Portfolio) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for inv in portfolio.iter() {
            counts[inv.market_cap(&self.thresholds).index()] += 1;
        }
        counts
    }
}
