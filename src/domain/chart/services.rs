use strum::IntoEnumIterator;

use super::value_objects::{LineChartData, LineSeries, PieChartData, PieSlice};
use crate::domain::portfolio::{MarketCap, Portfolio, PortfolioAnalysisService};

pub const PORTFOLIO_VALUE_LABEL: &str = "Portfolio Value";
pub const LINE_COLOR: &str = "#4f46e5";
pub const LINE_TENSION: f64 = 0.1;

/// Slice colours in Large, Mid, Small order
pub const PIE_COLORS: [&str; 3] = ["#4f46e5", "#6366f1", "#818cf8"];

/// Derives chart datasets from the holdings list
pub struct ChartDatasetService {
    analysis: PortfolioAnalysisService,
}

impl ChartDatasetService {
    pub fn new(analysis: PortfolioAnalysisService) -> Self {
        Self { analysis }
    }

    /// One point per holding, in insertion order
    pub fn portfolio_growth(&self, portfolio: &Portfolio) -> LineChartData {
        LineChartData {
            labels: portfolio.iter().map(|inv| inv.trade_date.to_string()).collect(),
            series: LineSeries {
                label: PORTFOLIO_VALUE_LABEL.to_string(),
                points: portfolio.iter().map(|inv| inv.market_value()).collect(),
                color: LINE_COLOR.to_string(),
                tension: LINE_TENSION,
            },
        }
    }

    pub fn market_cap_allocation(&self, portfolio: &Portfolio) -> PieChartData {
        let counts = self.analysis.allocation(portfolio);
        let slices = MarketCap::iter()
            .map(|bucket| PieSlice {
                label: bucket.to_string(),
                value: counts[bucket.index()],
                color: PIE_COLORS[bucket.index()].to_string(),
            })
            .collect();
        PieChartData { slices }
    }
}

impl Default for ChartDatasetService {
    fn default() -> Self {
        Self::new(PortfolioAnalysisService::default())
    }
}
