use std::cell::Cell;
use std::collections::HashMap;

use crate::domain::{
    errors::{AppError, AppResult},
    logging::{LogComponent, LogLevel, get_logger, get_time_provider},
    portfolio::{Investment, InvestmentId, Portfolio, Price, PriceFeed, Quantity, Symbol},
};
use crate::{log_debug, log_info};

use super::investment_form::InvestmentForm;

/// Hands out clock-based ids, bumped so they stay strictly increasing
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Cell<u64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> InvestmentId {
        self.next_at(get_time_provider().current_timestamp())
    }

    pub fn next_at(&self, now_ms: u64) -> InvestmentId {
        let id = now_ms.max(self.last.get() + 1);
        self.last.set(id);
        InvestmentId::from(id)
    }
}

/// A priced "Buy More" order, applied to whatever list is current
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Purchase {
    pub id: InvestmentId,
    pub quantity: Quantity,
    pub price: Price,
}

impl Purchase {
    pub fn apply(&self, portfolio: &Portfolio) -> AppResult<Portfolio> {
        portfolio.with_purchase(self.id, self.quantity, self.price)
    }
}

/// Use cases behind the form and the holding cards
pub struct PortfolioService<F: PriceFeed> {
    feed: F,
    ids: IdGenerator,
}

impl<F: PriceFeed> PortfolioService<F> {
    pub fn new(feed: F) -> Self {
        Self { feed, ids: IdGenerator::new() }
    }

    /// Validate the form, price the symbol and build the new holding
    pub async fn submit(&self, form: &InvestmentForm) -> AppResult<Investment> {
        let order = form.validate()?;
        let price = self.feed.quote(&order.symbol).await?;
        let investment = Investment::new(self.ids.next_id(), order.symbol, order.trade_date, order.quantity, price);
        let message = format!("added {} x{} at {:.2}", investment.symbol, investment.quantity, price.value());
        match serde_json::to_string(&investment) {
            Ok(json) => get_logger().log_with_metadata(
                LogLevel::Info,
                LogComponent::Application("PortfolioService"),
                &message,
                &json,
            ),
            Err(_) => {
                log_info!(LogComponent::Application("PortfolioService"), "{}", message);
            }
        }
        Ok(investment)
    }

    /// Price a top-up of an existing holding at the current quote
    pub async fn price_purchase(&self, portfolio: &Portfolio, id: InvestmentId, quantity: Quantity) -> AppResult<Purchase> {
        let symbol = portfolio.get(id).map(|inv| inv.symbol.clone()).ok_or(AppError::NotFound(id))?;
        let price = self.feed.quote(&symbol).await?;
        Ok(Purchase { id, quantity, price })
    }

    pub async fn buy_more(&self, portfolio: &Portfolio, id: InvestmentId, quantity: Quantity) -> AppResult<Portfolio> {
        self.price_purchase(portfolio, id, quantity).await?.apply(portfolio)
    }

    /// Fresh quote for every distinct symbol held
    pub async fn quote_all(&self, portfolio: &Portfolio) -> AppResult<HashMap<Symbol, Price>> {
        let mut quotes = HashMap::new();
        for symbol in portfolio.symbols() {
            let price = self.feed.quote(&symbol).await?;
            quotes.insert(symbol, price);
        }
        log_debug!(
            LogComponent::Application("PortfolioService"),
            "refreshed {} quotes",
            quotes.len()
        );
        Ok(quotes)
    }

    pub async fn refresh_quotes(&self, portfolio: &Portfolio) -> AppResult<Portfolio> {
        let quotes = self.quote_all(portfolio).await?;
        Ok(portfolio.with_quotes(&quotes))
    }
}
