pub use super::value_objects::{CapThresholds, InvestmentId, MarketCap, Price, Quantity, Symbol, TradeDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::errors::{AppError, AppResult};

/// Relative slack when comparing a sale against the held quantity
pub const QUANTITY_TOLERANCE: f64 = 1e-9;

/// Domain entity - a single holding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: InvestmentId,
    pub symbol: Symbol,
    pub trade_date: TradeDate,
    pub quantity: Quantity,
    pub buy_price: Price,
    pub current_price: Price,
}

impl Investment {
    /// A fresh holding is bought at the quoted price, so both prices start equal
    pub fn new(id: InvestmentId, symbol: Symbol, trade_date: TradeDate, quantity: Quantity, price: Price) -> Self {
        Self { id, symbol, trade_date, quantity, buy_price: price, current_price: price }
    }

    pub fn market_value(&self) -> f64 {
        self.quantity.value() * self.current_price.value()
    }

    pub fn cost_basis(&self) -> f64 {
        self.quantity.value() * self.buy_price.value()
    }

    pub fn profit_loss(&self) -> f64 {
        (self.current_price.value() - self.buy_price.value()) * self.quantity.value()
    }

    pub fn profit_loss_percent(&self) -> f64 {
        (self.current_price.value() / self.buy_price.value() - 1.0) * 100.0
    }

    /// Break-even counts as profitable
    pub fn is_profitable(&self) -> bool {
        self.profit_loss() >= 0.0
    }

    pub fn market_cap(&self, thresholds: &CapThresholds) -> MarketCap {
        MarketCap::classify(self.current_price, thresholds)
    }
}

/// Domain entity - the ordered list of holdings.
///
/// Every change produces a new `Portfolio`; callers swap the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    investments: Vec<Investment>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Investment> {
        self.investments.iter()
    }

    pub fn len(&self) -> usize {
        self.investments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.investments.is_empty()
    }

    pub fn get(&self, id: InvestmentId) -> Option<&Investment> {
        self.investments.iter().find(|inv| inv.id == id)
    }

    /// Distinct symbols in first-seen order
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut seen = Vec::new();
        for inv in &self.investments {
            if !seen.contains(&inv.symbol) {
                seen.push(inv.symbol.clone());
            }
        }
        seen
    }

    pub fn with_investment(&self, investment: Investment) -> Self {
        let mut investments = self.investments.clone();
        investments.push(investment);
        Self { investments }
    }

    pub fn without(&self, id: InvestmentId) -> AppResult<Self> {
        self.position(id)?;
        let investments = self.investments.iter().filter(|inv| inv.id != id).cloned().collect();
        Ok(Self { investments })
    }

    /// Buy more of an existing holding; the buy price becomes the weighted average
    pub fn with_purchase(&self, id: InvestmentId, quantity: Quantity, price: Price) -> AppResult<Self> {
        let pos = self.position(id)?;
        let mut investments = self.investments.clone();
        let holding = &mut investments[pos];

        let held = holding.quantity.value();
        let added = quantity.value();
        let total = held + added;
        let average = (held * holding.buy_price.value() + added * price.value()) / total;

        holding.quantity = Quantity::new(total)?;
        holding.buy_price = Price::new(average)?;
        holding.current_price = price;
        Ok(Self { investments })
    }

    /// Sell part of a holding; selling everything removes it.
    ///
    /// Amounts within `QUANTITY_TOLERANCE` (relative to the holding) of the
    /// held quantity count as a full sale.
    pub fn with_sale(&self, id: InvestmentId, quantity: Quantity) -> AppResult<Self> {
        let pos = self.position(id)?;
        let held = self.investments[pos].quantity.value();
        let sold = quantity.value();
        let tolerance = held * QUANTITY_TOLERANCE;
        if sold > held + tolerance {
            return Err(AppError::Validation(format!(
                "Cannot sell {} of {}: only {} held",
                quantity, self.investments[pos].symbol, self.investments[pos].quantity
            )));
        }

        let mut investments = self.investments.clone();
        let remaining = held - sold;
        if remaining <= tolerance {
            investments.remove(pos);
        } else {
            investments[pos].quantity = Quantity::new(remaining)?;
        }
        Ok(Self { investments })
    }

    /// Apply fresh quotes; holdings without a quote keep their price
    pub fn with_quotes(&self, quotes: &HashMap<Symbol, Price>) -> Self {
        let investments = self
            .investments
            .iter()
            .map(|inv| match quotes.get(&inv.symbol) {
                Some(price) => Investment { current_price: *price, ..inv.clone() },
                None => inv.clone(),
            })
            .collect();
        Self { investments }
    }

    fn position(&self, id: InvestmentId) -> AppResult<usize> {
        self.investments
            .iter()
            .position(|inv| inv.id == id)
            .ok_or(AppError::NotFound(id))
    }
}
