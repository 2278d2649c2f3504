use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::AppResult,
    portfolio::{Quantity, Symbol, TradeDate},
};

/// Raw text of the "Add New Investment" inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestmentForm {
    pub symbol: String,
    pub date: String,
    pub quantity: String,
}

/// A validated order waiting for a price
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvestment {
    pub symbol: Symbol,
    pub trade_date: TradeDate,
    pub quantity: Quantity,
}

impl InvestmentForm {
    pub fn new(symbol: &str, date: &str, quantity: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            date: date.to_string(),
            quantity: quantity.to_string(),
        }
    }

    /// Fields are checked in display order; the first failure is reported
    pub fn validate(&self) -> AppResult<NewInvestment> {
        Ok(NewInvestment {
            symbol: Symbol::new(&self.symbol)?,
            trade_date: self.date.parse()?,
            quantity: self.quantity.parse()?,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
