use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use strum::EnumIter;

use crate::domain::errors::{AppError, AppResult};

/// Value Object - ticker symbol, trimmed and upper-cased
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: &str) -> AppResult<Self> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("Stock symbol is required"));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Value Object - calendar date of the trade (`YYYY-MM-DD`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TradeDate {
    year: u16,
    month: u8,
    day: u8,
}

impl TradeDate {
    pub fn new(year: u16, month: u8, day: u8) -> AppResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::Validation(format!("Month {} is out of range", month)));
        }
        let last_day = days_in_month(year, month);
        if day == 0 || day > last_day {
            return Err(AppError::Validation(format!(
                "Day {} is out of range for {:04}-{:02}",
                day, year, month
            )));
        }
        Ok(Self { year, month, day })
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl FromStr for TradeDate {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::validation("Trade date is required"));
        }
        let malformed = || AppError::Validation(format!("'{}' is not a YYYY-MM-DD date", raw));
        let mut parts = raw.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(malformed());
        }
        if ![year, month, day].iter().all(|part| part.chars().all(|c| c.is_ascii_digit())) {
            return Err(malformed());
        }
        let year = year.parse::<u16>().map_err(|_| malformed())?;
        let month = month.parse::<u8>().map_err(|_| malformed())?;
        let day = day.parse::<u8>().map_err(|_| malformed())?;
        Self::new(year, month, day)
    }
}

impl TryFrom<String> for TradeDate {
    type Error = AppError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<TradeDate> for String {
    fn from(date: TradeDate) -> Self {
        date.to_string()
    }
}

impl std::fmt::Display for TradeDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Value Object - number of shares held, may be fractional
#[derive(Debug, Clone, Copy, PartialEq, Into, Serialize, Deserialize)]
pub struct Quantity(f64);

impl Quantity {
    pub fn new(value: f64) -> AppResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::validation("Quantity must be a positive number"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for Quantity {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::validation("Quantity is required"));
        }
        let value = raw
            .parse::<f64>()
            .map_err(|_| AppError::Validation(format!("'{}' is not a number", raw)))?;
        Self::new(value)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value Object - price per share in the configured currency
#[derive(Debug, Clone, Copy, PartialEq, Into, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> AppResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::Pricing(format!("{} is not a usable price", value)));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into, Serialize, Deserialize,
)]
#[display(fmt = "#{}", _0)]
pub struct InvestmentId(u64);

impl InvestmentId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Price thresholds separating the market-cap buckets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapThresholds {
    /// Strictly above this is large cap
    pub large_above: f64,
    /// Strictly above this (and not large) is mid cap
    pub mid_above: f64,
}

impl Default for CapThresholds {
    fn default() -> Self {
        Self { large_above: 1000.0, mid_above: 500.0 }
    }
}

/// Value Object - market-cap bucket derived from the current price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum MarketCap {
    #[display(fmt = "Large Cap")]
    LargeCap,
    #[display(fmt = "Mid Cap")]
    MidCap,
    #[display(fmt = "Small Cap")]
    SmallCap,
}

impl MarketCap {
    pub fn classify(price: Price, thresholds: &CapThresholds) -> Self {
        let value = price.value();
        if value > thresholds.large_above {
            MarketCap::LargeCap
        } else if value > thresholds.mid_above {
            MarketCap::MidCap
        } else {
            MarketCap::SmallCap
        }
    }

    /// Position in Large, Mid, Small order
    pub fn index(&self) -> usize {
        match self {
            MarketCap::LargeCap => 0,
            MarketCap::MidCap => 1,
            MarketCap::SmallCap => 2,
        }
    }
}
