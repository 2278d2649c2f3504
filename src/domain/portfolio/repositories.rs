use futures::future::LocalBoxFuture;

use super::value_objects::{Price, Symbol};
use crate::domain::errors::AppError;

/// Source of current prices for a symbol
pub trait PriceFeed {
    fn quote<'a>(&'a self, symbol: &'a Symbol) -> LocalBoxFuture<'a, Result<Price, AppError>>;
}
