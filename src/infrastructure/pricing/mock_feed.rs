use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;

use super::random::RandomSource;
use crate::domain::{
    errors::AppError,
    logging::LogComponent,
    portfolio::{Price, PriceFeed, Symbol},
};
use crate::log_debug;

/// Client-side stand-in for a market-data API: every quote is random.
pub struct MockPriceFeed<R: RandomSource> {
    random: R,
    floor: f64,
    span: f64,
    latency_ms: u32,
}

impl<R: RandomSource> MockPriceFeed<R> {
    /// Quotes fall in `[floor, floor + span)`
    pub fn new(random: R, floor: f64, span: f64) -> Self {
        Self { random, floor, span, latency_ms: 0 }
    }

    /// Delay each quote by a browser timer. Only meaningful on wasm.
    pub fn with_latency(mut self, latency_ms: u32) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    fn next_price(&self) -> Result<Price, AppError> {
        Price::new(self.floor + self.random.next_unit() * self.span)
    }
}

impl<R: RandomSource> PriceFeed for MockPriceFeed<R> {
    fn quote<'a>(&'a self, symbol: &'a Symbol) -> LocalBoxFuture<'a, Result<Price, AppError>> {
        async move {
            if self.latency_ms > 0 {
                TimeoutFuture::new(self.latency_ms).await;
            }
            let price = self.next_price()?;
            log_debug!(
                LogComponent::Infrastructure("MockPriceFeed"),
                "quoted {} at {:.2}",
                symbol,
                price.value()
            );
            Ok(price)
        }
        .boxed_local()
    }
}
