use js_sys::Promise;
use leptos::SignalGetUntracked;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use super::actions::{refresh_prices, service};
use crate::application::InvestmentForm;
use crate::config::config;
use crate::domain::portfolio::{Investment, PortfolioAnalysisService, PortfolioSummary};
use crate::global_state::{portfolio_signal, push_investment};

/// JS bridge: the same operations as the UI, callable from the console

#[derive(Serialize)]
struct Snapshot<'a> {
    investments: &'a [Investment],
    summary: PortfolioSummary,
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Add a holding; resolves to the new investment as JSON
#[wasm_bindgen(js_name = addInvestment)]
pub fn add_investment(symbol: String, date: String, quantity: String) -> Promise {
    future_to_promise(async move {
        let form = InvestmentForm { symbol, date, quantity };
        let investment = service().submit(&form).await.map_err(to_js)?;
        let json = serde_json::to_string(&investment).map_err(to_js)?;
        push_investment(investment);
        Ok(JsValue::from_str(&json))
    })
}

/// Holdings plus totals as a JSON string
#[wasm_bindgen(js_name = portfolioSnapshot)]
pub fn portfolio_snapshot() -> Result<String, JsValue> {
    let portfolio = portfolio_signal().get_untracked();
    let summary = PortfolioAnalysisService::new(config().cap_thresholds()).summarize(&portfolio);
    serde_json::to_string(&Snapshot { investments: portfolio.investments(), summary }).map_err(to_js)
}

#[wasm_bindgen(js_name = refreshPrices)]
pub fn refresh_prices_js() {
    refresh_prices();
}
