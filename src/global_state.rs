use leptos::*;
use once_cell::sync::OnceCell;
use std::collections::HashMap;

use crate::application::{InvestmentForm, Purchase};
use crate::domain::{
    errors::AppResult,
    portfolio::{Investment, InvestmentId, Portfolio, Price, Quantity, Symbol},
};

pub struct Globals {
    pub portfolio: RwSignal<Portfolio>,
    pub form: RwSignal<InvestmentForm>,
    pub form_error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub pending_quotes: RwSignal<usize>,
    pub logs: RwSignal<Vec<String>>,
    pub logs_paused: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        portfolio: create_rw_signal(Portfolio::new()),
        form: create_rw_signal(InvestmentForm::default()),
        form_error: create_rw_signal(None),
        notice: create_rw_signal(None),
        pending_quotes: create_rw_signal(0),
        logs: create_rw_signal(Vec::new()),
        logs_paused: create_rw_signal(false),
    })
}

crate::global_signals! {
    pub portfolio_signal => portfolio: Portfolio,
    pub form_signal => form: InvestmentForm,
    pub form_error_signal => form_error: Option<String>,
    pub notice_signal => notice: Option<String>,
    pub pending_quotes_signal => pending_quotes: usize,
    pub logs_signal => logs: Vec<String>,
    pub logs_paused_signal => logs_paused: bool,
}

/// Append a holding by swapping in a new list
pub fn push_investment(investment: Investment) {
    let next = portfolio_signal().with_untracked(|p| p.with_investment(investment));
    portfolio_signal().set(next);
}

/// Apply a priced top-up to the list as it is now
pub fn apply_purchase(purchase: &Purchase) -> AppResult<()> {
    let next = portfolio_signal().with_untracked(|p| purchase.apply(p))?;
    portfolio_signal().set(next);
    Ok(())
}

pub fn apply_sale(id: InvestmentId, quantity: Quantity) -> AppResult<()> {
    let next = portfolio_signal().with_untracked(|p| p.with_sale(id, quantity))?;
    portfolio_signal().set(next);
    Ok(())
}

pub fn apply_quotes(quotes: &HashMap<Symbol, Price>) {
    let next = portfolio_signal().with_untracked(|p| p.with_quotes(quotes));
    portfolio_signal().set(next);
}

/// Append a console line, keeping at most `max_lines`. Dropped while paused.
pub fn push_log(line: String, max_lines: usize) {
    if logs_paused_signal().get_untracked() {
        return;
    }
    logs_signal().update(|logs| {
        logs.push(line);
        if logs.len() > max_lines {
            let excess = logs.len() - max_lines;
            logs.drain(..excess);
        }
    });
}
