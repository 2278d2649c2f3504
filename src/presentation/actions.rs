use leptos::spawn_local;
use leptos::{SignalGetUntracked, SignalSet, SignalUpdate};
use std::rc::Rc;

use crate::application::PortfolioService;
use crate::config::config;
use crate::domain::{
    errors::AppError,
    logging::LogComponent,
    portfolio::{InvestmentId, Quantity},
};
use crate::global_state::{
    apply_purchase, apply_quotes, apply_sale, form_error_signal, form_signal, notice_signal,
    pending_quotes_signal, portfolio_signal, push_investment,
};
use crate::infrastructure::pricing::{BrowserRandom, MockPriceFeed};
use crate::{log_info, log_warn};

pub type BrowserPortfolioService = PortfolioService<MockPriceFeed<BrowserRandom>>;

thread_local! {
    static SERVICE: Rc<BrowserPortfolioService> = {
        let cfg = config();
        let feed = MockPriceFeed::new(BrowserRandom, cfg.price_floor, cfg.price_span)
            .with_latency(cfg.quote_latency_ms);
        Rc::new(PortfolioService::new(feed))
    };
}

pub fn service() -> Rc<BrowserPortfolioService> {
    SERVICE.with(Rc::clone)
}

fn begin_quote() {
    pending_quotes_signal().update(|n| *n += 1);
}

fn end_quote() {
    pending_quotes_signal().update(|n| *n = n.saturating_sub(1));
}

fn report(err: &AppError) {
    log_warn!(LogComponent::Presentation("Actions"), "{}", err);
    notice_signal().set(Some(err.message()));
}

/// Handle "Add Investment": validate now, price asynchronously, then append
pub fn submit_form() {
    let form = form_signal().get_untracked();
    if let Err(err) = form.validate() {
        form_error_signal().set(Some(err.message()));
        return;
    }
    form_error_signal().set(None);

    begin_quote();
    spawn_local(async move {
        let result = service().submit(&form).await;
        end_quote();
        match result {
            Ok(investment) => {
                push_investment(investment);
                form_signal().update(|f| f.reset());
            }
            Err(err) => {
                log_warn!(LogComponent::Presentation("Form"), "{}", err);
                form_error_signal().set(Some(err.message()));
            }
        }
    });
}

fn parse_lot(raw: &str) -> Option<Quantity> {
    match raw.parse::<Quantity>() {
        Ok(quantity) => Some(quantity),
        Err(err) => {
            report(&err);
            None
        }
    }
}

pub fn buy_more(id: InvestmentId, lot: &str) {
    let Some(quantity) = parse_lot(lot) else { return };
    notice_signal().set(None);

    begin_quote();
    spawn_local(async move {
        let current = portfolio_signal().get_untracked();
        let priced = service().price_purchase(&current, id, quantity).await;
        end_quote();
        match priced.and_then(|purchase| apply_purchase(&purchase)) {
            Ok(()) => {
                log_info!(LogComponent::Presentation("Actions"), "bought {} more of {}", quantity, id);
            }
            Err(err) => report(&err),
        }
    });
}

pub fn sell(id: InvestmentId, lot: &str) {
    let Some(quantity) = parse_lot(lot) else { return };
    match apply_sale(id, quantity) {
        Ok(()) => {
            notice_signal().set(None);
            log_info!(LogComponent::Presentation("Actions"), "sold {} of {}", quantity, id);
        }
        Err(err) => report(&err),
    }
}

/// Re-quote every symbol held and update current prices
pub fn refresh_prices() {
    let current = portfolio_signal().get_untracked();
    if current.is_empty() {
        return;
    }

    begin_quote();
    spawn_local(async move {
        let quotes = service().quote_all(&current).await;
        end_quote();
        match quotes {
            Ok(quotes) => apply_quotes(&quotes),
            Err(err) => report(&err),
        }
    });
}
