use leptos::html::Canvas;
use leptos::*;

use crate::config::config;
use crate::domain::{
    chart::ChartDatasetService,
    errors::RenderingResult,
    logging::{LogComponent, LogEntry, LogLevel, Logger, get_logger},
    portfolio::{Investment, InvestmentId, Portfolio, PortfolioAnalysisService},
};
use crate::global_state::{
    form_error_signal, form_signal, logs_paused_signal, logs_signal, notice_signal,
    pending_quotes_signal, portfolio_signal, push_log,
};
use crate::infrastructure::{rendering::CanvasRenderer, services::ConsoleLogger};
use crate::log_error;
use crate::presentation::{
    actions,
    formatting::{format_money, format_percent, profit_class},
};

/// Bridge logger: writes to the browser console and the debug console signal
pub struct LeptosLogger {
    console: ConsoleLogger,
    max_lines: usize,
}

impl LeptosLogger {
    pub fn new(min_level: LogLevel, max_lines: usize) -> Self {
        Self { console: ConsoleLogger::new(min_level), max_lines }
    }
}

impl Logger for LeptosLogger {
    fn log(&self, entry: LogEntry) {
        if !self.console.enabled(entry.level) {
            return;
        }
        push_log(entry.format_line(), self.max_lines);
        self.console.log(entry);
    }
}

const STYLE: &str = r#"
.portfolio-app {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    background: #f2f2f7;
    min-height: 100vh;
    padding: 32px;
    color: #1f2937;
}
.grid-2 { display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 32px; margin-bottom: 32px; }
.card { background: #ffffff; border-radius: 16px; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08); padding: 16px; }
.card h2 { font-size: 20px; font-weight: 700; margin: 0 0 16px; }
.summary { display: flex; gap: 40px; justify-content: center; margin-bottom: 32px; }
.summary-value { font-size: 22px; font-weight: 700; text-align: center; }
.summary-label { font-size: 12px; color: #6b7280; text-align: center; margin-top: 4px; }
.form-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; }
.input { border: 1px solid #d1d5db; border-radius: 8px; padding: 10px 12px; font-size: 14px; }
.btn { border: none; border-radius: 8px; padding: 10px 16px; font-weight: 600; cursor: pointer; color: #ffffff; }
.btn-primary { background: #4f46e5; grid-column: 1 / -1; }
.btn-sm { padding: 6px 10px; font-size: 12px; }
.btn-success { background: #16a34a; }
.btn-error { background: #dc2626; }
.btn-ghost { background: #e5e7eb; color: #1f2937; }
.form-error, .notice { color: #dc2626; margin-top: 8px; font-size: 14px; }
.holdings { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 16px; }
.holdings-header { display: flex; justify-content: space-between; align-items: center; margin: 32px 0 16px; }
.card-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
.card-grid p { margin: 4px 0; }
.card-actions { display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px; }
.lot-input { width: 72px; }
.text-success { color: #16a34a; }
.text-error { color: #dc2626; }
.debug-console { background: #111827; color: #e5e7eb; border-radius: 10px; padding: 12px; margin-top: 32px; max-height: 260px; overflow-y: auto; }
.debug-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px; font-weight: 700; }
.log-line { font-family: 'Courier New', monospace; font-size: 11px; line-height: 1.3; }
"#;

#[component]
pub fn App() -> impl IntoView {
    let refresh_ms = config().auto_refresh_ms;
    if refresh_ms > 0 {
        gloo::timers::callback::Interval::new(refresh_ms, actions::refresh_prices).forget();
    }

    view! {
        <style>{STYLE}</style>
        <div class="portfolio-app">
            <PortfolioSummary />
            <ChartsSection />
            <AddInvestmentForm />
            <InvestmentList />
            <DebugConsole />
        </div>
    }
}

/// Totals across all holdings
#[component]
fn PortfolioSummary() -> impl IntoView {
    let portfolio = portfolio_signal();
    let analysis = PortfolioAnalysisService::new(config().cap_thresholds());
    let summary = create_memo(move |_| portfolio.with(|p| analysis.summarize(p)));
    let currency = config().currency.clone();
    let money = move |value: f64| format_money(value, &currency);

    let invested = {
        let money = money.clone();
        move || money(summary.get().invested)
    };
    let value = {
        let money = money.clone();
        move || money(summary.get().market_value)
    };
    let profit_loss = move || money(summary.get().profit_loss);

    view! {
        <div class="card summary">
            <div>
                <div class="summary-value">{move || summary.get().holdings}</div>
                <div class="summary-label">"Holdings"</div>
            </div>
            <div>
                <div class="summary-value">{invested}</div>
                <div class="summary-label">"Invested"</div>
            </div>
            <div>
                <div class="summary-value">{value}</div>
                <div class="summary-label">"Current Value"</div>
            </div>
            <div>
                <div class=move || format!("summary-value {}", profit_class(summary.get().profit_loss))>
                    {profit_loss}
                    " "
                    {move || summary.get().profit_loss_percent.map(format_percent).unwrap_or_default()}
                </div>
                <div class="summary-label">"P/L"</div>
            </div>
        </div>
    }
}

fn render_charts(line: &web_sys::HtmlCanvasElement, pie: &web_sys::HtmlCanvasElement, portfolio: &Portfolio) -> RenderingResult<()> {
    let cfg = config();
    let datasets = ChartDatasetService::new(PortfolioAnalysisService::new(cfg.cap_thresholds()));

    CanvasRenderer::for_canvas(line, cfg.chart_width, cfg.chart_height, &cfg.currency)?
        .render_line_chart(&datasets.portfolio_growth(portfolio))?;
    CanvasRenderer::for_canvas(pie, cfg.chart_width, cfg.chart_height, &cfg.currency)?
        .render_pie_chart(&datasets.market_cap_allocation(portfolio))
}

/// Line and pie canvases, redrawn whenever the holdings change
#[component]
fn ChartsSection() -> impl IntoView {
    let line_ref = create_node_ref::<Canvas>();
    let pie_ref = create_node_ref::<Canvas>();
    let portfolio = portfolio_signal();

    create_effect(move |_| {
        let (Some(line), Some(pie)) = (line_ref.get(), pie_ref.get()) else {
            return;
        };
        portfolio.with(|p| {
            if let Err(e) = render_charts(&line, &pie, p) {
                log_error!(LogComponent::Presentation("ChartsSection"), "{}", e);
            }
        });
    });

    view! {
        <div class="grid-2">
            <div class="card">
                <h2>"Portfolio Growth"</h2>
                <canvas id="growth-chart" node_ref=line_ref />
            </div>
            <div class="card">
                <h2>"Market Cap Allocation"</h2>
                <canvas id="allocation-chart" node_ref=pie_ref />
            </div>
        </div>
    }
}

#[component]
fn AddInvestmentForm() -> impl IntoView {
    let form = form_signal();
    let form_error = form_error_signal();
    let pending = pending_quotes_signal();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        actions::submit_form();
    };

    view! {
        <div class="card">
            <h2>"Add New Investment"</h2>
            <form class="form-grid" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Stock Symbol (e.g., RELIANCE)"
                    class="input"
                    required=true
                    prop:value=move || form.with(|f| f.symbol.clone())
                    on:input=move |ev| form.update(|f| f.symbol = event_target_value(&ev))
                />
                <input
                    type="date"
                    class="input"
                    required=true
                    prop:value=move || form.with(|f| f.date.clone())
                    on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder="Quantity"
                    class="input"
                    min="0"
                    step="any"
                    required=true
                    prop:value=move || form.with(|f| f.quantity.clone())
                    on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">
                    {move || match pending.get() {
                        0 => "Add Investment".to_string(),
                        n => format!("Fetching prices ({})...", n),
                    }}
                </button>
            </form>
            <Show when=move || form_error.with(Option::is_some)>
                <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[component]
fn InvestmentList() -> impl IntoView {
    let portfolio = portfolio_signal();
    let notice = notice_signal();

    view! {
        <div class="holdings-header">
            <h2>"Holdings"</h2>
            <button class="btn btn-sm btn-ghost" on:click=move |_| actions::refresh_prices()>
                "Refresh Prices"
            </button>
        </div>
        <Show when=move || notice.with(Option::is_some)>
            <p class="notice">{move || notice.get().unwrap_or_default()}</p>
        </Show>
        <div class="holdings">
            <For
                each=move || portfolio.with(|p| p.investments().to_vec())
                key=|inv| inv.id
                children=move |inv| view! { <InvestmentCard id=inv.id /> }
            />
        </div>
    }
}

/// One holding with synthetic P/L and Buy More / Sell actions.
///
/// Keyed by id only; figures come from the live list so the typed lot size
/// survives repricing.
#[component]
fn InvestmentCard(id: InvestmentId) -> impl IntoView {
    let portfolio = portfolio_signal();
    let holding = create_memo(move |_| portfolio.with(|p| p.get(id).cloned()));
    let currency = config().currency.as_str();
    let lot = create_rw_signal("1".to_string());

    let show = move |field: fn(&Investment, &str) -> String| {
        move || holding.with(|inv| inv.as_ref().map(|inv| field(inv, currency)).unwrap_or_default())
    };

    view! {
        <div class="card">
            <h2>{show(|inv, _| inv.symbol.to_string())}</h2>
            <div class="card-grid">
                <div>
                    <p>"Quantity: " {show(|inv, _| inv.quantity.to_string())}</p>
                    <p>"Trade Date: " {show(|inv, _| inv.trade_date.to_string())}</p>
                    <p>"Buy Price: " {show(|inv, cur| format_money(inv.buy_price.value(), cur))}</p>
                    <p>"Current Price: " <span class="current-price">{show(|inv, cur| format_money(inv.current_price.value(), cur))}</span></p>
                </div>
                <div class=show(|inv, _| profit_class(inv.profit_loss()).to_string())>
                    <p>"P/L: " {show(|inv, cur| format_money(inv.profit_loss(), cur))}</p>
                    <p>{show(|inv, _| format_percent(inv.profit_loss_percent()))}</p>
                </div>
            </div>
            <div class="card-actions">
                <input
                    type="number"
                    class="input lot-input"
                    min="0"
                    step="any"
                    prop:value=move || lot.get()
                    on:input=move |ev| lot.set(event_target_value(&ev))
                />
                <button class="btn btn-sm btn-success" on:click=move |_| actions::buy_more(id, &lot.get_untracked())>
                    "Buy More"
                </button>
                <button class="btn btn-sm btn-error" on:click=move |_| actions::sell(id, &lot.get_untracked())>
                    "Sell"
                </button>
            </div>
        </div>
    }
}

/// Debug console fed by the domain logger
#[component]
fn DebugConsole() -> impl IntoView {
    let logs = logs_signal();
    let is_paused = logs_paused_signal();

    view! {
        <div class="debug-console">
            <div class="debug-header">
                <span>"Log Console"</span>
                <div>
                    <button
                        class="btn btn-sm btn-ghost"
                        on:click=move |_| {
                            let paused = !is_paused.get_untracked();
                            if paused {
                                get_logger().info(LogComponent::Presentation("DebugConsole"), "Logging paused");
                            }
                            is_paused.set(paused);
                            if !paused {
                                get_logger().info(LogComponent::Presentation("DebugConsole"), "Logging resumed");
                            }
                        }
                    >
                        {move || if is_paused.get() { "Resume" } else { "Pause" }}
                    </button>
                    " "
                    <button class="btn btn-sm btn-ghost" on:click=move |_| logs.set(Vec::new())>
                        "Clear"
                    </button>
                </div>
            </div>
            <For
                each=move || logs.get().into_iter().enumerate()
                key=|(i, line)| (*i, line.clone())
                children=move |(_, line)| view! { <div class="log-line">{line}</div> }
            />
        </div>
    }
}
