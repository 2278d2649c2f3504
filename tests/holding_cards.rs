#![cfg(target_arch = "wasm32")]

mod common;

use common::holding;
use leptos::SignalSet;
use portfolio_tracker_wasm::app::App;
use portfolio_tracker_wasm::domain::portfolio::{Portfolio, Price, Symbol};
use portfolio_tracker_wasm::global_state::{apply_quotes, portfolio_signal};
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn query(selector: &str) -> web_sys::Element {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .query_selector(selector)
        .unwrap()
        .unwrap()
}

#[wasm_bindgen_test]
fn repricing_keeps_the_card_and_its_lot_size() {
    leptos::mount_to_body(App);
    portfolio_signal().set(Portfolio::new().with_investment(holding(1, "TCS", "2024-01-10", 2.0, 1500.0)));

    let lot = query(".lot-input").dyn_into::<web_sys::HtmlInputElement>().unwrap();
    lot.set_value("5");

    let mut quotes = HashMap::new();
    quotes.insert(Symbol::new("TCS").unwrap(), Price::new(1800.0).unwrap());
    apply_quotes(&quotes);

    let after = query(".lot-input").dyn_into::<web_sys::HtmlInputElement>().unwrap();
    let first_input: &web_sys::Node = lot.as_ref();
    assert!(after.is_same_node(Some(first_input)));
    assert_eq!(after.value(), "5");
    assert_eq!(query(".current-price").text_content().unwrap(), "₹1800.00");
}
