use portfolio_tracker_wasm::application::InvestmentForm;
use portfolio_tracker_wasm::domain::errors::AppError;

fn rejection(form: &InvestmentForm) -> String {
    match form.validate() {
        Err(AppError::Validation(msg)) => msg,
        other => panic!("expected a validation error, got {:?}", other),
    }
}

#[test]
fn valid_form_becomes_an_order() {
    let order = InvestmentForm::new("reliance", "2024-05-17", "12").validate().unwrap();
    assert_eq!(order.symbol.value(), "RELIANCE");
    assert_eq!(order.trade_date.to_string(), "2024-05-17");
    assert_eq!(order.quantity.value(), 12.0);
}

#[test]
fn fractional_quantities_are_accepted() {
    let order = InvestmentForm::new("TCS", "2024-05-17", "0.5").validate().unwrap();
    assert_eq!(order.quantity.to_string(), "0.5");
}

#[test]
fn first_bad_field_is_reported() {
    assert_eq!(rejection(&InvestmentForm::new(" ", "", "")), "Stock symbol is required");
    assert_eq!(rejection(&InvestmentForm::new("TCS", "", "1")), "Trade date is required");
    assert_eq!(rejection(&InvestmentForm::new("TCS", "2024-05-17", "")), "Quantity is required");
}

#[test]
fn malformed_values_are_rejected() {
    assert!(rejection(&InvestmentForm::new("TCS", "17/05/2024", "1")).contains("YYYY-MM-DD"));
    assert!(rejection(&InvestmentForm::new("TCS", "2024-13-01", "1")).contains("Month 13"));
    assert!(rejection(&InvestmentForm::new("TCS", "2023-02-29", "1")).contains("Day 29"));
    assert_eq!(rejection(&InvestmentForm::new("TCS", "2024-05-17", "abc")), "'abc' is not a number");
    assert_eq!(
        rejection(&InvestmentForm::new("TCS", "2024-05-17", "-3")),
        "Quantity must be a positive number"
    );
    assert_eq!(
        rejection(&InvestmentForm::new("TCS", "2024-05-17", "0")),
        "Quantity must be a positive number"
    );
}

#[test]
fn reset_clears_every_field() {
    let mut form = InvestmentForm::new("TCS", "2024-05-17", "3");
    form.reset();
    assert_eq!(form, InvestmentForm::default());
}
