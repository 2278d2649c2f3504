/// `₹1234.50` style amount with two decimals
pub fn format_money(value: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, value)
}

/// Parenthesised percentage, e.g. `(12.34%)`
pub fn format_percent(value: f64) -> String {
    format!("({:.2}%)", value)
}

/// CSS class for a profit/loss figure; break-even counts as success
pub fn profit_class(profit_loss: f64) -> &'static str {
    if profit_loss >= 0.0 { "text-success" } else { "text-error" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_keeps_sign_after_currency() {
        assert_eq!(format_money(1234.5, "₹"), "₹1234.50");
        assert_eq!(format_money(-12.346, "$"), "$-12.35");
    }

    #[test]
    fn zero_is_success() {
        assert_eq!(profit_class(0.0), "text-success");
        assert_eq!(profit_class(-0.01), "text-error");
    }
}
