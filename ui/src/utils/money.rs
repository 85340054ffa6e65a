use payloads::pricing::{amount_or_zero, round2};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Format an amount for display with exactly two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round2(amount))
}

/// Parse a staff-entered amount. Blank or malformed input degrades to
/// zero so a half-typed adjustment never blocks a preview.
pub fn parse_amount(value: &str) -> Decimal {
    amount_or_zero(Decimal::from_str(value.trim()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn formats_two_decimal_places() {
        assert_eq!(format_amount(dec!(58.76)), "58.76");
        assert_eq!(format_amount(dec!(100)), "100.00");
        assert_eq!(format_amount(dec!(2.005)), "2.01");
    }

    #[test]
    fn malformed_amounts_parse_as_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount(" 2.50 "), dec!(2.50));
    }
}
