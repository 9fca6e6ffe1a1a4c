//! Formatting helpers

use rust_decimal::{Decimal, RoundingStrategy};

/// Group the digits of an integer string with `separator` every three places
pub fn group_thousands(digits: &str, separator: &str) -> String {
    let mut result = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push_str(&separator.chars().rev().collect::<String>());
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

/// Render an amount as `-$1,234.50`
pub fn format_amount(amount: Decimal, symbol: &str, decimal_places: u32, separator: &str) -> String {
    let rounded = amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let plain = format!("{:.*}", decimal_places as usize, rounded.abs());

    let (whole, fraction) = match plain.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut out = format!("{}{}{}", sign, symbol, group_thousands(whole, separator));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", ","), "1");
        assert_eq!(group_thousands("1000", ","), "1,000");
        assert_eq!(group_thousands("1234567", " "), "1 234 567");
    }

    #[test]
    fn test_format_amount() {
        let amount = Decimal::from_str("1234.5").unwrap();
        assert_eq!(format_amount(amount, "$", 2, ","), "$1,234.50");
    }

    #[test]
    fn test_format_amount_negative_and_rounding() {
        let amount = Decimal::from_str("-9876543.215").unwrap();
        assert_eq!(format_amount(amount, "€", 2, "."), "-€9.876.543.22");
    }

    #[test]
    fn test_format_amount_no_decimals() {
        assert_eq!(format_amount(Decimal::new(4999, 2), "", 0, ","), "50");
    }
}
