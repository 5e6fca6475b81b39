//! Amount formatting and color tiers
//!
//! Both front ends color an amount by its magnitude: below 10 is neutral,
//! 10 up to (not including) 100 is green, 100 and above is red.

use crossterm::style::Color as TermColor;
use ratatui::style::Color as UiColor;

/// Color tier of an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountTier {
    Low,
    Mid,
    High,
}

impl AmountTier {
    /// Lower bound of the mid tier
    pub const MID_THRESHOLD: f64 = 10.0;
    /// Lower bound of the high tier
    pub const HIGH_THRESHOLD: f64 = 100.0;

    /// Classify an amount; negative amounts are `Low`
    pub fn for_amount(amount: f64) -> Self {
        if amount < Self::MID_THRESHOLD {
            Self::Low
        } else if amount < Self::HIGH_THRESHOLD {
            Self::Mid
        } else {
            Self::High
        }
    }

    /// Terminal color for plain CLI output
    pub fn term_color(self) -> TermColor {
        match self {
            Self::Low => TermColor::Reset,
            Self::Mid => TermColor::Green,
            Self::High => TermColor::Red,
        }
    }

    /// Color for the TUI
    pub fn ui_color(self) -> UiColor {
        match self {
            Self::Low => UiColor::Reset,
            Self::Mid => UiColor::Green,
            Self::High => UiColor::Red,
        }
    }
}

struct CurrencyFormat {
    symbol: &'static str,
    decimals: usize,
}

fn currency_format(code: &str) -> Option<CurrencyFormat> {
    let (symbol, decimals) = match code {
        "USD" => ("$", 2),
        "EUR" => ("€", 2),
        "GBP" => ("£", 2),
        "JPY" => ("¥", 0),
        "KRW" => ("₩", 0),
        "INR" => ("₹", 2),
        "CNY" => ("CN¥", 2),
        "CAD" => ("CA$", 2),
        "AUD" => ("A$", 2),
        "CHF" => ("CHF ", 2),
        _ => return None,
    };
    Some(CurrencyFormat { symbol, decimals })
}

/// Format an amount in the given currency, e.g. `$1,234.50` or `¥1,200`
///
/// Unknown codes fall back to `"XYZ 12.34"`.
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    let code = currency_code.trim().to_uppercase();

    if !amount.is_finite() {
        return format!("{} {}", code, amount);
    }

    let (prefix, decimals) = match currency_format(&code) {
        Some(format) => (format.symbol.to_string(), format.decimals),
        None if code.is_empty() => (String::new(), 2),
        None => (format!("{} ", code), 2),
    };

    let digits = format!("{:.*}", decimals, amount.abs());
    let is_zero = digits.chars().all(|c| c == '0' || c == '.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    format!("{}{}{}", sign, prefix, group_thousands(&digits))
}

/// Insert `,` separators into the integer part of a formatted number
fn group_thousands(digits: &str) -> String {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(digits.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(AmountTier::for_amount(9.99), AmountTier::Low);
        assert_eq!(AmountTier::for_amount(9.99 + 0.02), AmountTier::Mid);
        assert_eq!(AmountTier::for_amount(10.0), AmountTier::Mid);
        assert_eq!(AmountTier::for_amount(99.99), AmountTier::Mid);
        assert_eq!(AmountTier::for_amount(100.00), AmountTier::High);
    }

    #[test]
    fn test_negative_and_zero_are_low() {
        assert_eq!(AmountTier::for_amount(0.0), AmountTier::Low);
        assert_eq!(AmountTier::for_amount(-500.0), AmountTier::Low);
    }

    #[test]
    fn test_tier_colors() {
        assert_eq!(AmountTier::Mid.term_color(), TermColor::Green);
        assert_eq!(AmountTier::High.ui_color(), UiColor::Red);
        assert_eq!(AmountTier::Low.ui_color(), UiColor::Reset);
    }

    #[test]
    fn test_format_known_currencies() {
        assert_eq!(format_currency(4.5, "USD"), "$4.50");
        assert_eq!(format_currency(1234.5, "usd"), "$1,234.50");
        assert_eq!(format_currency(12.0, "EUR"), "€12.00");
        assert_eq!(format_currency(1200.4, "JPY"), "¥1,200");
        assert_eq!(format_currency(1_000_000.0, "GBP"), "£1,000,000.00");
    }

    #[test]
    fn test_format_negative_and_zero() {
        assert_eq!(format_currency(-4.5, "USD"), "-$4.50");
        assert_eq!(format_currency(0.0, "USD"), "$0.00");
        assert_eq!(format_currency(-0.001, "USD"), "$0.00");
    }

    #[test]
    fn test_format_unknown_currency() {
        assert_eq!(format_currency(12.345, "XYZ"), "XYZ 12.35");
        assert_eq!(format_currency(999.0, ""), "999.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456.78"), "123,456.78");
    }
}
