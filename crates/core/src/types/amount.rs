//! Rupee amounts for the donation flow.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in Indian rupees.
///
/// Uses decimal arithmetic so donation figures never pick up binary
/// floating-point noise. `Display` renders with Indian-system digit
/// grouping: the last three digits form one group, every group above
/// that has two digits (`₹1,00,000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupees(Decimal);

impl Rupees {
    /// Minimum accepted donation (₹100).
    pub const MINIMUM_DONATION: Self = Self(Decimal::from_parts(100, 0, 0, false, 0));

    /// Create an amount from a decimal value.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create an amount from a whole number of rupees.
    #[must_use]
    pub fn from_whole(rupees: i64) -> Self {
        Self(Decimal::from(rupees))
    }

    /// The underlying decimal value.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Whether this amount meets the donation minimum.
    #[must_use]
    pub fn meets_donation_minimum(self) -> bool {
        self >= Self::MINIMUM_DONATION
    }
}

impl std::fmt::Display for Rupees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let normalized = self.0.normalize();
        let text = normalized.abs().to_string();
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, fr)) => (i.to_owned(), Some(fr.to_owned())),
            None => (text, None),
        };

        let sign = if self.0.is_sign_negative() { "-" } else { "" };
        write!(f, "{sign}\u{20b9}{}", group_indian(&int_part))?;
        if let Some(frac) = frac_part {
            write!(f, ".{frac}")?;
        }
        Ok(())
    }
}

/// Apply Indian-system digit grouping to a bare integer string.
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_owned();
    }

    let mut out = String::with_capacity(len + len / 2);
    let head_len = len - 3;
    let head: Vec<char> = digits.chars().take(head_len).collect();

    // Two-digit groups above the final three digits; the leading group may
    // be a single digit.
    let lead = head_len % 2;
    for (i, c) in head.iter().enumerate() {
        if i != 0 && (i + 2 - lead) % 2 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out.push(',');
    out.extend(digits.chars().skip(head_len));
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_small_amounts_ungrouped() {
        assert_eq!(Rupees::from_whole(0).to_string(), "₹0");
        assert_eq!(Rupees::from_whole(100).to_string(), "₹100");
        assert_eq!(Rupees::from_whole(999).to_string(), "₹999");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(Rupees::from_whole(1_000).to_string(), "₹1,000");
        assert_eq!(Rupees::from_whole(25_000).to_string(), "₹25,000");
        assert_eq!(Rupees::from_whole(100_000).to_string(), "₹1,00,000");
        assert_eq!(Rupees::from_whole(4_500_000).to_string(), "₹45,00,000");
        assert_eq!(Rupees::from_whole(25_000_000).to_string(), "₹2,50,00,000");
    }

    #[test]
    fn test_fractional_amounts() {
        let amount = Rupees::new(Decimal::from_str("1234.50").unwrap());
        assert_eq!(amount.to_string(), "₹1,234.5");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(Rupees::from_whole(-1_000).to_string(), "-₹1,000");
    }

    #[test]
    fn test_donation_minimum() {
        assert!(Rupees::from_whole(100).meets_donation_minimum());
        assert!(Rupees::from_whole(5_000).meets_donation_minimum());
        assert!(!Rupees::from_whole(99).meets_donation_minimum());
    }
}
