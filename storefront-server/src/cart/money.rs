//! Money calculation utilities using rust_decimal for precision
//!
//! Totals are computed exactly. [`CartTotals::rounded`] is the only place
//! amounts are rounded: subtotal and tax go to cents half-up (midpoint away
//! from zero) and the total is their sum, so `total == subtotal + tax`
//! holds before and after rounding.

use rust_decimal::prelude::*;
use serde::Serialize;

/// Sales tax rate applied to every quote (8.25%)
pub const TAX_RATE: Decimal = Decimal::from_parts(825, 0, 0, false, 4);

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Round to cents, midpoint away from zero
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl CartTotals {
    /// `subtotal = Σ price × quantity`, `tax = subtotal × rate`, `total = subtotal + tax`
    pub fn compute(lines: impl IntoIterator<Item = (Decimal, u32)>, rate: Decimal) -> Self {
        let subtotal: Decimal = lines
            .into_iter()
            .map(|(price, quantity)| price * Decimal::from(quantity))
            .sum();
        let tax = subtotal * rate;
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    pub fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Cent-rounded amounts as persisted on orders
    pub fn rounded(&self) -> Self {
        let subtotal = round_money(self.subtotal);
        let tax = round_money(self.tax);
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_tax_rate_constant() {
        assert_eq!(TAX_RATE, dec("0.0825"));
    }

    #[test]
    fn test_exact_totals() {
        let totals = CartTotals::compute([(dec("10.00"), 2), (dec("5.00"), 3)], TAX_RATE);
        assert_eq!(totals.subtotal, dec("35.00"));
        assert_eq!(totals.tax, dec("2.8875"));
        assert_eq!(totals.total, dec("37.8875"));
    }

    #[test]
    fn test_rounded_totals() {
        let totals = CartTotals::compute([(dec("10.00"), 2), (dec("5.00"), 3)], TAX_RATE).rounded();
        assert_eq!(totals.subtotal, dec("35.00"));
        assert_eq!(totals.tax, dec("2.89"));
        assert_eq!(totals.total, dec("37.89"));
        assert_eq!(totals.total, totals.subtotal + totals.tax);
    }

    #[test]
    fn test_round_money_midpoint() {
        assert_eq!(round_money(dec("0.125")), dec("0.13"));
        assert_eq!(round_money(dec("0.124")), dec("0.12"));
        assert_eq!(round_money(dec("2.005")), dec("2.01"));
    }

    #[test]
    fn test_empty_lines() {
        let totals = CartTotals::compute(std::iter::empty(), TAX_RATE);
        assert_eq!(totals, CartTotals::zero());
    }

    #[test]
    fn test_no_float_drift() {
        let lines = std::iter::repeat_n((dec("0.10"), 1), 3);
        let totals = CartTotals::compute(lines, Decimal::ZERO);
        assert_eq!(totals.subtotal, dec("0.30"));
    }
}
