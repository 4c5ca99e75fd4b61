//! Price display formatting.
//!
//! Prices are plain [`Decimal`] values in USD. Line items render with the
//! stored scale (a product priced `3.50` shows `$3.50`); totals always show
//! exactly two decimal places.

use rust_decimal::Decimal;

/// Format a single price as it is stored, with a dollar sign.
#[must_use]
pub fn display_price(amount: Decimal) -> String {
    format!("${amount}")
}

/// Format a computed total with exactly two decimal places.
#[must_use]
pub fn display_total(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}
