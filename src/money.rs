//! Rupiah amounts

use rusty_money::{Formatter, Money, Params, iso};

/// Builds a whole-Rupiah amount.
#[must_use]
pub fn rupiah(amount: i64) -> Money<'static, iso::Currency> {
    Money::from_major(amount, iso::IDR)
}

/// Formats an amount the way the storefront displays prices: `Rp` prefix,
/// dot-grouped thousands, no decimal digits (`Rp45.000`).
///
/// The default [`Money`] display for IDR keeps two decimal digits, so this
/// goes through [`Formatter`] with explicit params instead.
#[must_use]
pub fn format_rupiah(amount: &Money<'_, iso::Currency>) -> String {
    Formatter::money(
        amount,
        Params {
            digit_separator: '.',
            rounding: Some(0),
            symbol: Some("Rp"),
            ..Params::default()
        },
    )
}
