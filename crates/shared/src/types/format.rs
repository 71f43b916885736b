//! German-locale amount formatting.
//!
//! Report labels render amounts with `.` as thousands separator and `,` as
//! decimal separator, always with two decimal places: `1.234.567,89 €`.

use rust_decimal::{Decimal, RoundingStrategy};

use super::money::Currency;

/// Formats an amount as `1.234,56` (Banker's Rounding to two places).
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3 + 4);
    if negative {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(frac_part);
    out
}

/// Formats an amount followed by the currency symbol: `1.234,56 €`.
#[must_use]
pub fn format_money(amount: Decimal, currency: Currency) -> String {
    format!("{} {}", format_amount(amount), currency.symbol())
}
