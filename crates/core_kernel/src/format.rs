//! Rupiah and percentage formatting in the `id-ID` style
//!
//! Indonesian notation uses `.` for thousands grouping and `,` as the
//! decimal separator: `Rp 12.500.000`, `33,33%`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Renders an amount as whole Rupiah, e.g. `Rp 12.500.000`
///
/// # Example
///
/// ```rust
/// use core_kernel::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(12500000)), "Rp 12.500.000");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_thousands(&digits);

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Renders a percentage with two decimals, e.g. `33,33%`
pub fn format_percentage(percentage: Decimal) -> String {
    let rounded = percentage.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded);
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let (sign, whole) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole),
    };
    format!("{}{},{}%", sign, group_thousands(whole), frac)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
