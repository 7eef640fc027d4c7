//! Currency display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency prefix, followed by a non-breaking space.
const RUPIAH_PREFIX: &str = "Rp\u{a0}";

/// Formats an amount as Indonesian Rupiah.
///
/// Uses `.` as the thousands separator and `,` as the decimal separator.
/// Fraction digits are shown only when present, rounded half away from zero
/// to at most two.
///
/// ```
/// use cart_store::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::from(1_250_000)), "Rp\u{a0}1.250.000");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + 8);
    out.push_str(sign);
    out.push_str(RUPIAH_PREFIX);
    out.push_str(&group_thousands(whole));
    if let Some(fraction) = fraction {
        out.push(',');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
