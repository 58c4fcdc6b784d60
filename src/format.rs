//! Brazilian number formatting for chart labels.

use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_SYMBOL: &str = "R$";

/// How a value is rendered in a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// `R$ 1.234,56`
    Currency,
    /// `16,82%` from a 0–1 fraction
    Percentage,
}

/// Format `value` the Brazilian way.
///
/// An absent value yields an empty string, as does a percentage whose
/// scaled value no longer fits in a [`Decimal`]. Rounding is half-to-even on
/// the exact decimal, so a value such as `2.675` becomes `2,68`; binary
/// float formatting would print `2,67` because `2.675` is stored slightly
/// below the midpoint.
pub fn format_br(value: Option<Decimal>, kind: NumberKind) -> String {
    let Some(value) = value else {
        return String::new();
    };

    match kind {
        NumberKind::Currency => {
            let (int_part, frac_part) = split_fixed2(value);
            format!("{} {},{}", CURRENCY_SYMBOL, group_thousands(&int_part), frac_part)
        }
        NumberKind::Percentage => {
            let Some(scaled) = value.checked_mul(Decimal::ONE_HUNDRED) else {
                return String::new();
            };
            let (int_part, frac_part) = split_fixed2(scaled);
            format!("{},{}%", int_part, frac_part)
        }
    }
}

/// Round to two places and split into signed integer digits and the two
/// fractional digits.
fn split_fixed2(value: Decimal) -> (String, String) {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    // -0.001 rounds to a negative zero
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }

    let text = rounded.to_string();
    match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, "00".to_string()),
    }
}

/// Insert `.` every three digits, keeping a leading sign.
fn group_thousands(int_part: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut out = String::with_capacity(int_part.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
