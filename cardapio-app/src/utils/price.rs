//! Currency display
//!
//! Amounts are shown in Brazilian reais: `.` groups thousands and `,`
//! separates cents.

use rust_decimal::{Decimal, RoundingStrategy};

/// Shown when an item has no price
pub const MISSING_PRICE: &str = "—";

/// Format an amount as reais
///
/// # Examples
///
/// ```
/// use cardapio_app::utils::price::format_brl;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_brl(Decimal::new(123450, 2)), "R$ 1.234,50");
/// assert_eq!(format_brl(Decimal::new(3, 0)), "R$ 3,00");
/// ```
pub fn format_brl(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().to_string();
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}R$ {},{cents}", group_thousands(whole))
}

/// Format an optional price; `None` renders [`MISSING_PRICE`]
pub fn format_price(price: Option<Decimal>) -> String {
    price.map(format_brl).unwrap_or_else(|| MISSING_PRICE.to_string())
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
