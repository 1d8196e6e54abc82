// Amount localization at the remote API boundary.
//
// The remote client divides every amount by 100 assuming a two-decimal
// subunit. Currencies without a fractional subunit must be pre-multiplied
// by 100 or the charge is collected at 1/100 of the intended amount
// (3000 JPY would reach the processor as 30 JPY). Kept in one function so
// it can be deleted when the remote contract is fixed.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::stripe::types::Money;

/// Currencies with no fractional subunit, as the remote API enumerates them.
pub const CURRENCIES_WITHOUT_FRACTIONS: [&str; 15] = [
    "BIF", "CLP", "DJF", "GNF", "JPY", "KMF", "KRW", "MGA", "PYG", "RWF", "VND", "VUV", "XAF",
    "XOF", "XPF",
];

pub fn non_fractional_currency(currency: &str) -> bool {
    CURRENCIES_WITHOUT_FRACTIONS.contains(&currency.to_ascii_uppercase().as_str())
}

/// Returns the amount to hand to the remote client. Pure; an unrecognized
/// currency takes the fractional (pass-through) path.
pub fn localized_amount(money: &Money) -> i64 {
    let amount = if non_fractional_currency(&money.currency) {
        money.amount * Decimal::from(100)
    } else {
        money.amount
    };
    amount.trunc().to_i64().unwrap_or(0)
}
