//! Common utility functions shared across the calculation pipeline.

use rust_decimal::Decimal;

/// Rounds a monetary value to exactly two decimal places using half-up
/// rounding.
///
/// Values at exactly 0.005 are rounded away from zero, following standard
/// financial rounding conventions.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pnl_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a value up to the next whole currency unit.
///
/// Statutory contribution tables round the employer's share up, never to
/// nearest: a fractional remainder always costs a full extra unit.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pnl_core::calculations::common::ceil_to_unit;
///
/// assert_eq!(ceil_to_unit(dec!(240.00)), dec!(240));
/// assert_eq!(ceil_to_unit(dec!(240.12)), dec!(241));
/// ```
pub fn ceil_to_unit(value: Decimal) -> Decimal {
    value.ceil()
}

/// Returns the larger of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// `part` as a percentage of `whole`, rounded to two decimal places.
///
/// Returns zero when `whole` is zero or negative. The guard is a hard
/// contract of the model: margins and breakdown shares never divide by
/// zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pnl_core::calculations::common::percentage_of;
///
/// assert_eq!(percentage_of(dec!(25), dec!(200)), dec!(12.50));
/// assert_eq!(percentage_of(dec!(25), dec!(0)), dec!(0));
/// ```
pub fn percentage_of(
    part: Decimal,
    whole: Decimal,
) -> Decimal {
    if whole > Decimal::ZERO {
        round_half_up(part / whole * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    }
}
