//! Sales aggregation: apportions operating days into weekday and weekend
//! counts and derives the monthly revenue.
//!
//! The apportionment is anchored to a 28-day reference cycle of 20 weekdays
//! and 8 weekend days. Up to 28 operating days the cycle is scaled down;
//! beyond 28 the extra days are split in the same 20:8 proportion. The
//! weekday count is floored and the weekend count takes the remainder, so
//! the split always sums to the operating-day count.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pnl_core::SalesInputs;
//! use pnl_core::calculations::aggregate_sales;
//!
//! let summary = aggregate_sales(&SalesInputs {
//!     weekday_sales: dec!(500),
//!     weekend_sales: dec!(900),
//!     operating_days: 30,
//! });
//!
//! assert_eq!(summary.weekday_days, 21);
//! assert_eq!(summary.weekend_days, 9);
//! assert_eq!(summary.monthly_revenue, dec!(18600.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::SalesInputs;

const REFERENCE_CYCLE_DAYS: u32 = 28;
const REFERENCE_WEEKDAYS: u32 = 20;

/// Result of sales aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummary {
    /// Weekday trading days apportioned from the operating-day count.
    pub weekday_days: u32,
    /// Weekend trading days; the remainder of the split.
    pub weekend_days: u32,
    /// Monthly revenue across both day classes.
    pub monthly_revenue: Decimal,
}

/// Aggregates the caller's sales inputs into a monthly revenue figure.
///
/// Pure: no side effects, no error conditions. Inputs are pre-validated by
/// the caller's range constraints.
pub fn aggregate_sales(inputs: &SalesInputs) -> SalesSummary {
    let (weekday_days, weekend_days) = split_operating_days(inputs.operating_days);

    let monthly_revenue = round_half_up(
        inputs.weekday_sales * Decimal::from(weekday_days)
            + inputs.weekend_sales * Decimal::from(weekend_days),
    );

    SalesSummary {
        weekday_days,
        weekend_days,
        monthly_revenue,
    }
}

/// Splits operating days into (weekday, weekend) counts.
fn split_operating_days(days: u32) -> (u32, u32) {
    let weekday_days = if days <= REFERENCE_CYCLE_DAYS {
        days * REFERENCE_WEEKDAYS / REFERENCE_CYCLE_DAYS
    } else {
        let extra = days - REFERENCE_CYCLE_DAYS;
        REFERENCE_WEEKDAYS + extra * REFERENCE_WEEKDAYS / REFERENCE_CYCLE_DAYS
    };
    // Weekend days take the remainder: every operating day is counted once.
    (weekday_days, days - weekday_days)
}
