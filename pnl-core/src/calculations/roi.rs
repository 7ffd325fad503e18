//! Investment-recovery projection.
//!
//! A scenario lands in one of two terminal classes. When the monthly net
//! profit is zero or negative the payback is the `Never` sentinel and no
//! recovery curve is produced; the renderer must say "not profitable"
//! instead of charting garbage. When profitable, the payback period is a
//! straight division and the recovery curve extrapolates the fixed monthly
//! profit, capped at five years.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pnl_core::calculations::roi::{PaybackPeriod, project_recovery};
//!
//! let projection = project_recovery(dec!(150000), dec!(6357.12));
//!
//! assert_eq!(projection.payback, PaybackPeriod::Months(dec!(23.60)));
//! assert_eq!(projection.annual_roi, dec!(50.86));
//! assert_eq!(projection.recovery.len(), 36);
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{max, round_half_up};

/// Hard cap on the recovery curve, in months.
pub const RECOVERY_CAP_MONTHS: u32 = 60;

/// Months of runway shown past the payback point.
const RECOVERY_TAIL_MONTHS: u32 = 12;

/// Time until the initial investment is recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaybackPeriod {
    /// Net profit is zero or negative; the investment is never recovered.
    Never,
    /// Recovered after this many months of steady profit.
    Months(Decimal),
}

impl PaybackPeriod {
    pub fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }

    pub fn months(&self) -> Option<Decimal> {
        match self {
            Self::Never => None,
            Self::Months(months) => Some(*months),
        }
    }

    /// Payback expressed in years.
    pub fn years(&self) -> Option<Decimal> {
        self.months()
            .map(|months| round_half_up(months / Decimal::from(12)))
    }
}

/// One month on the recovery curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryPoint {
    /// Month number, starting at 1.
    pub month: u32,
    /// Net profit accumulated through this month.
    pub cumulative_profit: Decimal,
    /// Portion of the investment recovered so far (capped at the investment).
    pub recovered: Decimal,
    /// Investment still outstanding (floored at zero).
    pub remaining: Decimal,
}

/// Payback metrics plus the monthly recovery curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentProjection {
    pub initial_investment: Decimal,
    pub payback: PaybackPeriod,
    /// Yearly net profit as a percent of the investment; zero when not
    /// profitable.
    pub annual_roi: Decimal,
    /// Empty when not profitable; otherwise capped at
    /// [`RECOVERY_CAP_MONTHS`] entries.
    pub recovery: Vec<RecoveryPoint>,
}

/// Projects how the initial investment is recovered from a fixed monthly
/// net profit.
pub fn project_recovery(
    initial_investment: Decimal,
    net_profit: Decimal,
) -> InvestmentProjection {
    if net_profit <= Decimal::ZERO {
        debug!("not profitable, skipping recovery projection");
        return InvestmentProjection {
            initial_investment,
            payback: PaybackPeriod::Never,
            annual_roi: Decimal::ZERO,
            recovery: Vec::new(),
        };
    }

    if initial_investment <= Decimal::ZERO {
        // Nothing to recover; payback is immediate.
        return InvestmentProjection {
            initial_investment,
            payback: PaybackPeriod::Months(Decimal::ZERO),
            annual_roi: Decimal::ZERO,
            recovery: Vec::new(),
        };
    }

    let payback_months = round_half_up(initial_investment / net_profit);
    let annual_roi = round_half_up(
        net_profit * Decimal::from(12) / initial_investment * Decimal::ONE_HUNDRED,
    );

    let recovery = recovery_curve(initial_investment, net_profit, payback_months);

    InvestmentProjection {
        initial_investment,
        payback: PaybackPeriod::Months(payback_months),
        annual_roi,
        recovery,
    }
}

/// Builds the monthly curve out to payback plus a year, capped at five
/// years.
fn recovery_curve(
    initial_investment: Decimal,
    net_profit: Decimal,
    payback_months: Decimal,
) -> Vec<RecoveryPoint> {
    let horizon = payback_months
        .ceil()
        .to_u32()
        .unwrap_or(RECOVERY_CAP_MONTHS)
        .saturating_add(RECOVERY_TAIL_MONTHS)
        .min(RECOVERY_CAP_MONTHS);

    (1..=horizon)
        .map(|month| {
            let cumulative_profit = net_profit * Decimal::from(month);
            RecoveryPoint {
                month,
                cumulative_profit,
                recovered: initial_investment.min(cumulative_profit),
                remaining: max(initial_investment - cumulative_profit, Decimal::ZERO),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // payback tests
    // =========================================================================

    #[test]
    fn payback_is_investment_over_profit() {
        let projection = project_recovery(dec!(150000), dec!(6357.12));

        assert_eq!(projection.payback.months(), Some(dec!(23.60)));
        assert_eq!(projection.payback.years(), Some(dec!(1.97)));
    }

    #[test]
    fn annual_roi_scales_profit_to_a_year() {
        let projection = project_recovery(dec!(150000), dec!(6357.12));

        // 6357.12 × 12 / 150000 × 100
        assert_eq!(projection.annual_roi, dec!(50.86));
    }

    #[test]
    fn zero_profit_is_never_recovered() {
        let projection = project_recovery(dec!(150000), dec!(0));

        assert!(projection.payback.is_never());
        assert_eq!(projection.payback.months(), None);
        assert_eq!(projection.payback.years(), None);
        assert_eq!(projection.annual_roi, dec!(0));
        assert!(projection.recovery.is_empty());
    }

    #[test]
    fn negative_profit_is_never_recovered() {
        let projection = project_recovery(dec!(150000), dec!(-500));

        assert!(projection.payback.is_never());
        assert!(projection.recovery.is_empty());
    }

    #[test]
    fn zero_investment_pays_back_immediately() {
        let projection = project_recovery(dec!(0), dec!(1000));

        assert_eq!(projection.payback.months(), Some(dec!(0)));
        assert!(projection.recovery.is_empty());
    }

    // =========================================================================
    // recovery curve tests
    // =========================================================================

    #[test]
    fn curve_runs_a_year_past_payback() {
        let projection = project_recovery(dec!(150000), dec!(6357.12));

        // ceil(23.60) + 12
        assert_eq!(projection.recovery.len(), 36);
    }

    #[test]
    fn curve_never_exceeds_the_five_year_cap() {
        // Payback of 150 months still caps at 60 entries.
        let projection = project_recovery(dec!(150000), dec!(1000));

        assert_eq!(projection.recovery.len(), RECOVERY_CAP_MONTHS as usize);
    }

    #[test]
    fn curve_caps_recovered_at_the_investment() {
        let projection = project_recovery(dec!(150000), dec!(6357.12));

        let month_24 = &projection.recovery[23];
        assert_eq!(month_24.month, 24);
        assert_eq!(month_24.cumulative_profit, dec!(152570.88));
        assert_eq!(month_24.recovered, dec!(150000));
        assert_eq!(month_24.remaining, dec!(0));
    }

    #[test]
    fn curve_floors_remaining_at_zero_and_tracks_the_shortfall() {
        let projection = project_recovery(dec!(150000), dec!(6357.12));

        let month_23 = &projection.recovery[22];
        assert_eq!(month_23.cumulative_profit, dec!(146213.76));
        assert_eq!(month_23.recovered, dec!(146213.76));
        assert_eq!(month_23.remaining, dec!(3786.24));
    }

    #[test]
    fn curve_months_are_sequential_from_one() {
        let projection = project_recovery(dec!(10000), dec!(5000));

        let months: Vec<u32> = projection.recovery.iter().map(|p| p.month).collect();
        assert_eq!(months, (1..=14).collect::<Vec<u32>>());
    }
}
