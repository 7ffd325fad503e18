//! Staff costing for the three staffing shapes.
//!
//! Roster members carry a statutory employer contribution derived from
//! their salary and residency status; the contribution is always rounded
//! up to the next whole currency unit.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pnl_core::{FeeSchedule, ResidencyStatus, StaffMember, StaffRoster, StaffingPlan};
//!
//! let mut roster = StaffRoster::new();
//! roster.add(StaffMember {
//!     name: "Aina".to_string(),
//!     monthly_salary: dec!(2001),
//!     residency: ResidencyStatus::Resident,
//! });
//!
//! let fees = FeeSchedule::default();
//! // 2001 × 0.12 = 240.12, rounded up to 241
//! assert_eq!(StaffingPlan::Roster(roster).monthly_cost(&fees), dec!(2242));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::{ceil_to_unit, round_half_up};
use crate::models::{FeeSchedule, StaffMember, StaffRoster, StaffingPlan};

/// Days assumed per month when costing hourly part-time staff.
///
/// Fixed at 30 regardless of the operating-days input; the model has
/// always costed part-timers against a 30-day month.
const PART_TIME_DAYS_PER_MONTH: u32 = 30;

impl StaffMember {
    /// Employer's statutory contribution, rounded up to the next whole
    /// currency unit.
    pub fn employer_contribution(&self, fees: &FeeSchedule) -> Decimal {
        ceil_to_unit(self.monthly_salary * fees.contribution_rate(self.residency))
    }

    /// Salary plus employer contribution.
    pub fn total_cost(&self, fees: &FeeSchedule) -> Decimal {
        self.monthly_salary + self.employer_contribution(fees)
    }
}

impl StaffRoster {
    /// Sum of every member's total cost.
    pub fn total_cost(&self, fees: &FeeSchedule) -> Decimal {
        self.members()
            .iter()
            .map(|member| member.total_cost(fees))
            .sum()
    }
}

impl StaffingPlan {
    /// Total monthly staff cost under this plan.
    pub fn monthly_cost(&self, fees: &FeeSchedule) -> Decimal {
        match self {
            StaffingPlan::FlatHeadcount {
                headcount,
                monthly_salary,
            } => Decimal::from(*headcount) * *monthly_salary,
            StaffingPlan::TieredHoursBased {
                full_time_count,
                full_time_salary,
                part_time_count,
                part_time_hours_per_day,
                part_time_hourly_rate,
            } => {
                let full_time = Decimal::from(*full_time_count) * *full_time_salary;
                let part_time = round_half_up(
                    Decimal::from(*part_time_count)
                        * *part_time_hours_per_day
                        * *part_time_hourly_rate
                        * Decimal::from(PART_TIME_DAYS_PER_MONTH),
                );
                full_time + part_time
            }
            StaffingPlan::Roster(roster) => roster.total_cost(fees),
        }
    }
}
