mod fee_schedule;
mod lease_year;
mod sales_inputs;
mod signing_period;
mod staffing;
mod tenancy_term;

pub use fee_schedule::{FeeSchedule, FeeScheduleError};
pub use lease_year::LeaseYear;
pub use sales_inputs::SalesInputs;
pub use signing_period::{SigningPeriod, parse_month};
pub use staffing::{ResidencyStatus, StaffMember, StaffRoster, StaffingPlan};
pub use tenancy_term::TenancyTerm;
