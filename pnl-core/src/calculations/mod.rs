//! Calculation modules for the monthly profit-and-loss worksheet.
//!
//! Each stage of the pipeline lives in its own module: sales aggregation,
//! rent resolution, staff costing, cost/profit aggregation, and the
//! investment-recovery projection.

pub mod common;
pub mod pnl;
pub mod rent;
pub mod roi;
pub mod sales;
pub mod staffing;

pub use pnl::{CostBreakdownEntry, CostCategory, PnlInput, PnlResult, PnlWorksheet};
pub use rent::{RentCharge, RentPolicy, RentResolver};
pub use roi::{InvestmentProjection, PaybackPeriod, RecoveryPoint, project_recovery};
pub use sales::{SalesSummary, aggregate_sales};
