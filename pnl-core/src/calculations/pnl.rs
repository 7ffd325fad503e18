//! Cost and profit aggregation: the monthly profit-and-loss worksheet.
//!
//! # Worksheet structure
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Monthly revenue (from the sales aggregator) |
//! | 2    | Total rent, sales tax included (from the rent resolver) |
//! | 3    | Staff cost (from the staffing plan) |
//! | 4    | Utilities (electricity + water) |
//! | 5    | Technology fee, converted at the manual exchange rate |
//! | 6    | Royalty: configured percent of revenue |
//! | 7    | Marketing levy: configured percent of revenue |
//! | 8    | Total fixed costs (Lines 2–7) |
//! | 9    | Net profit (Line 1 − Line 8) |
//! | 10   | Profit margin (Line 9 / Line 1, zero-guarded) |
//! | 11   | Adjusted profit (Line 9 + monthly renovation benefit) |
//! | 12   | Adjusted margin (Line 11 / Line 1, zero-guarded) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pnl_core::FeeSchedule;
//! use pnl_core::calculations::pnl::{PnlInput, PnlWorksheet};
//! use pnl_core::calculations::rent::RentCharge;
//!
//! let fees = FeeSchedule::default();
//! let input = PnlInput {
//!     monthly_revenue: dec!(18600),
//!     rent: RentCharge {
//!         flat_rent: dec!(5661.00),
//!         turnover_rent: Some(dec!(1395.00)),
//!         base_rent: dec!(5661.00),
//!         sales_tax: dec!(452.88),
//!         total_rent: dec!(6113.88),
//!         renovation_savings: dec!(16983.00),
//!         monthly_renovation_benefit: dec!(1415.25),
//!     },
//!     staff_cost: dec!(4076),
//!     electricity: dec!(300),
//!     water: dec!(100),
//! };
//!
//! let result = PnlWorksheet::new(&fees).calculate(&input);
//!
//! assert_eq!(result.total_fixed_costs, dec!(12242.88));
//! assert_eq!(result.net_profit, dec!(6357.12));
//! assert_eq!(result.profit_margin, dec!(34.18));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{percentage_of, round_half_up};
use crate::calculations::rent::RentCharge;
use crate::models::FeeSchedule;

/// Cost categories reported in the monthly breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostCategory {
    Rent,
    SalesTax,
    Staff,
    Utilities,
    TechFee,
    Royalties,
    Marketing,
}

impl CostCategory {
    pub fn all() -> &'static [CostCategory] {
        &[
            CostCategory::Rent,
            CostCategory::SalesTax,
            CostCategory::Staff,
            CostCategory::Utilities,
            CostCategory::TechFee,
            CostCategory::Royalties,
            CostCategory::Marketing,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rent => "Rent",
            Self::SalesTax => "Sales Tax",
            Self::Staff => "Staff",
            Self::Utilities => "Utilities",
            Self::TechFee => "Tech Fee",
            Self::Royalties => "Royalties",
            Self::Marketing => "Marketing",
        }
    }
}

/// One row of the cost breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdownEntry {
    pub category: CostCategory,
    pub amount: Decimal,
    /// Share of total fixed costs; zero when total costs are zero.
    pub percentage: Decimal,
}

/// Input values for the profit-and-loss worksheet.
///
/// Upstream stages produce these: the sales aggregator the revenue, the
/// rent resolver the rent charge, the staffing plan the staff cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PnlInput {
    pub monthly_revenue: Decimal,
    pub rent: RentCharge,
    pub staff_cost: Decimal,
    pub electricity: Decimal,
    pub water: Decimal,
}

/// Result of the profit-and-loss worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PnlResult {
    pub monthly_revenue: Decimal,

    /// Base rent actually charged (flat or turnover).
    pub base_rent: Decimal,
    /// Sales/service tax on the base rent.
    pub sales_tax: Decimal,
    /// Base rent plus sales tax.
    pub total_rent: Decimal,

    pub staff_cost: Decimal,
    /// Electricity and water combined.
    pub utilities: Decimal,
    /// Technology fee converted into local currency.
    pub tech_fee_local: Decimal,
    /// Royalty charged as a percent of revenue.
    pub royalty_fee: Decimal,
    /// Marketing levy charged as a percent of revenue.
    pub marketing_fee: Decimal,

    pub total_fixed_costs: Decimal,
    pub net_profit: Decimal,
    /// Net profit over revenue; zero when revenue is zero.
    pub profit_margin: Decimal,

    /// Value of the Year-1 rent-free period (zero for later years).
    pub renovation_savings: Decimal,
    /// Renovation savings spread over 12 months.
    pub monthly_renovation_benefit: Decimal,
    /// Net profit plus the monthly renovation benefit.
    pub adjusted_profit: Decimal,
    /// Adjusted profit over revenue; zero when revenue is zero.
    pub adjusted_margin: Decimal,
}

/// Calculator for the monthly profit-and-loss worksheet.
#[derive(Debug, Clone)]
pub struct PnlWorksheet<'a> {
    fees: &'a FeeSchedule,
}

impl<'a> PnlWorksheet<'a> {
    pub fn new(fees: &'a FeeSchedule) -> Self {
        Self { fees }
    }

    /// Calculates the complete worksheet.
    ///
    /// Infallible: the only failure mode in the arithmetic is division by
    /// zero in the margins, and both margins are zero-guarded.
    pub fn calculate(&self, input: &PnlInput) -> PnlResult {
        let tech_fee_local = self.tech_fee_local();
        let royalty_fee = self.revenue_share(input.monthly_revenue, self.fees.royalty_rate);
        let marketing_fee = self.revenue_share(input.monthly_revenue, self.fees.marketing_rate);
        let utilities = input.electricity + input.water;

        let total_fixed_costs = input.rent.total_rent
            + input.staff_cost
            + utilities
            + tech_fee_local
            + royalty_fee
            + marketing_fee;

        let net_profit = input.monthly_revenue - total_fixed_costs;
        let profit_margin = percentage_of(net_profit, input.monthly_revenue);

        let adjusted_profit = net_profit + input.rent.monthly_renovation_benefit;
        let adjusted_margin = percentage_of(adjusted_profit, input.monthly_revenue);

        PnlResult {
            monthly_revenue: input.monthly_revenue,
            base_rent: input.rent.base_rent,
            sales_tax: input.rent.sales_tax,
            total_rent: input.rent.total_rent,
            staff_cost: input.staff_cost,
            utilities,
            tech_fee_local,
            royalty_fee,
            marketing_fee,
            total_fixed_costs,
            net_profit,
            profit_margin,
            renovation_savings: input.rent.renovation_savings,
            monthly_renovation_benefit: input.rent.monthly_renovation_benefit,
            adjusted_profit,
            adjusted_margin,
        }
    }

    /// Splits total fixed costs into labelled categories with zero-guarded
    /// percentage shares.
    pub fn cost_breakdown(
        &self,
        result: &PnlResult,
    ) -> Vec<CostBreakdownEntry> {
        let amounts = [
            (CostCategory::Rent, result.base_rent),
            (CostCategory::SalesTax, result.sales_tax),
            (CostCategory::Staff, result.staff_cost),
            (CostCategory::Utilities, result.utilities),
            (CostCategory::TechFee, result.tech_fee_local),
            (CostCategory::Royalties, result.royalty_fee),
            (CostCategory::Marketing, result.marketing_fee),
        ];

        amounts
            .into_iter()
            .map(|(category, amount)| CostBreakdownEntry {
                category,
                amount,
                percentage: percentage_of(amount, result.total_fixed_costs),
            })
            .collect()
    }

    /// Technology fee converted at the manual exchange rate.
    fn tech_fee_local(&self) -> Decimal {
        round_half_up(self.fees.tech_fee_usd * self.fees.usd_exchange_rate)
    }

    /// A configured percent of monthly revenue.
    fn revenue_share(
        &self,
        monthly_revenue: Decimal,
        rate: Decimal,
    ) -> Decimal {
        round_half_up(monthly_revenue * rate / Decimal::ONE_HUNDRED)
    }
}
