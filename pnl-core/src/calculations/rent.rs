//! Rent resolution: flat rent versus turnover (GTO) rent, sales tax on the
//! base, and the Year-1 renovation benefit.
//!
//! Under a turnover clause the landlord charges the greater of the fixed
//! minimum and a percentage of gross sales. The sales/service tax is always
//! applied on top of the resolved base. A rent-free fit-out period granted
//! at signing is valued at the base rent and amortized over 12 months so
//! Year-1 figures stay comparable with later years.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pnl_core::{FeeSchedule, LeaseYear, TenancyTerm};
//! use pnl_core::calculations::rent::{RentPolicy, RentResolver};
//!
//! let term = TenancyTerm {
//!     unit: "LG 15 + 14".to_string(),
//!     floor_area_sqft: dec!(666),
//!     rate_year1: dec!(8.50),
//!     rate_year2: dec!(9),
//!     rate_year3: dec!(9.5),
//!     renovation_months: 3,
//! };
//!
//! let fees = FeeSchedule::default();
//! let resolver = RentResolver::new(&fees);
//! let charge = resolver.resolve(&term, LeaseYear::Year1, RentPolicy::Turnover, dec!(80000));
//!
//! // 7.5% of 80 000 beats the 5 661 flat rent.
//! assert_eq!(charge.base_rent, dec!(6000.00));
//! assert_eq!(charge.sales_tax, dec!(480.00));
//! assert_eq!(charge.total_rent, dec!(6480.00));
//! assert_eq!(charge.monthly_renovation_benefit, dec!(1500.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{max, round_half_up};
use crate::models::{FeeSchedule, LeaseYear, TenancyTerm};

/// How the base rent is determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentPolicy {
    /// Fixed rent from the tenancy term.
    #[default]
    Flat,
    /// Greater of the flat rent and the GTO percentage of revenue.
    Turnover,
}

/// Resolved monthly rent, with the intermediate amounts kept for
/// transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentCharge {
    /// Flat rent from the tenancy term for the selected lease year.
    pub flat_rent: Decimal,
    /// Turnover rent candidate; `None` under the flat policy.
    pub turnover_rent: Option<Decimal>,
    /// The charged base: flat rent, or the greater candidate under GTO.
    pub base_rent: Decimal,
    /// Sales/service tax on the base rent.
    pub sales_tax: Decimal,
    /// Base rent plus sales tax.
    pub total_rent: Decimal,
    /// Value of the rent-free period (Year 1 only, else zero).
    pub renovation_savings: Decimal,
    /// Renovation savings spread over 12 months (Year 1 only, else zero).
    pub monthly_renovation_benefit: Decimal,
}

/// Resolves the monthly rent charge for a tenancy term.
#[derive(Debug, Clone)]
pub struct RentResolver<'a> {
    fees: &'a FeeSchedule,
}

impl<'a> RentResolver<'a> {
    pub fn new(fees: &'a FeeSchedule) -> Self {
        Self { fees }
    }

    /// Resolves the full rent charge for one month.
    pub fn resolve(
        &self,
        term: &TenancyTerm,
        year: LeaseYear,
        policy: RentPolicy,
        monthly_revenue: Decimal,
    ) -> RentCharge {
        let flat_rent = round_half_up(term.rent_for(year));

        let (turnover_rent, base_rent) = match policy {
            RentPolicy::Flat => (None, flat_rent),
            RentPolicy::Turnover => {
                let turnover = self.turnover_rent(monthly_revenue);
                (Some(turnover), max(flat_rent, turnover))
            }
        };

        let sales_tax = self.sales_tax(base_rent);
        let total_rent = base_rent + sales_tax;
        let (renovation_savings, monthly_renovation_benefit) =
            self.renovation_benefit(term, year, base_rent);

        RentCharge {
            flat_rent,
            turnover_rent,
            base_rent,
            sales_tax,
            total_rent,
            renovation_savings,
            monthly_renovation_benefit,
        }
    }

    /// GTO candidate: the configured percentage of monthly revenue.
    fn turnover_rent(&self, monthly_revenue: Decimal) -> Decimal {
        round_half_up(monthly_revenue * self.fees.gto_rate / Decimal::ONE_HUNDRED)
    }

    /// Sales/service tax charged on top of the base rent.
    fn sales_tax(&self, base_rent: Decimal) -> Decimal {
        round_half_up(base_rent * self.fees.sales_tax_rate / Decimal::ONE_HUNDRED)
    }

    /// Value of the rent-free period and its 12-month amortization.
    ///
    /// The rent-free months are granted at signing, so only Year 1 carries
    /// the benefit; later lease years report zero.
    fn renovation_benefit(
        &self,
        term: &TenancyTerm,
        year: LeaseYear,
        base_rent: Decimal,
    ) -> (Decimal, Decimal) {
        if year != LeaseYear::Year1 {
            return (Decimal::ZERO, Decimal::ZERO);
        }
        let savings = round_half_up(base_rent * Decimal::from(term.renovation_months));
        let monthly = round_half_up(savings / Decimal::from(12));
        (savings, monthly)
    }
}
