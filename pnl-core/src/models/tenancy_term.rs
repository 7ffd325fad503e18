use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::LeaseYear;

/// A leasable unit and its commercial terms.
///
/// Reference data: a term is selected by the caller, never mutated. The
/// per-sqft rate usually steps up each lease year, and the landlord grants a
/// rent-free fit-out period at signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenancyTerm {
    pub unit: String,
    pub floor_area_sqft: Decimal,
    pub rate_year1: Decimal,
    pub rate_year2: Decimal,
    pub rate_year3: Decimal,
    pub renovation_months: u32,
}

impl TenancyTerm {
    /// Per-sqft rate for the given lease year.
    pub fn rate_for(&self, year: LeaseYear) -> Decimal {
        match year {
            LeaseYear::Year1 => self.rate_year1,
            LeaseYear::Year2 => self.rate_year2,
            LeaseYear::Year3 => self.rate_year3,
        }
    }

    /// Monthly flat rent for the given lease year (area × rate).
    pub fn rent_for(&self, year: LeaseYear) -> Decimal {
        self.floor_area_sqft * self.rate_for(year)
    }
}
