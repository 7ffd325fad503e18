use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ResidencyStatus;

/// Errors that can occur when validating a [`FeeSchedule`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeeScheduleError {
    /// A percentage-of-revenue or percentage-of-rent rate is outside [0, 100].
    #[error("{rate} must be between 0 and 100 percent, got {value}")]
    RateOutOfRange { rate: &'static str, value: Decimal },

    /// A statutory contribution rate is outside [0, 1].
    #[error("{rate} must be between 0 and 1, got {value}")]
    ContributionRateOutOfRange { rate: &'static str, value: Decimal },

    /// The technology fee must be non-negative.
    #[error("technology fee must be non-negative, got {0}")]
    NegativeTechFee(Decimal),

    /// The exchange rate must be positive.
    #[error("exchange rate must be positive, got {0}")]
    NonPositiveExchangeRate(Decimal),
}

/// Every rate and fixed fee the model charges against the business.
///
/// The observed variants of this model disagree on several of these values
/// (royalty 5% vs 5.5%, exchange rate 4.20 vs 4.28), so all of them are
/// configuration. The defaults follow the latest variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Turnover rent as a percent of monthly revenue (GTO clause).
    pub gto_rate: Decimal,
    /// Sales and service tax as a percent of base rent.
    pub sales_tax_rate: Decimal,
    /// Franchise royalty as a percent of monthly revenue.
    pub royalty_rate: Decimal,
    /// Marketing levy as a percent of monthly revenue.
    pub marketing_rate: Decimal,
    /// Monthly technology fee, charged in USD.
    pub tech_fee_usd: Decimal,
    /// Manual USD → local currency exchange rate.
    pub usd_exchange_rate: Decimal,
    /// Statutory employer contribution rate for resident staff.
    pub epf_resident_rate: Decimal,
    /// Statutory employer contribution rate for non-resident staff.
    pub epf_non_resident_rate: Decimal,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            gto_rate: Decimal::new(75, 1),            // 7.5%
            sales_tax_rate: Decimal::from(8),         // 8%
            royalty_rate: Decimal::from(5),           // 5%
            marketing_rate: Decimal::new(5, 1),       // 0.5%
            tech_fee_usd: Decimal::from(150),
            usd_exchange_rate: Decimal::new(420, 2),  // 4.20
            epf_resident_rate: Decimal::new(12, 2),   // 0.12
            epf_non_resident_rate: Decimal::new(2, 2), // 0.02
        }
    }
}

impl FeeSchedule {
    /// Validates the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`FeeScheduleError`] if:
    /// - any percent-style rate is outside [0, 100]
    /// - any contribution rate is outside [0, 1]
    /// - the technology fee is negative
    /// - the exchange rate is zero or negative
    pub fn validate(&self) -> Result<(), FeeScheduleError> {
        let percent_rates = [
            ("GTO rate", self.gto_rate),
            ("sales tax rate", self.sales_tax_rate),
            ("royalty rate", self.royalty_rate),
            ("marketing rate", self.marketing_rate),
        ];
        for (rate, value) in percent_rates {
            if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
                return Err(FeeScheduleError::RateOutOfRange { rate, value });
            }
        }

        let contribution_rates = [
            ("resident contribution rate", self.epf_resident_rate),
            ("non-resident contribution rate", self.epf_non_resident_rate),
        ];
        for (rate, value) in contribution_rates {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(FeeScheduleError::ContributionRateOutOfRange { rate, value });
            }
        }

        if self.tech_fee_usd < Decimal::ZERO {
            return Err(FeeScheduleError::NegativeTechFee(self.tech_fee_usd));
        }
        if self.usd_exchange_rate <= Decimal::ZERO {
            return Err(FeeScheduleError::NonPositiveExchangeRate(
                self.usd_exchange_rate,
            ));
        }
        Ok(())
    }

    /// Contribution rate for the given residency status.
    pub fn contribution_rate(&self, residency: ResidencyStatus) -> Decimal {
        match residency {
            ResidencyStatus::Resident => self.epf_resident_rate,
            ResidencyStatus::NonResident => self.epf_non_resident_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::ResidencyStatus;

    #[test]
    fn defaults_validate() {
        assert_eq!(FeeSchedule::default().validate(), Ok(()));
    }

    #[test]
    fn default_rates_match_the_latest_variant() {
        let fees = FeeSchedule::default();

        assert_eq!(fees.gto_rate, dec!(7.5));
        assert_eq!(fees.sales_tax_rate, dec!(8));
        assert_eq!(fees.royalty_rate, dec!(5));
        assert_eq!(fees.marketing_rate, dec!(0.5));
        assert_eq!(fees.tech_fee_usd, dec!(150));
        assert_eq!(fees.usd_exchange_rate, dec!(4.20));
    }

    #[test]
    fn validate_rejects_percent_rate_above_100() {
        let fees = FeeSchedule {
            royalty_rate: dec!(101),
            ..FeeSchedule::default()
        };

        assert_eq!(
            fees.validate(),
            Err(FeeScheduleError::RateOutOfRange {
                rate: "royalty rate",
                value: dec!(101),
            })
        );
    }

    #[test]
    fn validate_rejects_contribution_rate_above_one() {
        let fees = FeeSchedule {
            epf_resident_rate: dec!(1.2),
            ..FeeSchedule::default()
        };

        assert_eq!(
            fees.validate(),
            Err(FeeScheduleError::ContributionRateOutOfRange {
                rate: "resident contribution rate",
                value: dec!(1.2),
            })
        );
    }

    #[test]
    fn validate_rejects_non_positive_exchange_rate() {
        let fees = FeeSchedule {
            usd_exchange_rate: Decimal::ZERO,
            ..FeeSchedule::default()
        };

        assert_eq!(
            fees.validate(),
            Err(FeeScheduleError::NonPositiveExchangeRate(Decimal::ZERO))
        );
    }

    #[test]
    fn contribution_rate_follows_residency() {
        let fees = FeeSchedule::default();

        assert_eq!(fees.contribution_rate(ResidencyStatus::Resident), dec!(0.12));
        assert_eq!(
            fees.contribution_rate(ResidencyStatus::NonResident),
            dec!(0.02)
        );
    }
}
