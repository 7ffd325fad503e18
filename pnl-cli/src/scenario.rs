//! Scenario files: the TOML schema the CLI consumes, caller-side bounds
//! validation, and the evaluation pipeline that wires the engine together.
//!
//! The engine itself does not re-validate ranges; everything a user can get
//! wrong is rejected here before any arithmetic runs.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use pnl_core::calculations::pnl::{CostBreakdownEntry, PnlInput, PnlResult, PnlWorksheet};
use pnl_core::calculations::rent::{RentCharge, RentPolicy, RentResolver};
use pnl_core::calculations::roi::{InvestmentProjection, project_recovery};
use pnl_core::calculations::sales::{SalesSummary, aggregate_sales};
use pnl_core::{
    FeeSchedule, FeeScheduleError, LeaseYear, SalesInputs, SigningPeriod, StaffRoster,
    StaffingPlan, TenancyTerm, parse_month,
};

const MIN_OPERATING_DAYS: u32 = 20;
const MAX_OPERATING_DAYS: u32 = 31;

/// Errors that can occur when loading or validating a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("cannot read scenario '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("scenario parse error: {0}")]
    Parse(#[from] Box<toml::de::Error>),

    #[error("operating days must be between 20 and 31, got {0}")]
    OperatingDaysOutOfRange(u32),

    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount {
        field: &'static str,
        value: Decimal,
    },

    #[error("unknown signing month '{0}'")]
    UnknownMonth(String),

    #[error(transparent)]
    Fees(#[from] FeeScheduleError),
}

/// A fully validated scenario, ready to evaluate.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub currency: String,
    pub lease_year: LeaseYear,
    pub rent_policy: RentPolicy,
    pub signing: Option<SigningPeriod>,
    pub term: TenancyTerm,
    pub sales: SalesInputs,
    pub electricity: Decimal,
    pub water: Decimal,
    pub staffing: StaffingPlan,
    pub fees: FeeSchedule,
    pub initial_investment: Decimal,
}

/// Everything the engine computed for one scenario.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub sales: SalesSummary,
    pub rent: RentCharge,
    pub staff_cost: Decimal,
    pub pnl_input: PnlInput,
    pub result: PnlResult,
    pub breakdown: Vec<CostBreakdownEntry>,
    pub projection: InvestmentProjection,
}

impl Scenario {
    /// Loads and validates a scenario from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let raw = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parses and validates a scenario from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, ScenarioError> {
        let file: ScenarioFile = toml::from_str(raw).map_err(Box::new)?;
        Self::from_file(file)
    }

    fn from_file(file: ScenarioFile) -> Result<Self, ScenarioError> {
        if file.sales.operating_days < MIN_OPERATING_DAYS
            || file.sales.operating_days > MAX_OPERATING_DAYS
        {
            return Err(ScenarioError::OperatingDaysOutOfRange(
                file.sales.operating_days,
            ));
        }

        let non_negative = [
            ("weekday sales", file.sales.weekday_sales),
            ("weekend sales", file.sales.weekend_sales),
            ("electricity", file.costs.electricity),
            ("water", file.costs.water),
            ("initial investment", file.investment.initial),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(ScenarioError::NegativeAmount { field, value });
            }
        }
        validate_staffing(&file.staffing)?;

        let signing = file
            .signing
            .map(|section| {
                let month = parse_month(&section.month)
                    .ok_or_else(|| ScenarioError::UnknownMonth(section.month.clone()))?;
                Ok::<_, ScenarioError>(SigningPeriod {
                    month,
                    year: section.year,
                })
            })
            .transpose()?;

        let fees = file.fees.apply(FeeSchedule::default());
        fees.validate()?;

        // Route roster entries through `add` so file input gets the same
        // empty-name handling as interactive input.
        let staffing = match file.staffing {
            StaffingPlan::Roster(roster) => {
                let mut cleaned = StaffRoster::new();
                for member in roster.members() {
                    cleaned.add(member.clone());
                }
                StaffingPlan::Roster(cleaned)
            }
            other => other,
        };

        Ok(Self {
            currency: file.currency,
            lease_year: file.lease_year,
            rent_policy: file.rent_policy,
            signing,
            term: file.tenancy,
            sales: file.sales,
            electricity: file.costs.electricity,
            water: file.costs.water,
            staffing,
            fees,
            initial_investment: file.investment.initial,
        })
    }

    /// Runs the full pipeline: sales, rent, staffing, the profit worksheet,
    /// the cost breakdown, and the investment projection.
    pub fn evaluate(&self) -> Evaluation {
        let sales = aggregate_sales(&self.sales);
        debug!(revenue = %sales.monthly_revenue, "sales aggregated");

        let rent = RentResolver::new(&self.fees).resolve(
            &self.term,
            self.lease_year,
            self.rent_policy,
            sales.monthly_revenue,
        );
        let staff_cost = self.staffing.monthly_cost(&self.fees);

        let pnl_input = PnlInput {
            monthly_revenue: sales.monthly_revenue,
            rent: rent.clone(),
            staff_cost,
            electricity: self.electricity,
            water: self.water,
        };
        let worksheet = PnlWorksheet::new(&self.fees);
        let result = worksheet.calculate(&pnl_input);
        let breakdown = worksheet.cost_breakdown(&result);
        let projection = project_recovery(self.initial_investment, result.net_profit);

        Evaluation {
            sales,
            rent,
            staff_cost,
            pnl_input,
            result,
            breakdown,
            projection,
        }
    }
}

fn validate_staffing(plan: &StaffingPlan) -> Result<(), ScenarioError> {
    match plan {
        StaffingPlan::FlatHeadcount { monthly_salary, .. } => {
            if *monthly_salary < Decimal::ZERO {
                return Err(ScenarioError::NegativeAmount {
                    field: "monthly salary",
                    value: *monthly_salary,
                });
            }
        }
        StaffingPlan::TieredHoursBased {
            full_time_salary,
            part_time_hourly_rate,
            ..
        } => {
            for (field, value) in [
                ("full-time salary", *full_time_salary),
                ("part-time hourly rate", *part_time_hourly_rate),
            ] {
                if value < Decimal::ZERO {
                    return Err(ScenarioError::NegativeAmount { field, value });
                }
            }
        }
        StaffingPlan::Roster(roster) => {
            for member in roster.members() {
                if member.monthly_salary < Decimal::ZERO {
                    return Err(ScenarioError::NegativeAmount {
                        field: "member salary",
                        value: member.monthly_salary,
                    });
                }
            }
        }
    }
    Ok(())
}

// ─── file schema ─────────────────────────────────────────────────────────────

fn default_currency() -> String {
    "RM".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScenarioFile {
    #[serde(default = "default_currency")]
    currency: String,
    lease_year: LeaseYear,
    #[serde(default)]
    rent_policy: RentPolicy,
    signing: Option<SigningSection>,
    tenancy: TenancyTerm,
    sales: SalesInputs,
    costs: CostsSection,
    staffing: StaffingPlan,
    #[serde(default)]
    fees: FeeOverrides,
    investment: InvestmentSection,
}

#[derive(Debug, Clone, Deserialize)]
struct SigningSection {
    month: String,
    year: i32,
}

#[derive(Debug, Clone, Deserialize)]
struct CostsSection {
    electricity: Decimal,
    water: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
struct InvestmentSection {
    initial: Decimal,
}

/// Optional overrides for the default [`FeeSchedule`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FeeOverrides {
    gto_rate: Option<Decimal>,
    sales_tax_rate: Option<Decimal>,
    royalty_rate: Option<Decimal>,
    marketing_rate: Option<Decimal>,
    tech_fee_usd: Option<Decimal>,
    usd_exchange_rate: Option<Decimal>,
    epf_resident_rate: Option<Decimal>,
    epf_non_resident_rate: Option<Decimal>,
}

impl FeeOverrides {
    fn apply(
        &self,
        base: FeeSchedule,
    ) -> FeeSchedule {
        FeeSchedule {
            gto_rate: self.gto_rate.unwrap_or(base.gto_rate),
            sales_tax_rate: self.sales_tax_rate.unwrap_or(base.sales_tax_rate),
            royalty_rate: self.royalty_rate.unwrap_or(base.royalty_rate),
            marketing_rate: self.marketing_rate.unwrap_or(base.marketing_rate),
            tech_fee_usd: self.tech_fee_usd.unwrap_or(base.tech_fee_usd),
            usd_exchange_rate: self.usd_exchange_rate.unwrap_or(base.usd_exchange_rate),
            epf_resident_rate: self.epf_resident_rate.unwrap_or(base.epf_resident_rate),
            epf_non_resident_rate: self
                .epf_non_resident_rate
                .unwrap_or(base.epf_non_resident_rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn minimal_scenario() -> String {
        r#"
            lease_year = "Year 1"
            rent_policy = "turnover"

            [signing]
            month = "Aug"
            year = 2025

            [tenancy]
            unit = "LG 15 + 14"
            floor_area_sqft = 666
            rate_year1 = 8.5
            rate_year2 = 9.0
            rate_year3 = 9.5
            renovation_months = 3

            [sales]
            weekday_sales = 500
            weekend_sales = 900
            operating_days = 30

            [costs]
            electricity = 300
            water = 100

            [staffing]
            mode = "flat_headcount"
            headcount = 2
            monthly_salary = 1800

            [investment]
            initial = 150000
        "#
        .to_string()
    }

    #[test]
    fn parses_a_minimal_scenario_with_defaults() {
        let scenario = Scenario::from_toml_str(&minimal_scenario()).unwrap();

        assert_eq!(scenario.currency, "RM");
        assert_eq!(scenario.lease_year, LeaseYear::Year1);
        assert_eq!(scenario.rent_policy, RentPolicy::Turnover);
        assert_eq!(scenario.term.unit, "LG 15 + 14");
        assert_eq!(scenario.fees, FeeSchedule::default());
        assert_eq!(scenario.initial_investment, dec!(150000));
        assert_eq!(scenario.signing.unwrap().year, 2025);
    }

    #[test]
    fn rent_policy_defaults_to_flat() {
        let raw = minimal_scenario().replace("rent_policy = \"turnover\"", "");

        let scenario = Scenario::from_toml_str(&raw).unwrap();

        assert_eq!(scenario.rent_policy, RentPolicy::Flat);
    }

    #[test]
    fn rejects_operating_days_out_of_bounds() {
        let raw = minimal_scenario().replace("operating_days = 30", "operating_days = 32");

        let err = Scenario::from_toml_str(&raw).unwrap_err();

        assert!(matches!(err, ScenarioError::OperatingDaysOutOfRange(32)));
    }

    #[test]
    fn rejects_negative_amounts() {
        let raw = minimal_scenario().replace("water = 100", "water = -1");

        let err = Scenario::from_toml_str(&raw).unwrap_err();

        assert!(matches!(
            err,
            ScenarioError::NegativeAmount { field: "water", .. }
        ));
    }

    #[test]
    fn rejects_an_unknown_signing_month() {
        let raw = minimal_scenario().replace("month = \"Aug\"", "month = \"Smarch\"");

        let err = Scenario::from_toml_str(&raw).unwrap_err();

        assert!(matches!(err, ScenarioError::UnknownMonth(month) if month == "Smarch"));
    }

    #[test]
    fn fee_overrides_replace_only_the_given_rates() {
        let raw = minimal_scenario()
            + r#"
            [fees]
            royalty_rate = 5.5
            usd_exchange_rate = 4.28
        "#;

        let scenario = Scenario::from_toml_str(&raw).unwrap();

        assert_eq!(scenario.fees.royalty_rate, dec!(5.5));
        assert_eq!(scenario.fees.usd_exchange_rate, dec!(4.28));
        assert_eq!(scenario.fees.gto_rate, dec!(7.5));
    }

    #[test]
    fn rejects_invalid_fee_overrides() {
        let raw = minimal_scenario()
            + r#"
            [fees]
            royalty_rate = 150
        "#;

        let err = Scenario::from_toml_str(&raw).unwrap_err();

        assert!(matches!(err, ScenarioError::Fees(_)));
    }

    #[test]
    fn parses_a_roster_staffing_plan() {
        let raw = minimal_scenario().replace(
            "mode = \"flat_headcount\"\n            headcount = 2\n            monthly_salary = 1800",
            "mode = \"roster\"\n\n            [[staffing.members]]\n            name = \"Aina\"\n            monthly_salary = 2000\n            residency = \"resident\"",
        );

        let scenario = Scenario::from_toml_str(&raw).unwrap();

        match &scenario.staffing {
            StaffingPlan::Roster(roster) => {
                assert_eq!(roster.len(), 1);
                assert_eq!(roster.members()[0].name, "Aina");
            }
            other => panic!("expected roster plan, got {other:?}"),
        }
    }

    #[test]
    fn empty_named_roster_entries_are_dropped_silently() {
        let raw = minimal_scenario().replace(
            "mode = \"flat_headcount\"\n            headcount = 2\n            monthly_salary = 1800",
            "mode = \"roster\"\n\n            [[staffing.members]]\n            name = \"\"\n            monthly_salary = 2000\n            residency = \"resident\"\n\n            [[staffing.members]]\n            name = \"Aina\"\n            monthly_salary = 2000\n            residency = \"resident\"",
        );

        let scenario = Scenario::from_toml_str(&raw).unwrap();

        match &scenario.staffing {
            StaffingPlan::Roster(roster) => {
                assert_eq!(roster.len(), 1);
                assert_eq!(roster.members()[0].name, "Aina");
            }
            other => panic!("expected roster plan, got {other:?}"),
        }
    }

    #[test]
    fn evaluate_runs_the_full_pipeline() {
        let scenario = Scenario::from_toml_str(&minimal_scenario()).unwrap();

        let evaluation = scenario.evaluate();

        assert_eq!(evaluation.sales.monthly_revenue, dec!(18600.00));
        assert_eq!(evaluation.rent.flat_rent, dec!(5661.00));
        assert_eq!(evaluation.staff_cost, dec!(3600));
        assert_eq!(
            evaluation.result.total_fixed_costs,
            evaluation
                .breakdown
                .iter()
                .map(|entry| entry.amount)
                .sum::<Decimal>()
        );
    }
}
