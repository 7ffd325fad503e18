//! String-formatted output: currency/percent display and the consolidated
//! summary table of every computed metric.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::pnl::{PnlInput, PnlResult};
use crate::calculations::sales::SalesSummary;
use crate::models::SalesInputs;

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub metric: String,
    pub value: String,
}

impl SummaryRow {
    fn new(
        metric: &str,
        value: String,
    ) -> Self {
        Self {
            metric: metric.to_string(),
            value,
        }
    }
}

/// Formats a monetary amount with a currency prefix and thousands
/// separators, rounded to whole units: `RM 18,600`.
pub fn format_currency(
    amount: Decimal,
    currency: &str,
) -> String {
    let rounded =
        amount.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{currency} {sign}{}", group_thousands(&digits))
}

/// Formats a percentage with one decimal place: `34.2%`.
pub fn format_percentage(value: Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}%")
}

/// Inserts `,` separators into a plain digit string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let count = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (count - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Builds the consolidated summary table: every input and computed metric
/// as string-formatted key/value pairs.
pub fn summary_rows(
    currency: &str,
    inputs: &SalesInputs,
    sales: &SalesSummary,
    pnl_input: &PnlInput,
    result: &PnlResult,
) -> Vec<SummaryRow> {
    let money = |amount: Decimal| format_currency(amount, currency);

    vec![
        SummaryRow::new("Weekday Daily Sales", money(inputs.weekday_sales)),
        SummaryRow::new("Weekend Daily Sales", money(inputs.weekend_sales)),
        SummaryRow::new("Operating Days", inputs.operating_days.to_string()),
        SummaryRow::new("Weekday Days", sales.weekday_days.to_string()),
        SummaryRow::new("Weekend Days", sales.weekend_days.to_string()),
        SummaryRow::new("Monthly Revenue", money(result.monthly_revenue)),
        SummaryRow::new("Base Rent", money(result.base_rent)),
        SummaryRow::new("Sales Tax", money(result.sales_tax)),
        SummaryRow::new("Total Rent", money(result.total_rent)),
        SummaryRow::new("Staff Cost", money(result.staff_cost)),
        SummaryRow::new("Electricity", money(pnl_input.electricity)),
        SummaryRow::new("Water", money(pnl_input.water)),
        SummaryRow::new("Technology Fee", money(result.tech_fee_local)),
        SummaryRow::new("Royalty Fees", money(result.royalty_fee)),
        SummaryRow::new("Marketing Fees", money(result.marketing_fee)),
        SummaryRow::new("Total Costs", money(result.total_fixed_costs)),
        SummaryRow::new("Net Profit", money(result.net_profit)),
        SummaryRow::new("Profit Margin", format_percentage(result.profit_margin)),
        SummaryRow::new("Renovation Savings", money(result.renovation_savings)),
        SummaryRow::new(
            "Monthly Renovation Benefit",
            money(result.monthly_renovation_benefit),
        ),
        SummaryRow::new("Adjusted Profit", money(result.adjusted_profit)),
        SummaryRow::new("Adjusted Margin", format_percentage(result.adjusted_margin)),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::pnl::PnlWorksheet;
    use crate::calculations::rent::RentCharge;
    use crate::models::FeeSchedule;

    // =========================================================================
    // format_currency tests
    // =========================================================================

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(18600), "RM"), "RM 18,600");
        assert_eq!(format_currency(dec!(1234567), "RM"), "RM 1,234,567");
    }

    #[test]
    fn format_currency_rounds_to_whole_units() {
        assert_eq!(format_currency(dec!(6113.88), "RM"), "RM 6,114");
        assert_eq!(format_currency(dec!(6113.49), "RM"), "RM 6,113");
    }

    #[test]
    fn format_currency_handles_small_and_zero_amounts() {
        assert_eq!(format_currency(dec!(93), "RM"), "RM 93");
        assert_eq!(format_currency(dec!(0), "RM"), "RM 0");
    }

    #[test]
    fn format_currency_keeps_the_sign_inside() {
        assert_eq!(format_currency(dec!(-2500), "RM"), "RM -2,500");
    }

    // =========================================================================
    // format_percentage tests
    // =========================================================================

    #[test]
    fn format_percentage_uses_one_decimal() {
        assert_eq!(format_percentage(dec!(34.18)), "34.2%");
        assert_eq!(format_percentage(dec!(0)), "0.0%");
        assert_eq!(format_percentage(dec!(-12.34)), "-12.3%");
    }

    // =========================================================================
    // summary_rows tests
    // =========================================================================

    #[test]
    fn summary_covers_every_metric() {
        let fees = FeeSchedule::default();
        let inputs = SalesInputs {
            weekday_sales: dec!(500),
            weekend_sales: dec!(900),
            operating_days: 30,
        };
        let sales = SalesSummary {
            weekday_days: 21,
            weekend_days: 9,
            monthly_revenue: dec!(18600.00),
        };
        let pnl_input = PnlInput {
            monthly_revenue: dec!(18600.00),
            rent: RentCharge {
                flat_rent: dec!(5661.00),
                turnover_rent: Some(dec!(1395.00)),
                base_rent: dec!(5661.00),
                sales_tax: dec!(452.88),
                total_rent: dec!(6113.88),
                renovation_savings: dec!(16983.00),
                monthly_renovation_benefit: dec!(1415.25),
            },
            staff_cost: dec!(4076),
            electricity: dec!(300),
            water: dec!(100),
        };
        let result = PnlWorksheet::new(&fees).calculate(&pnl_input);

        let rows = summary_rows("RM", &inputs, &sales, &pnl_input, &result);

        assert_eq!(rows.len(), 22);
        let find = |metric: &str| {
            rows.iter()
                .find(|row| row.metric == metric)
                .map(|row| row.value.clone())
                .unwrap_or_else(|| panic!("missing row {metric}"))
        };
        assert_eq!(find("Monthly Revenue"), "RM 18,600");
        assert_eq!(find("Total Costs"), "RM 12,243");
        assert_eq!(find("Net Profit"), "RM 6,357");
        assert_eq!(find("Profit Margin"), "34.2%");
        assert_eq!(find("Adjusted Margin"), "41.8%");
        assert_eq!(find("Operating Days"), "30");
    }
}
