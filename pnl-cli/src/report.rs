//! Text rendering of an evaluated scenario: headline metrics, renovation
//! note, cost breakdown, ROI metrics, the recovery curve, and the
//! consolidated summary table.

use std::fmt::Write;

use pnl_core::summary::{format_currency, format_percentage, summary_rows};
use pnl_core::{LeaseYear, TenancyTerm};

use crate::scenario::{Evaluation, Scenario};

/// Renders the full report for one evaluated scenario.
pub fn render(
    scenario: &Scenario,
    evaluation: &Evaluation,
) -> String {
    let mut out = String::new();
    let currency = scenario.currency.as_str();
    let money = |amount| format_currency(amount, currency);

    heading(&mut out, &format!("{} — {}", scenario.term.unit, scenario.lease_year.as_str()));

    metric(&mut out, "Monthly Revenue", &money(evaluation.result.monthly_revenue));
    metric(&mut out, "Total Costs", &money(evaluation.result.total_fixed_costs));
    metric(&mut out, "Net Profit", &money(evaluation.result.net_profit));
    metric(&mut out, "Profit Margin", &format_percentage(evaluation.result.profit_margin));
    metric(&mut out, "Adjusted Profit", &money(evaluation.result.adjusted_profit));
    metric(&mut out, "Adjusted Margin", &format_percentage(evaluation.result.adjusted_margin));

    render_renovation_note(&mut out, scenario, evaluation);
    render_breakdown(&mut out, currency, evaluation);
    render_roi(&mut out, currency, evaluation);
    render_summary(&mut out, scenario, evaluation);

    out
}

/// Renders a term catalogue listing, all lease years side by side.
pub fn render_terms(terms: &[TenancyTerm]) -> String {
    let mut out = String::new();
    heading(&mut out, "Tenancy Terms");

    for term in terms {
        let _ = writeln!(out, "{} ({} sqft)", term.unit, term.floor_area_sqft);
        for year in LeaseYear::all() {
            let _ = writeln!(
                out,
                "  {}: {}/sqft ({})",
                year.as_str(),
                term.rate_for(*year),
                format_currency(term.rent_for(*year), "RM"),
            );
        }
        let _ = writeln!(out, "  Renovation: {} months rent-free", term.renovation_months);
        let _ = writeln!(out);
    }

    out
}

fn heading(
    out: &mut String,
    title: &str,
) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
}

fn metric(
    out: &mut String,
    label: &str,
    value: &str,
) {
    let _ = writeln!(out, "{label:<28}{value:>14}");
}

fn render_renovation_note(
    out: &mut String,
    scenario: &Scenario,
    evaluation: &Evaluation,
) {
    let _ = writeln!(out);
    if scenario.lease_year != LeaseYear::Year1 {
        let _ = writeln!(
            out,
            "{}: no renovation benefit (rent-free period applies to Year 1 only)",
            scenario.lease_year.as_str()
        );
        return;
    }
    if evaluation.rent.monthly_renovation_benefit.is_zero() {
        let _ = writeln!(out, "No renovation benefit calculated");
        return;
    }

    let currency = scenario.currency.as_str();
    let _ = writeln!(
        out,
        "Year 1 renovation savings: {} total ({} months × {}) = +{} monthly benefit",
        format_currency(evaluation.rent.renovation_savings, currency),
        scenario.term.renovation_months,
        format_currency(evaluation.rent.base_rent, currency),
        format_currency(evaluation.rent.monthly_renovation_benefit, currency),
    );
    if let Some(window) = scenario
        .signing
        .and_then(|signing| signing.renovation_window_label(scenario.term.renovation_months))
    {
        let _ = writeln!(out, "Rent-free window: {window}");
    }
}

fn render_breakdown(
    out: &mut String,
    currency: &str,
    evaluation: &Evaluation,
) {
    let _ = writeln!(out);
    heading(out, "Cost Breakdown");
    for entry in &evaluation.breakdown {
        let _ = writeln!(
            out,
            "{:<12}{:>14}{:>9}",
            entry.category.label(),
            format_currency(entry.amount, currency),
            format_percentage(entry.percentage),
        );
    }
}

fn render_roi(
    out: &mut String,
    currency: &str,
    evaluation: &Evaluation,
) {
    let _ = writeln!(out);
    heading(out, "Investment & ROI");
    let _ = writeln!(
        out,
        "Initial Investment: {}",
        format_currency(evaluation.projection.initial_investment, currency)
    );

    let projection = &evaluation.projection;
    let (Some(months), Some(years)) = (projection.payback.months(), projection.payback.years())
    else {
        let _ = writeln!(out, "Business is not currently profitable.");
        let _ = writeln!(
            out,
            "Investment recovery cannot be projected while the business loses money monthly."
        );
        return;
    };

    metric(out, "Payback Period", &format!("{months:.1} months"));
    metric(out, "Payback in Years", &format!("{years:.1} years"));
    metric(out, "Annual ROI", &format_percentage(projection.annual_roi));
    metric(out, "Monthly Break-even", "Month 1");

    if projection.recovery.is_empty() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{:<8}{:>14}{:>14}", "Month", "Recovered", "Remaining");
    for point in &projection.recovery {
        let _ = writeln!(
            out,
            "{:<8}{:>14}{:>14}",
            point.month,
            format_currency(point.recovered, currency),
            format_currency(point.remaining, currency),
        );
    }
}

fn render_summary(
    out: &mut String,
    scenario: &Scenario,
    evaluation: &Evaluation,
) {
    let _ = writeln!(out);
    heading(out, "Summary");
    let rows = summary_rows(
        &scenario.currency,
        &scenario.sales,
        &evaluation.sales,
        &evaluation.pnl_input,
        &evaluation.result,
    );
    for row in rows {
        let _ = writeln!(out, "{:<28}{:>14}", row.metric, row.value);
    }
}
