use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pnl_cli::catalog::TermCatalog;
use pnl_cli::report;
use pnl_cli::scenario::Scenario;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Monthly profit-and-loss estimator for a coffee-shop tenancy.
///
/// Evaluates a scenario file (sales volume, staffing, rent terms, fixed
/// fees) into a monthly profit model and investment-payback metrics.
#[derive(Debug, Parser)]
#[command(name = "pnl", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a scenario file and print the full report.
    Run {
        /// Path to the scenario TOML file.
        #[arg(long)]
        scenario: PathBuf,

        /// Override the scenario's initial investment.
        #[arg(long)]
        investment: Option<Decimal>,
    },

    /// List tenancy terms from a CSV catalogue.
    Terms {
        /// Path to the catalogue CSV file.
        #[arg(long)]
        catalog: PathBuf,
    },
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            scenario,
            investment,
        } => {
            let mut scenario = Scenario::load(&scenario)?;
            if let Some(investment) = investment {
                if investment < Decimal::ZERO {
                    bail!("initial investment must be non-negative, got {investment}");
                }
                scenario.initial_investment = investment;
            }

            debug!(
                unit = %scenario.term.unit,
                year = scenario.lease_year.as_str(),
                "evaluating scenario"
            );
            let evaluation = scenario.evaluate();
            print!("{}", report::render(&scenario, &evaluation));
        }
        Command::Terms { catalog } => {
            let catalog = TermCatalog::load(&catalog)?;
            print!("{}", report::render_terms(catalog.terms()));
        }
    }

    Ok(())
}
